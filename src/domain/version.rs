//! Release version parsing and the version-tier table.
//!
//! The tier table is the only place that knows which Jira releases ship
//! under which distribution name and which Tomcat listener set they expect.
//! New tiers are added by prepending a row; renderers only ever see the
//! resulting [`InstallLayout`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::domain::AppError;

/// A dotted release version such as `7.0.4` or `6.3.4a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    raw: String,
    major: u32,
}

impl ReleaseVersion {
    /// Parse a version string.
    ///
    /// Every dot-separated segment must start with at least one ASCII digit
    /// and may carry an alphanumeric suffix (`4a`, `0rc1`).
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidVersion(raw.to_string());

        let mut major = None;
        for segment in raw.split('.') {
            let digits_end =
                segment.find(|c: char| !c.is_ascii_digit()).unwrap_or(segment.len());
            if digits_end == 0 {
                return Err(invalid());
            }
            if !segment[digits_end..].chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            if major.is_none() {
                major = Some(segment[..digits_end].parse::<u32>().map_err(|_| invalid())?);
            }
        }

        let major = major.ok_or_else(invalid)?;
        Ok(Self { raw: raw.to_string(), major })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for ReleaseVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Tomcat lifecycle listeners declared at the top of `server.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerSet {
    /// Tomcat 7 listeners, including `JasperListener`.
    Legacy,
    /// Tomcat 8+ listeners; `JasperListener` no longer exists.
    Modern,
}

struct VersionTier {
    min_major: u32,
    distribution: &'static str,
    listeners: ListenerSet,
}

/// Ordered newest first; the first tier whose `min_major` is satisfied wins.
const VERSION_TIERS: &[VersionTier] = &[VersionTier {
    min_major: 7,
    distribution: "atlassian-jira-software",
    listeners: ListenerSet::Modern,
}];

const FALLBACK_TIER: VersionTier =
    VersionTier { min_major: 0, distribution: "atlassian-jira", listeners: ListenerSet::Legacy };

/// Version-derived install layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallLayout {
    pub version: ReleaseVersion,
    /// Name of the unpacked distribution directory, e.g.
    /// `atlassian-jira-software-7.0.4-standalone`.
    pub dir_name: String,
    pub listeners: ListenerSet,
}

impl InstallLayout {
    /// Parse `version` and resolve its layout.
    pub fn resolve(version: &str) -> Result<Self, AppError> {
        ReleaseVersion::parse(version).map(Self::for_version)
    }

    pub fn for_version(version: ReleaseVersion) -> Self {
        let tier = VERSION_TIERS
            .iter()
            .find(|tier| version.major() >= tier.min_major)
            .unwrap_or(&FALLBACK_TIER);

        let dir_name = format!("{}-{}-standalone", tier.distribution, version);
        Self { version, dir_name, listeners: tier.listeners }
    }

    pub fn uses_modern_listeners(&self) -> bool {
        self.listeners == ListenerSet::Modern
    }

    /// Full install path below the given install root.
    pub fn install_path(&self, install_root: &Path) -> PathBuf {
        install_root.join(&self.dir_name)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn legacy_release_uses_plain_distribution_name() {
        let layout = InstallLayout::resolve("6.3.4a").unwrap();
        assert_eq!(layout.dir_name, "atlassian-jira-6.3.4a-standalone");
        assert_eq!(layout.listeners, ListenerSet::Legacy);
        assert!(!layout.uses_modern_listeners());
    }

    #[test]
    fn release_seven_switches_to_software_distribution() {
        let layout = InstallLayout::resolve("7.0.4").unwrap();
        assert_eq!(layout.dir_name, "atlassian-jira-software-7.0.4-standalone");
        assert!(layout.uses_modern_listeners());
    }

    #[test]
    fn later_majors_stay_on_modern_tier() {
        let layout = InstallLayout::resolve("10.3.1").unwrap();
        assert!(layout.uses_modern_listeners());
        assert_eq!(layout.version.major(), 10);
    }

    #[test]
    fn install_path_joins_root() {
        let layout = InstallLayout::resolve("6.3.4a").unwrap();
        assert_eq!(
            layout.install_path(Path::new("/opt/jira")),
            PathBuf::from("/opt/jira/atlassian-jira-6.3.4a-standalone")
        );
    }

    #[test]
    fn rejects_unparsable_versions() {
        for bad in ["", "latest", "7..1", ".7", "7.", "v7.0.4", "7.0.4-beta", " 7.0"] {
            assert!(
                matches!(ReleaseVersion::parse(bad), Err(AppError::InvalidVersion(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn single_segment_is_accepted() {
        assert_eq!(ReleaseVersion::parse("8").unwrap().major(), 8);
    }

    proptest! {
        #[test]
        fn tier_follows_major(
            major in 0u32..40,
            minor in 0u32..20,
            patch in 0u32..20,
            suffix in "[a-z]?",
        ) {
            let raw = format!("{major}.{minor}.{patch}{suffix}");
            let layout = InstallLayout::resolve(&raw).unwrap();

            prop_assert_eq!(layout.uses_modern_listeners(), major >= 7);
            let expected_suffix = format!("-{raw}-standalone");
            prop_assert!(layout.dir_name.ends_with(&expected_suffix));
            prop_assert_eq!(layout.dir_name.starts_with("atlassian-jira-software-"), major >= 7);
        }
    }
}
