//! `bin/setenv.sh` and `bin/user.sh`.

use serde::Serialize;

use super::{Artifact, ArtifactKind, render_template};
use crate::domain::AppError;
use crate::domain::config::{JvmSettings, ResolvedConfig};
use crate::ports::TemplateEngine;

#[derive(Serialize)]
struct SetenvContext<'a> {
    java_home: String,
    home_dir: String,
    jvm: &'a JvmSettings,
    disable_notifications: bool,
}

#[derive(Serialize)]
struct UserContext<'a> {
    user: &'a str,
}

pub fn render_setenv<E: TemplateEngine + ?Sized>(
    cfg: &ResolvedConfig,
    engine: &E,
) -> Result<Artifact, AppError> {
    let context = SetenvContext {
        java_home: cfg.java_home.display().to_string(),
        home_dir: cfg.home_dir.display().to_string(),
        jvm: &cfg.jvm,
        disable_notifications: cfg.disable_notifications,
    };
    render_template(ArtifactKind::EnvScript, cfg, engine, &context)
}

pub fn render_user<E: TemplateEngine + ?Sized>(
    cfg: &ResolvedConfig,
    engine: &E,
) -> Result<Artifact, AppError> {
    render_template(ArtifactKind::UserScript, cfg, engine, &UserContext { user: &cfg.user })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{engine, resolved};

    #[test]
    fn notifications_line_is_commented_by_default() {
        let cfg = resolved("version: '6.3.4a'\njavahome: /opt/java\n");
        let content = render_setenv(&cfg, &engine()).unwrap().content;
        assert!(content.lines().any(|l| l.starts_with("#DISABLE_NOTIFICATIONS=")));
        assert!(!content.lines().any(|l| l.starts_with("DISABLE_NOTIFICATIONS=")));
        assert!(content.contains("JAVA_HOME=\"/opt/java\""));
        assert!(content.contains("JVM_MAXIMUM_MEMORY=\"1024m\""));
    }

    #[test]
    fn notifications_line_is_active_when_disabled() {
        let cfg = resolved("version: '6.3.4a'\njavahome: /opt/java\ndisable_notifications: true\n");
        let content = render_setenv(&cfg, &engine()).unwrap().content;
        assert!(content.lines().any(|l| l.starts_with("DISABLE_NOTIFICATIONS=")));
        assert!(!content.contains("#DISABLE_NOTIFICATIONS="));
    }

    #[test]
    fn both_notification_forms_share_the_value() {
        let off = resolved("version: '6.3.4a'\njavahome: /opt/java\n");
        let on = resolved("version: '6.3.4a'\njavahome: /opt/java\ndisable_notifications: true\n");
        let value = |content: &str| {
            content
                .lines()
                .find_map(|l| l.trim_start_matches('#').strip_prefix("DISABLE_NOTIFICATIONS="))
                .map(str::to_string)
        };
        let off = render_setenv(&off, &engine()).unwrap().content;
        let on = render_setenv(&on, &engine()).unwrap().content;
        assert!(value(&off).is_some());
        assert_eq!(value(&off), value(&on));
    }

    #[test]
    fn jvm_overrides_are_rendered() {
        let cfg = resolved(
            "version: '7.0.4'\njavahome: /usr/lib/jvm/java-8\njvm_xms: 1g\njvm_xmx: 4g\njava_opts: -Dfoo=bar\n",
        );
        let content = render_setenv(&cfg, &engine()).unwrap().content;
        assert!(content.contains("JVM_MINIMUM_MEMORY=\"1g\""));
        assert!(content.contains("JVM_MAXIMUM_MEMORY=\"4g\""));
        assert!(content.contains("JVM_SUPPORT_RECOMMENDED_ARGS=\"-Dfoo=bar\""));
    }

    #[test]
    fn permgen_size_reaches_java_opts() {
        let cfg = resolved("version: '6.3.4a'\njavahome: /opt/java\njvm_permgen: 384m\n");
        let content = render_setenv(&cfg, &engine()).unwrap().content;
        assert!(content.contains("JIRA_MAX_PERM_SIZE=\"384m\""));
        let opts = content.lines().find(|l| l.starts_with("JAVA_OPTS=")).unwrap();
        assert!(opts.contains("-XX:MaxPermSize=${JIRA_MAX_PERM_SIZE}"));
    }

    #[test]
    fn user_script_names_the_service_user() {
        let cfg = resolved("version: '6.3.4a'\njavahome: /opt/java\nuser: atlassian\n");
        let artifact = render_user(&cfg, &engine()).unwrap();
        assert!(artifact.content.contains("JIRA_USER=\"atlassian\""));
        assert!(artifact.path.ends_with("bin/user.sh"));
    }
}
