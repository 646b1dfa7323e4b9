pub mod artifacts;
pub mod config;
pub mod database;
pub mod error;
pub mod params;
pub mod resolver;
pub mod version;

pub use artifacts::{Artifact, ArtifactKind, ArtifactSet, render_all, render_artifact};
pub use config::{
    AjpConnector, ClusterSettings, JvmSettings, NativeSsl, ProxySettings, ResolvedConfig,
    TomcatConnector,
};
pub use database::{DatabaseKind, DatabaseSettings, DatabaseUrl};
pub use error::AppError;
pub use params::{RawParams, Scalar};
pub use resolver::resolve;
pub use version::{InstallLayout, ListenerSet, ReleaseVersion};
