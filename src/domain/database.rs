//! Database kinds and the per-kind connection conventions.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// Database backends Jira can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// Bundled H2 database stored below the Jira home directory.
    Embedded,
    Postgresql,
    Mysql,
    Sqlserver,
    Oracle,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 5] = [
        DatabaseKind::Embedded,
        DatabaseKind::Postgresql,
        DatabaseKind::Mysql,
        DatabaseKind::Sqlserver,
        DatabaseKind::Oracle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Embedded => "embedded",
            DatabaseKind::Postgresql => "postgresql",
            DatabaseKind::Mysql => "mysql",
            DatabaseKind::Sqlserver => "sqlserver",
            DatabaseKind::Oracle => "oracle",
        }
    }

    /// Port used when `dbport` is not supplied. The embedded database has none.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            DatabaseKind::Embedded => None,
            DatabaseKind::Postgresql => Some(5432),
            DatabaseKind::Mysql => Some(3306),
            DatabaseKind::Sqlserver => Some(1433),
            DatabaseKind::Oracle => Some(1521),
        }
    }

    /// Schema used when `dbschema` is not supplied.
    pub fn default_schema(&self) -> &'static str {
        match self {
            DatabaseKind::Postgresql => "public",
            _ => "",
        }
    }

    /// Value of `<database-type>` in `dbconfig.xml`.
    pub fn database_type(&self) -> &'static str {
        match self {
            DatabaseKind::Embedded => "h2",
            DatabaseKind::Postgresql => "postgres72",
            DatabaseKind::Mysql => "mysql",
            DatabaseKind::Sqlserver => "mssql",
            DatabaseKind::Oracle => "oracle10g",
        }
    }

    pub fn driver_class(&self) -> &'static str {
        match self {
            DatabaseKind::Embedded => "org.h2.Driver",
            DatabaseKind::Postgresql => "org.postgresql.Driver",
            DatabaseKind::Mysql => "com.mysql.jdbc.Driver",
            DatabaseKind::Sqlserver => "net.sourceforge.jtds.jdbc.Driver",
            DatabaseKind::Oracle => "oracle.jdbc.OracleDriver",
        }
    }

    pub fn validation_query(&self) -> Option<&'static str> {
        match self {
            DatabaseKind::Embedded => None,
            DatabaseKind::Postgresql => Some("select version();"),
            DatabaseKind::Mysql | DatabaseKind::Sqlserver => Some("select 1"),
            DatabaseKind::Oracle => Some("select 1 from dual"),
        }
    }

    /// JDBC URL built from the kind's template.
    ///
    /// The MySQL query string is stored pre-escaped (`&amp;`) because the URL
    /// is written verbatim into an XML element.
    pub fn jdbc_url(&self, host: &str, port: Option<u16>, name: &str, home_dir: &Path) -> String {
        let port = port.map(|p| p.to_string()).unwrap_or_default();
        match self {
            DatabaseKind::Embedded => {
                format!("jdbc:h2:file:{}/database/{}", home_dir.display(), name)
            }
            DatabaseKind::Postgresql => format!("jdbc:postgresql://{host}:{port}/{name}"),
            DatabaseKind::Mysql => format!(
                "jdbc:mysql://{host}:{port}/{name}?useUnicode=true&amp;characterEncoding=UTF8&amp;sessionVariables=storage_engine=InnoDB"
            ),
            DatabaseKind::Sqlserver => format!("jdbc:jtds:sqlserver://{host}:{port}/{name}"),
            DatabaseKind::Oracle => format!("jdbc:oracle:thin:@{host}:{port}:{name}"),
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embedded" | "h2" => Ok(DatabaseKind::Embedded),
            "postgresql" => Ok(DatabaseKind::Postgresql),
            "mysql" => Ok(DatabaseKind::Mysql),
            "sqlserver" => Ok(DatabaseKind::Sqlserver),
            "oracle" => Ok(DatabaseKind::Oracle),
            _ => Err(AppError::UnsupportedDatabase(s.to_string())),
        }
    }
}

/// Resolved database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSettings {
    pub kind: DatabaseKind,
    pub host: String,
    pub port: Option<u16>,
    pub name: String,
    pub schema: String,
    pub user: String,
    pub password: String,
    pub pool_size: u32,
    pub url: DatabaseUrl,
}

/// Where the JDBC URL came from. Exactly one source is ever used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum DatabaseUrl {
    /// Supplied verbatim through `dburl`.
    Explicit(String),
    /// Built from the kind's template.
    Derived(String),
}

impl DatabaseUrl {
    pub fn as_str(&self) -> &str {
        match self {
            DatabaseUrl::Explicit(url) | DatabaseUrl::Derived(url) => url,
        }
    }
}
