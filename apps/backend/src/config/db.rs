use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// Which database backend to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL server, configured through `DB_*` variables
    Postgres,
    /// SQLite database file at `SQLITE_PATH`
    SqliteFile,
    /// Private in-memory SQLite database (tests)
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unknown DB_KIND '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

impl DbKind {
    /// Read `DB_KIND`, defaulting to Postgres when unset.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Ok(v) => v.parse(),
            Err(_) => Ok(DbKind::Postgres),
        }
    }
}

/// Builds a database URL from environment variables for the given backend
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = var_or("DB_HOST", "localhost");
            let port = var_or("DB_PORT", "5432");
            let name = must_var("DB_NAME")?;
            let user = must_var("DB_USER")?;
            let password = must_var("DB_PASSWORD")?;
            let sslmode = var_or("DB_SSLMODE", "disable");
            Ok(format!(
                "postgres://{user}:{password}@{host}:{port}/{name}?sslmode={sslmode}"
            ))
        }
        DbKind::SqliteFile => {
            let path = var_or("SQLITE_PATH", "futstats.sqlite");
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Connection pool sizing and timeouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    /// `None` keeps connections for the life of the pool.
    pub max_lifetime: Option<Duration>,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 100,
            min_connections: 10,
            max_lifetime: Some(Duration::from_secs(3600)),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolSettings {
    /// Read pool settings. Unparseable values fall back to the default.
    pub fn from_env(kind: DbKind) -> Self {
        let defaults = Self::default();
        let mut settings = Self {
            max_connections: parsed_or("DB_MAX_OPEN_CONNS", defaults.max_connections),
            min_connections: parsed_or("DB_MAX_IDLE_CONNS", defaults.min_connections),
            max_lifetime: Some(Duration::from_secs(parsed_or(
                "DB_CONN_MAX_LIFETIME_SECS",
                defaults.max_lifetime.map_or(3600, |d| d.as_secs()),
            ))),
            acquire_timeout: Duration::from_secs(parsed_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )),
        };

        // Each pooled connection to `sqlite::memory:` would see its own empty
        // database, and recycling the one connection would drop the data.
        if kind == DbKind::SqliteMemory {
            settings.max_connections = 1;
            settings.min_connections = 1;
            settings.max_lifetime = None;
        }
        settings.min_connections = settings.min_connections.min(settings.max_connections);
        settings
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
