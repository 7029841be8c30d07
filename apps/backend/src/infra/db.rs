use std::str::FromStr;

use migration::{migrate, MigrationCommand};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, RuntimeErr,
    SqlxSqliteConnector,
};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, PoolSettings};
use crate::error::AppError;
use crate::infra::retry::{retry_with_backoff, RetryPolicy};

fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

fn is_transient(e: &DbErr) -> bool {
    matches!(e, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

/// Open a pooled connection for `kind`, retrying transient connect failures.
/// This function does NOT run any migrations.
pub async fn open_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    let pool = PoolSettings::from_env(kind);

    let conn = retry_with_backoff(
        RetryPolicy::default(),
        || connect(kind, &url, &pool),
        is_transient,
    )
    .await
    .map_err(|e| {
        warn!(engine = engine(kind), error = %e, "database connection failed");
        AppError::db_unavailable()
    })?;

    if conn.get_database_backend() == DbBackend::Sqlite {
        conn.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }

    info!(
        engine = engine(kind),
        max_connections = pool.max_connections,
        "database connected"
    );
    Ok(conn)
}

fn conn_err(e: sea_orm::sqlx::Error) -> DbErr {
    DbErr::Conn(RuntimeErr::SqlxError(e))
}

async fn connect(
    kind: DbKind,
    url: &str,
    pool: &PoolSettings,
) -> Result<DatabaseConnection, DbErr> {
    if kind == DbKind::SqliteMemory {
        return connect_memory(url, pool).await;
    }

    let mut opts = ConnectOptions::new(url);
    opts.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .acquire_timeout(pool.acquire_timeout)
        .sqlx_logging(false);
    if let Some(lifetime) = pool.max_lifetime {
        opts.max_lifetime(lifetime);
    }

    Database::connect(opts).await
}

/// Build the SQLx pool directly: `ConnectOptions` cannot turn off the pool's
/// default lifetime and idle reaping, and the in-memory database lives only
/// as long as its single connection.
async fn connect_memory(url: &str, pool: &PoolSettings) -> Result<DatabaseConnection, DbErr> {
    let connect_opts = SqliteConnectOptions::from_str(url)
        .map_err(conn_err)?
        .foreign_keys(true)
        .disable_statement_logging();

    let sqlite_pool: SqlitePool = SqlitePoolOptions::new()
        .min_connections(pool.min_connections)
        .max_connections(pool.max_connections)
        .acquire_timeout(pool.acquire_timeout)
        .max_lifetime(None)
        .idle_timeout(None)
        .connect_with(connect_opts)
        .await
        .map_err(conn_err)?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(sqlite_pool))
}

/// Connect and apply pending migrations. Single entrypoint for the server and tests.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = open_db(kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
