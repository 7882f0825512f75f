pub mod models;
pub mod test_utils;


use common::config;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use tokio::sync::OnceCell;

static CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

/// Establishes a fresh database connection from the configured path.
///
/// A bare file path is turned into a `sqlite://` URL (creating parent
/// directories first, SQLite won't create intermediate dirs); anything that
/// already looks like a DSN is used as-is.
pub async fn connect() -> DatabaseConnection {
    if std::env::var("DATABASE_PATH").is_err() {
        tracing::warn!(
            fallback = config::DEFAULT_DATABASE_PATH,
            "DATABASE_PATH not set; falling back to local SQLite file"
        );
    }

    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}

/// Returns the memoized process-wide connection handle.
///
/// The first caller triggers `connect()`; concurrent callers during
/// establishment await the same in-flight future, so only one connection is
/// ever created. There is no reconnection logic.
pub async fn get_connection() -> &'static DatabaseConnection {
    CONNECTION.get_or_init(connect).await
}
