use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::AppSettings;
use crate::errors::InternalError;

/// Initialize the database connection pool
///
/// Pool limits and timeouts come from settings. Does NOT run migrations -
/// call `migrate_database()` separately.
pub async fn init_database(settings: &AppSettings) -> Result<DatabaseConnection, InternalError> {
    let mut options = ConnectOptions::new(settings.database_url.clone());
    options
        .max_connections(settings.db_max_connections)
        .idle_timeout(Duration::from_secs(settings.db_idle_timeout_secs))
        .connect_timeout(Duration::from_secs(settings.db_connect_timeout_secs));

    let db = Database::connect(options)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("connected to database: {}", settings.database_url);

    Ok(db)
}

/// Run all pending migrations on the provided connection
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("database migrations completed");

    Ok(())
}
