// Common test utilities for integration tests

use item_service::config::AppSettings;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Settings for exercising the app in tests
#[allow(dead_code)]
pub fn test_settings() -> AppSettings {
    AppSettings {
        app_name: "Item Service Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 3001,
        log_level: "info".to_string(),
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        db_idle_timeout_secs: 10,
        db_connect_timeout_secs: 30,
    }
}
