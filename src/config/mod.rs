mod database;
mod env_provider;
mod logging;
mod settings;

pub use database::{init_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use logging::init_logging;
pub use settings::{AppSettings, SettingsError};
