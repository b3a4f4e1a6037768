use thiserror::Error;

use crate::config::env_provider::EnvironmentProvider;

const DEFAULT_APP_NAME: &str = "Item Service";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_IDLE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} is invalid: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Application settings, loaded once at startup and passed by reference
///
/// Nothing else in the codebase reads the environment directly.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_idle_timeout_secs: u64,
    pub db_connect_timeout_secs: u64,
}

impl AppSettings {
    /// Load settings from the given environment provider
    pub fn load(env: &dyn EnvironmentProvider) -> Result<Self, SettingsError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(SettingsError::Missing("DATABASE_URL"))?;

        let app_name = env
            .get_var("APP_NAME")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let host = env
            .get_var("HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env.get_var("PORT") {
            Some(value) => parse_number("PORT", &value)?,
            None => DEFAULT_PORT,
        };
        if port == 0 {
            return Err(SettingsError::Invalid {
                var: "PORT",
                message: "port must be between 1 and 65535".to_string(),
            });
        }

        let log_level = env
            .get_var("LOG_LEVEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let db_max_connections = match env.get_var("DB_MAX_CONNECTIONS") {
            Some(value) => parse_number("DB_MAX_CONNECTIONS", &value)?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let db_idle_timeout_secs = match env.get_var("DB_IDLE_TIMEOUT_SECS") {
            Some(value) => parse_number("DB_IDLE_TIMEOUT_SECS", &value)?,
            None => DEFAULT_DB_IDLE_TIMEOUT_SECS,
        };

        let db_connect_timeout_secs = match env.get_var("DB_CONNECT_TIMEOUT_SECS") {
            Some(value) => parse_number("DB_CONNECT_TIMEOUT_SECS", &value)?,
            None => DEFAULT_DB_CONNECT_TIMEOUT_SECS,
        };

        Ok(Self {
            app_name,
            host,
            port,
            log_level,
            database_url,
            db_max_connections,
            db_idle_timeout_secs,
            db_connect_timeout_secs,
        })
    }

    /// Convenience method that reads from the system environment
    pub fn from_env() -> Result<Self, SettingsError> {
        use crate::config::env_provider::SystemEnvironment;
        Self::load(&SystemEnvironment)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, SettingsError> {
    value.parse().map_err(|_| SettingsError::Invalid {
        var,
        message: format!("'{value}' is not a valid number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    #[test]
    fn missing_database_url_fails() {
        let env = MockEnvironment::empty();

        let result = AppSettings::load(&env);

        assert!(matches!(result, Err(SettingsError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "sqlite::memory:");

        let settings = AppSettings::load(&env).unwrap();

        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.app_name, "Item Service");
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 3001);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.db_max_connections, 10);
        assert_eq!(settings.db_idle_timeout_secs, 10);
        assert_eq!(settings.db_connect_timeout_secs, 30);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "postgres://localhost/items")
            .with_var("APP_NAME", "Inventory")
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8080")
            .with_var("LOG_LEVEL", "debug")
            .with_var("DB_MAX_CONNECTIONS", "5");

        let settings = AppSettings::load(&env).unwrap();

        assert_eq!(settings.app_name, "Inventory");
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.db_max_connections, 5);
    }

    #[test]
    fn non_numeric_port_fails() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite::memory:")
            .with_var("PORT", "not-a-port");

        let result = AppSettings::load(&env);

        assert!(matches!(
            result,
            Err(SettingsError::Invalid { var: "PORT", .. })
        ));
    }

    #[test]
    fn zero_port_fails() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite::memory:")
            .with_var("PORT", "0");

        let result = AppSettings::load(&env);

        assert!(matches!(
            result,
            Err(SettingsError::Invalid { var: "PORT", .. })
        ));
    }

    #[test]
    fn empty_database_url_fails() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "");

        let result = AppSettings::load(&env);

        assert!(matches!(result, Err(SettingsError::Missing("DATABASE_URL"))));
    }
}
