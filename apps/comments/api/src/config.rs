use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Deadline for each comment request's storage work
    pub request_timeout: Duration,
    /// Comma-separated origins; CORS stays off when unset
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let request_timeout = Duration::from_secs(env_parse("REQUEST_TIMEOUT_SECS", 30u64)?);
        let cors_allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origins| !origins.trim().is_empty());

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            request_timeout,
            cors_allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/comments")),
                ("APP_ENV", None),
                ("HOST", None),
                ("PORT", None),
                ("REQUEST_TIMEOUT_SECS", None),
                ("CORS_ALLOWED_ORIGIN", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "comments_api");
                assert_eq!(config.database.url, "postgresql://localhost/comments");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.request_timeout, Duration::from_secs(30));
                assert!(config.cors_allowed_origin.is_none());
            },
        );
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://db/comments")),
                ("APP_ENV", Some("production")),
                ("PORT", Some("9000")),
                ("REQUEST_TIMEOUT_SECS", Some("5")),
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 9000);
                assert!(config.environment.is_production());
                assert_eq!(config.request_timeout, Duration::from_secs(5));
                assert_eq!(
                    config.cors_allowed_origin.as_deref(),
                    Some("http://localhost:3000")
                );
            },
        );
    }

    #[test]
    fn test_blank_cors_origin_is_ignored() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://db/comments")),
                ("CORS_ALLOWED_ORIGIN", Some("  ")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.cors_allowed_origin.is_none());
            },
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_invalid_request_timeout_fails() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://db/comments")),
                ("REQUEST_TIMEOUT_SECS", Some("soon")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
            },
        );
    }
}
