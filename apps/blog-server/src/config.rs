//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::{DatabaseConfig, SessionConfig};

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub production: bool,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub telemetry: TelemetryConfig,
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset or unparsable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_defaults = DatabaseConfig::default();
        let session_defaults = SessionConfig::default();

        let database = DatabaseConfig {
            url: lookup("DB_URI")
                .or_else(|| lookup("DATABASE_URL"))
                .unwrap_or(db_defaults.url),
            max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS")
                .unwrap_or(db_defaults.max_connections),
            min_connections: parsed(&lookup, "DB_MIN_CONNECTIONS")
                .unwrap_or(db_defaults.min_connections),
            log_queries: lookup("DB_LOG_QUERIES")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(db_defaults.log_queries),
        };

        let session = SessionConfig {
            secret: lookup("SECRET_KEY").unwrap_or(session_defaults.secret),
            expiration_hours: parsed(&lookup, "SESSION_EXPIRATION_HOURS")
                .unwrap_or(session_defaults.expiration_hours),
            issuer: session_defaults.issuer,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(&lookup, "PORT").unwrap_or(5000),
            production: lookup("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false),
            database,
            session,
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.session.secret == SessionConfig::DEFAULT_SECRET
    }

    /// Log loudly when sessions are signed with the built-in secret.
    pub fn check_secret(&self) {
        if !self.uses_default_secret() {
            return;
        }
        if self.production {
            tracing::error!(
                "SECURITY: Using default session secret in production! Set SECRET_KEY environment variable."
            );
        } else {
            tracing::warn!("Using default session secret. Set SECRET_KEY for production use.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_use_local_sqlite_file() {
        let config = config_from(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database.url, "sqlite://posts.db?mode=rwc");
        assert!(config.uses_default_secret());
        assert!(!config.production);
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = config_from(&[
            ("DB_URI", "postgres://blog@localhost/blog"),
            ("SECRET_KEY", "s3cret"),
            ("PORT", "8080"),
            ("SESSION_EXPIRATION_HOURS", "2"),
            ("RUST_ENV", "production"),
            ("LOG_FORMAT", "JSON"),
        ]);

        assert_eq!(config.database.url, "postgres://blog@localhost/blog");
        assert_eq!(config.session.secret, "s3cret");
        assert_eq!(config.session.expiration_hours, 2);
        assert_eq!(config.port, 8080);
        assert!(config.production);
        assert!(!config.uses_default_secret());
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn database_url_is_accepted_as_fallback_name() {
        let config = config_from(&[("DATABASE_URL", "sqlite::memory:")]);
        assert_eq!(config.database.url, "sqlite::memory:");

        let both = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_URI", "sqlite://a.db"),
        ]);
        assert_eq!(both.database.url, "sqlite://a.db");
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("DB_MAX_CONNECTIONS", "-3")]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.database.max_connections, 10);
    }
}
