//! Application configuration loaded from environment variables.

use std::str::FromStr;

use common::{ServiceHealth, ServiceName};
use tracing_subscriber::EnvFilter;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `USER_SERVICE_HEALTH`, `PRODUCT_SERVICE_HEALTH`, `ORDER_SERVICE_HEALTH`:
///   initial health of each service (default: `"serving"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub user_health: ServiceHealth,
    pub product_health: ServiceHealth,
    pub order_health: ServiceHealth,
    /// Variables that were set but could not be parsed, so their default
    /// was used instead.
    pub ignored: Vec<&'static str>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    ///
    /// Unparseable values are replaced by their default and their variable
    /// is recorded in [`Config::ignored`] for the caller to report.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut ignored = Vec::new();

        let port = parse_var(&lookup, &mut ignored, "PORT", defaults.port);
        let user_health =
            parse_var(&lookup, &mut ignored, "USER_SERVICE_HEALTH", defaults.user_health);
        let product_health = parse_var(
            &lookup,
            &mut ignored,
            "PRODUCT_SERVICE_HEALTH",
            defaults.product_health,
        );
        let order_health =
            parse_var(&lookup, &mut ignored, "ORDER_SERVICE_HEALTH", defaults.order_health);

        let log_level = match lookup("RUST_LOG") {
            Some(directive) if EnvFilter::try_new(&directive).is_ok() => directive,
            Some(_) => {
                ignored.push("RUST_LOG");
                defaults.log_level
            }
            None => defaults.log_level,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_level,
            user_health,
            product_health,
            order_health,
            ignored,
        }
    }

    /// Builds the tracing filter for the configured log level.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured initial health of `service`.
    pub fn initial_health(&self, service: ServiceName) -> ServiceHealth {
        match service {
            ServiceName::Users => self.user_health,
            ServiceName::Products => self.product_health,
            ServiceName::Orders => self.order_health,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            user_health: ServiceHealth::Serving,
            product_health: ServiceHealth::Serving,
            order_health: ServiceHealth::Serving,
            ignored: Vec::new(),
        }
    }
}

/// Parses `key` if set, recording it in `ignored` when the value is invalid.
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    ignored: &mut Vec<&'static str>,
    key: &'static str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            ignored.push(key);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        for service in ServiceName::ALL {
            assert_eq!(config.initial_health(service), ServiceHealth::Serving);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.order_health, ServiceHealth::Serving);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RUST_LOG", "debug"),
            ("USER_SERVICE_HEALTH", "unavailable"),
            ("PRODUCT_SERVICE_HEALTH", "draining"),
            ("ORDER_SERVICE_HEALTH", "serving"),
        ]));

        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.user_health, ServiceHealth::Unavailable);
        assert_eq!(config.product_health, ServiceHealth::Draining);
        assert_eq!(config.order_health, ServiceHealth::Serving);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("ORDER_SERVICE_HEALTH", "maintenance"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.order_health, ServiceHealth::Serving);
        assert_eq!(config.ignored, vec!["PORT", "ORDER_SERVICE_HEALTH"]);
    }

    #[test]
    fn test_log_filter_follows_log_level() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "api=debug")]));

        assert!(config.ignored.is_empty());
        assert_eq!(config.log_filter().to_string(), "api=debug");
        assert_eq!(Config::default().log_filter().to_string(), "info");
    }

    #[test]
    fn test_invalid_log_level_falls_back() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "api=[")]));

        assert_eq!(config.log_level, "info");
        assert_eq!(config.ignored, vec!["RUST_LOG"]);
        assert_eq!(config.log_filter().to_string(), "info");
    }
}
