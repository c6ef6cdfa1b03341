//! Configuration types.

use std::net::IpAddr;
use std::time::Duration;

use crate::error::ConfigError;

/// Upper bound for the idle timeout (one year).
const MAX_SESSION_IDLE_SECS: u64 = 365 * 24 * 60 * 60;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind: IpAddr,
    /// Port for the HTTP listener.
    pub port: u16,
    /// Sessions untouched for this long are pruned (the tab is considered closed).
    pub session_idle_timeout: Duration,
    /// How often the idle-session sweep runs.
    pub prune_interval: Duration,
    /// Allow any origin via CORS (for a browser front-end on another port).
    pub cors_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            session_idle_timeout: Duration::from_secs(3600), // 1 hour
            prune_interval: Duration::from_secs(60),
            cors_any: true,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from `MARKETPLACE_*` environment variables,
    /// falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind = match lookup("MARKETPLACE_BIND") {
            Some(v) => v.parse().map_err(|_| invalid("MARKETPLACE_BIND", &v))?,
            None => defaults.bind,
        };
        let port = match lookup("MARKETPLACE_PORT") {
            Some(v) => v.parse().map_err(|_| invalid("MARKETPLACE_PORT", &v))?,
            None => defaults.port,
        };
        let session_idle_timeout = match lookup("MARKETPLACE_SESSION_IDLE_SECS") {
            Some(v) => {
                let secs: u64 = v
                    .parse()
                    .map_err(|_| invalid("MARKETPLACE_SESSION_IDLE_SECS", &v))?;
                if secs == 0 || secs > MAX_SESSION_IDLE_SECS {
                    return Err(ConfigError::InvalidValue {
                        key: "MARKETPLACE_SESSION_IDLE_SECS".to_string(),
                        message: format!("must be between 1 and {MAX_SESSION_IDLE_SECS}"),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.session_idle_timeout,
        };
        let prune_interval = match lookup("MARKETPLACE_PRUNE_INTERVAL_SECS") {
            Some(v) => {
                let secs: u64 = v
                    .parse()
                    .map_err(|_| invalid("MARKETPLACE_PRUNE_INTERVAL_SECS", &v))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "MARKETPLACE_PRUNE_INTERVAL_SECS".to_string(),
                        message: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.prune_interval,
        };
        let cors_any = match lookup("MARKETPLACE_CORS_ANY") {
            Some(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
            None => defaults.cors_any,
        };

        Ok(Self {
            bind,
            port,
            session_idle_timeout,
            prune_interval,
            cors_any,
        })
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("could not parse {value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_env_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(3600));
        assert!(config.cors_any);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("MARKETPLACE_BIND", "127.0.0.1"),
            ("MARKETPLACE_PORT", "9000"),
            ("MARKETPLACE_SESSION_IDLE_SECS", "30"),
            ("MARKETPLACE_CORS_ANY", "false"),
        ]))
        .unwrap();
        assert_eq!(config.bind, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(30));
        assert!(!config.cors_any);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("MARKETPLACE_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("MARKETPLACE_PORT"));
    }

    #[test]
    fn zero_prune_interval_is_rejected() {
        let result =
            ServerConfig::from_lookup(lookup_from(&[("MARKETPLACE_PRUNE_INTERVAL_SECS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_idle_timeout_is_rejected() {
        for value in ["0", "9000000000000"] {
            let err = ServerConfig::from_lookup(lookup_from(&[(
                "MARKETPLACE_SESSION_IDLE_SECS",
                value,
            )]))
            .unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidValue { key, .. } if key == "MARKETPLACE_SESSION_IDLE_SECS"),
                "{value}: {err}"
            );
        }

        let config = ServerConfig::from_lookup(lookup_from(&[(
            "MARKETPLACE_SESSION_IDLE_SECS",
            "31536000",
        )]))
        .unwrap();
        assert_eq!(config.session_idle_timeout, Duration::from_secs(31_536_000));
    }
}
