//! Server configuration, read from the environment with dev defaults.

use std::net::SocketAddr;

use thiserror::Error;

use menagerie_auth::Credentials;

pub const BIND_ADDR_VAR: &str = "MENAGERIE_BIND_ADDR";
pub const ADMIN_USER_VAR: &str = "MENAGERIE_ADMIN_USER";
pub const ADMIN_PASSWORD_VAR: &str = "MENAGERIE_ADMIN_PASSWORD";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ADMIN_USER: &str = "alfa1";
const DEFAULT_ADMIN_PASSWORD: &str = "password";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub admin: Credentials,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let username = lookup(ADMIN_USER_VAR).unwrap_or_else(|| DEFAULT_ADMIN_USER.to_string());
        let password = lookup(ADMIN_PASSWORD_VAR).unwrap_or_else(|| {
            tracing::warn!("{ADMIN_PASSWORD_VAR} not set; using insecure dev default");
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        Ok(Self {
            bind_addr,
            admin: Credentials::new(username, password),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            admin: Credentials::new(DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD),
        }
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
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert!(config.admin.matches("alfa1", "password"));
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn overrides_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (ADMIN_USER_VAR, "root"),
            (ADMIN_PASSWORD_VAR, "s3cret"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert!(config.admin.matches("root", "s3cret"));
        assert!(!config.admin.matches("alfa1", "password"));
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: "not-an-addr".to_string(),
            }
        );
    }
}
