//! Runtime settings read from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/trivia";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Max request body in bytes.
    pub body_limit: usize,
    /// Seed the standard categories into an empty table at startup.
    pub seed_categories: bool,
}

impl Settings {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or(&lookup, "TRIVIA_BIND_ADDR", || {
            DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::Invalid {
                key: "TRIVIA_BIND_ADDR",
                value: DEFAULT_BIND_ADDR.into(),
            })
        })?;
        let max_connections = parse_or(&lookup, "TRIVIA_DB_MAX_CONNECTIONS", || Ok(DEFAULT_MAX_CONNECTIONS))?;
        let body_limit = parse_or(&lookup, "TRIVIA_BODY_LIMIT", || Ok(DEFAULT_BODY_LIMIT))?;
        let seed_categories = match lookup("TRIVIA_SEED_CATEGORIES") {
            None => false,
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                key: "TRIVIA_SEED_CATEGORIES",
                value: v,
            })?,
        };
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            body_limit,
            seed_categories,
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => default(),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr.port(), 5000);
        assert_eq!(s.max_connections, 5);
        assert_eq!(s.body_limit, 65536);
        assert!(!s.seed_categories);
    }

    #[test]
    fn overrides_are_parsed() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://db/trivia_test"),
            ("TRIVIA_BIND_ADDR", "127.0.0.1:8080"),
            ("TRIVIA_DB_MAX_CONNECTIONS", "12"),
            ("TRIVIA_SEED_CATEGORIES", "TRUE"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "postgres://db/trivia_test");
        assert_eq!(s.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(s.max_connections, 12);
        assert!(s.seed_categories);
    }

    #[test]
    fn bad_values_name_the_key() {
        match settings(&[("TRIVIA_DB_MAX_CONNECTIONS", "many")]) {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "TRIVIA_DB_MAX_CONNECTIONS");
                assert_eq!(value, "many");
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
        assert!(settings(&[("TRIVIA_SEED_CATEGORIES", "maybe")]).is_err());
        assert!(settings(&[("TRIVIA_BIND_ADDR", "nowhere")]).is_err());
    }
}
