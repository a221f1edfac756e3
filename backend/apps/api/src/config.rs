//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` has
//! been loaded).

use std::net::SocketAddr;

use anyhow::{Context, bail};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
pub const DEFAULT_REALM: &str = "account";

/// Where user records are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local; everything is lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub storage: StorageBackend,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub realm: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = match lookup("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => {
                let database_url = lookup("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .context("DATABASE_URL must be set when STORAGE_BACKEND is postgres")?;

                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u32>()
                        .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                if max_connections == 0 {
                    bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
                }

                StorageBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("Unknown STORAGE_BACKEND: {other} (expected postgres or memory)"),
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR: {bind_addr}"))?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let realm = lookup("AUTH_REALM")
            .filter(|realm| !realm.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REALM.to_string());

        Ok(Self {
            storage,
            bind_addr,
            frontend_origins,
            realm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_postgres_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/db")]))
                .unwrap();

        assert_eq!(
            config.storage,
            StorageBackend::Postgres {
                database_url: "postgres://localhost/db".into(),
                max_connections: DEFAULT_MAX_CONNECTIONS,
            }
        );
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:40922", "http://127.0.0.1:40922"]
        );
        assert_eq!(config.realm, "account");
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert!(ServerConfig::from_lookup(lookup(&[])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "postgres")])).is_err());
    }

    #[test]
    fn test_memory_backend_needs_no_database() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("STORAGE_BACKEND", "memory"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("FRONTEND_ORIGINS", " https://a.example , ,https://b.example"),
            ("AUTH_REALM", "users"),
        ]))
        .unwrap();

        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.realm, "users");
    }

    #[test]
    fn test_invalid_values() {
        let cases: [&[(&str, &str)]; 4] = [
            &[("STORAGE_BACKEND", "redis")],
            &[("STORAGE_BACKEND", "memory"), ("BIND_ADDR", "nowhere")],
            &[("DATABASE_URL", "postgres://x"), ("DATABASE_MAX_CONNECTIONS", "many")],
            &[("DATABASE_URL", "postgres://x"), ("DATABASE_MAX_CONNECTIONS", "0")],
        ];

        for vars in cases {
            assert!(ServerConfig::from_lookup(lookup(vars)).is_err(), "{vars:?}");
        }
    }
}
