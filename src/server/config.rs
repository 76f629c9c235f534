//! Environment-based application configuration.
//!
//! Everything the server needs from the outside world is read once at startup into
//! a `Config`, which is then handed to `startup` and `AppState`. A missing or
//! malformed variable aborts startup.

use crate::server::error::{config::ConfigError, AppError};

/// Where volantes and configuration rows are persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    /// Relational database reached through SeaORM (SQLite or Postgres URL).
    Database { url: String },
    /// Hosted Supabase project reached through its PostgREST API.
    Supabase { url: String, anon_key: String },
}

pub struct Config {
    pub store: StoreConfig,

    /// Lowercase hex SHA-256 of the admin password.
    pub admin_password_hash: String,
    /// HMAC key used to sign admin tokens.
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `SUPABASE_URL` selects the hosted datastore (and then requires
    /// `SUPABASE_ANON_KEY`); otherwise `DATABASE_URL` is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let require = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let store = match lookup("SUPABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => {
                if !url.starts_with("http") {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "SUPABASE_URL".to_string(),
                        reason: "must be an HTTP/HTTPS URL".to_string(),
                    }
                    .into());
                }
                StoreConfig::Supabase {
                    url: url.trim_end_matches('/').to_string(),
                    anon_key: require("SUPABASE_ANON_KEY")?,
                }
            }
            None => StoreConfig::Database {
                url: require("DATABASE_URL")?,
            },
        };

        let admin_password_hash = require("ADMIN_PASSWORD_HASH")?.trim().to_lowercase();
        if admin_password_hash.len() != 64
            || !admin_password_hash.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::InvalidEnvVar {
                name: "ADMIN_PASSWORD_HASH".to_string(),
                reason: "expected 64 hex characters (SHA-256)".to_string(),
            }
            .into());
        }

        Ok(Self {
            store,
            admin_password_hash,
            jwt_secret: require("JWT_SECRET")?,
        })
    }
}
