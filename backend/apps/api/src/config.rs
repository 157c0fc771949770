//! Server Settings
//!
//! Read once from the environment at startup. Any error here stops the
//! process before the listener is bound.

use std::time::Duration;

use anyhow::Context;
use auth::AuthConfig;

const DEFAULT_TOKEN_TTL_SECS: u64 = 300;
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Settings {
    /// `JWT_SECRET`, required
    pub jwt_secret: String,
    /// `JWT_EXPIRES_IN`, in seconds
    pub jwt_expires_in: Duration,
    /// `WEB_SERVER_PORT`
    pub port: u16,
    /// `DATABASE_URL`; in-memory stores when absent
    pub database_url: Option<String>,
    /// `FRONTEND_ORIGINS`, comma separated
    pub frontend_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let jwt_secret = value("JWT_SECRET").context("JWT_SECRET must be set")?;

        let jwt_expires_in = match value("JWT_EXPIRES_IN") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("JWT_EXPIRES_IN must be whole seconds, got {raw:?}"))?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let port = match value("WEB_SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("WEB_SERVER_PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = value("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            jwt_secret,
            jwt_expires_in: Duration::from_secs(jwt_expires_in),
            port,
            database_url: value("DATABASE_URL"),
            frontend_origins,
        })
    }

    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        AuthConfig::new(self.jwt_secret.as_bytes(), self.jwt_expires_in)
            .context("invalid token configuration")
    }
}
