//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Signing secret for access tokens (15-minute lifetime)
    pub access_token_secret: String,

    /// Signing secret for refresh tokens (30-day lifetime).
    /// Must differ from the access secret so that a refresh token can
    /// never authenticate a normal request.
    pub refresh_token_secret: String,

    /// Downstream subgraph base URLs, comma-separated `name=url` pairs
    /// (e.g. `orders=http://orders:3001,accounts=http://accounts:3002`)
    pub subgraph_urls: String,

    /// Runtime configuration
    pub log_level: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            access_token_secret: env::var("ACCESS_TOKEN_SECRET")
                .map_err(|_| anyhow::anyhow!("ACCESS_TOKEN_SECRET is required"))?,
            refresh_token_secret: env::var("REFRESH_TOKEN_SECRET")
                .map_err(|_| anyhow::anyhow!("REFRESH_TOKEN_SECRET is required"))?,

            subgraph_urls: env::var("SUBGRAPH_URLS").unwrap_or_default(),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
