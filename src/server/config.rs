use std::{net::SocketAddr, path::Path};

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

/// Persistent disk of the hosting platform, used for the database when mounted.
const PERSISTENT_DATA_DIR: &str = "/var/data/render";
const DEFAULT_DASHBOARD_ADDR: &str = "0.0.0.0:5000";

/// Settings shared by the bot and the dashboard process.
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    /// Discord ID of the operator who bypasses maintenance mode and may toggle it.
    pub bot_owner_id: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bot_owner_id = required("BOT_OWNER_ID")?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url()),
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            bot_owner_id: bot_owner_id.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "BOT_OWNER_ID".to_string(),
                value: bot_owner_id,
            })?,
        })
    }
}

/// Settings only the dashboard process needs.
pub struct DashboardConfig {
    pub addr: SocketAddr,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let addr = std::env::var("DASHBOARD_ADDR")
            .unwrap_or_else(|_| DEFAULT_DASHBOARD_ADDR.to_string());

        Ok(Self {
            addr: addr.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "DASHBOARD_ADDR".to_string(),
                value: addr.clone(),
            })?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn default_database_url() -> String {
    if Path::new(PERSISTENT_DATA_DIR).exists() {
        format!("sqlite://{}/data.db?mode=rwc", PERSISTENT_DATA_DIR)
    } else {
        "sqlite://data.db?mode=rwc".to_string()
    }
}
