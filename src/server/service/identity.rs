//! Identity provider lookups made with a dashboard user's access token.

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use serenity::all::{GuildId, User as DiscordUser};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::discord::AdminGuild,
};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";

/// Administrator bit of a Discord permission set.
const ADMINISTRATOR: u64 = 0x8;

/// Guild entry returned by `/users/@me/guilds`.
///
/// Discord serializes the permission set as a decimal string.
#[derive(Debug, Deserialize)]
pub struct PartialGuild {
    pub id: GuildId,
    pub name: String,
    pub icon: Option<String>,
    pub permissions: String,
}

impl PartialGuild {
    /// Whether the user holds the administrator permission in this guild.
    ///
    /// An unparseable permission string counts as no permissions.
    pub fn is_admin(&self) -> bool {
        self.permissions
            .parse::<u64>()
            .map(|permissions| permissions & ADMINISTRATOR == ADMINISTRATOR)
            .unwrap_or(false)
    }
}

/// Keeps the guilds in which the user is an administrator.
pub fn admin_guilds(guilds: Vec<PartialGuild>) -> Vec<AdminGuild> {
    guilds
        .into_iter()
        .filter(PartialGuild::is_admin)
        .map(|guild| AdminGuild {
            guild_id: guild.id.get(),
            name: guild.name,
            icon_hash: guild.icon,
        })
        .collect()
}

pub struct IdentityService<'a> {
    http_client: &'a reqwest::Client,
    access_token: &'a str,
}

impl<'a> IdentityService<'a> {
    /// Creates a new IdentityService instance.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client for Discord API requests
    /// - `access_token` - OAuth2 access token of the signed-in user
    pub fn new(http_client: &'a reqwest::Client, access_token: &'a str) -> Self {
        Self {
            http_client,
            access_token,
        }
    }

    /// Fetches the user owning the access token.
    pub async fn current_user(&self) -> Result<DiscordUser, AppError> {
        self.get("/users/@me").await
    }

    /// Lists the guilds in which the user is an administrator.
    ///
    /// # Returns
    /// - `Ok(Vec<AdminGuild>)` - Guilds with the administrator bit set
    /// - `Err(AppError::AuthErr(TokenRejected))` - The access token expired or was revoked
    /// - `Err(AppError::ReqwestErr)` - Request failed or returned another error status
    pub async fn admin_guilds(&self) -> Result<Vec<AdminGuild>, AppError> {
        let guilds: Vec<PartialGuild> = self.get("/users/@me/guilds").await?;

        Ok(admin_guilds(guilds))
    }

    /// Requires the user to be an administrator of `guild_id`.
    ///
    /// # Returns
    /// - `Ok(())` - The user administers the guild
    /// - `Err(AppError::AuthErr(NotGuildAdmin))` - The user does not
    pub async fn require_guild_admin(&self, user_id: u64, guild_id: u64) -> Result<(), AppError> {
        let is_admin = self
            .admin_guilds()
            .await?
            .iter()
            .any(|guild| guild.guild_id == guild_id);

        if !is_admin {
            return Err(AuthError::NotGuildAdmin(user_id, guild_id).into());
        }

        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http_client
            .get(format!("{}{}", DISCORD_API_URL, path))
            .bearer_auth(self.access_token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::TokenRejected(response.status().as_u16()).into());
        }

        Ok(response.error_for_status()?.json::<T>().await?)
    }
}
