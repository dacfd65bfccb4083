//! Discord implementation of the platform client, plus the channel and role lookups
//! the dashboard needs.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serenity::{
    all::{
        ChannelId, ChannelType, CreateEmbed, CreateMessage, EditMember, GetMessages, GuildId,
        Http, MessageId, RoleId, Timestamp, UserId,
    },
    async_trait,
};

use crate::server::{
    error::platform::PlatformError,
    model::{actor::Actor, audit::AuditEntry, discord::GuildResource},
    service::platform::PlatformClient,
};

/// Embed colour of audit entries.
const AUDIT_EMBED_COLOUR: u32 = 0xe74c3c;

/// Age limit of messages accepted by the bulk delete endpoint.
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

/// Platform client backed by the bot's Discord HTTP client.
#[derive(Clone)]
pub struct DiscordPlatform {
    http: Arc<Http>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Lists the text channels of a guild, ordered by position.
    pub async fn text_channels(&self, guild_id: u64) -> Result<Vec<GuildResource>, PlatformError> {
        let channels = GuildId::new(guild_id).channels(&self.http).await?;

        let mut text_channels: Vec<_> = channels
            .into_values()
            .filter(|channel| channel.kind == ChannelType::Text)
            .collect();
        text_channels.sort_by_key(|channel| channel.position);

        Ok(text_channels
            .into_iter()
            .map(|channel| GuildResource {
                id: channel.id.get(),
                name: channel.name,
            })
            .collect())
    }

    /// Lists the roles of a guild, highest first, without `@everyone`.
    pub async fn roles(&self, guild_id: u64) -> Result<Vec<GuildResource>, PlatformError> {
        let roles = GuildId::new(guild_id).roles(&self.http).await?;

        let mut roles: Vec<_> = roles
            .into_values()
            .filter(|role| role.id.get() != guild_id)
            .collect();
        roles.sort_by(|a, b| b.position.cmp(&a.position));

        Ok(roles
            .into_iter()
            .map(|role| GuildResource {
                id: role.id.get(),
                name: role.name,
            })
            .collect())
    }
}

#[async_trait]
impl PlatformClient for DiscordPlatform {
    /// The guild owner counts as administrator. Otherwise the member is an administrator
    /// if the `@everyone` role or any of their roles grants the administrator permission.
    async fn resolve_actor(&self, guild_id: u64, user_id: u64) -> Result<Actor, PlatformError> {
        let guild_id = GuildId::new(guild_id);
        let guild = guild_id.to_partial_guild(&self.http).await?;
        let member = guild_id.member(&self.http, UserId::new(user_id)).await?;

        let everyone = guild.roles.get(&RoleId::new(guild_id.get()));
        let is_administrator = guild.owner_id.get() == user_id
            || member
                .roles
                .iter()
                .filter_map(|role_id| guild.roles.get(role_id))
                .chain(everyone)
                .any(|role| role.permissions.administrator());

        Ok(Actor::new(
            user_id,
            is_administrator,
            member.roles.iter().map(|role_id| role_id.get()).collect(),
        ))
    }

    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), PlatformError> {
        let channel = UserId::new(user_id)
            .create_dm_channel(&self.http)
            .await
            .map_err(|e| PlatformError::Unreachable(e.to_string()))?;

        channel
            .id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map_err(|e| PlatformError::Unreachable(e.to_string()))?;

        Ok(())
    }

    async fn kick_member(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<(), PlatformError> {
        GuildId::new(guild_id)
            .kick_with_reason(&self.http, UserId::new(user_id), reason)
            .await
            .map_err(|e| PlatformError::Rejected(e.to_string()))
    }

    async fn ban_member(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<(), PlatformError> {
        GuildId::new(guild_id)
            .ban_with_reason(&self.http, UserId::new(user_id), 0, reason)
            .await
            .map_err(|e| PlatformError::Rejected(e.to_string()))
    }

    async fn timeout_member(
        &self,
        guild_id: u64,
        user_id: u64,
        until: DateTime<Utc>,
        reason: &str,
    ) -> Result<(), PlatformError> {
        let until = Timestamp::from_unix_timestamp(until.timestamp())
            .map_err(|e| PlatformError::Rejected(e.to_string()))?;

        GuildId::new(guild_id)
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new()
                    .disable_communication_until_datetime(until)
                    .audit_log_reason(reason),
            )
            .await
            .map_err(|e| PlatformError::Rejected(e.to_string()))?;

        Ok(())
    }

    async fn clear_timeout(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<(), PlatformError> {
        GuildId::new(guild_id)
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new()
                    .enable_communication()
                    .audit_log_reason(reason),
            )
            .await
            .map_err(|e| PlatformError::Rejected(e.to_string()))?;

        Ok(())
    }

    async fn purge_messages(&self, channel_id: u64, amount: u8) -> Result<u64, PlatformError> {
        let channel_id = ChannelId::new(channel_id);
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(amount))
            .await
            .map_err(|e| PlatformError::Rejected(e.to_string()))?;

        // Discord refuses to bulk delete messages older than two weeks.
        let cutoff = (Utc::now() - Duration::days(BULK_DELETE_MAX_AGE_DAYS)).timestamp();
        let recent: Vec<MessageId> = messages
            .iter()
            .filter(|message| message.timestamp.unix_timestamp() > cutoff)
            .map(|message| message.id)
            .collect();

        // The bulk endpoint requires at least two messages.
        match recent.as_slice() {
            [] => {}
            [message_id] => channel_id
                .delete_message(&self.http, *message_id)
                .await
                .map_err(|e| PlatformError::Rejected(e.to_string()))?,
            _ => channel_id
                .delete_messages(&self.http, &recent)
                .await
                .map_err(|e| PlatformError::Rejected(e.to_string()))?,
        }

        Ok(recent.len() as u64)
    }

    async fn send_audit_entry(
        &self,
        channel_id: u64,
        entry: &AuditEntry,
    ) -> Result<(), PlatformError> {
        let timestamp = Timestamp::from_unix_timestamp(entry.timestamp.timestamp())
            .unwrap_or_else(|_| Timestamp::now());

        let embed = CreateEmbed::new()
            .title(&entry.labels.title)
            .colour(AUDIT_EMBED_COLOUR)
            .field(&entry.labels.action, &entry.action, false)
            .field(
                &entry.labels.user,
                format!("<@{}> ({})", entry.target_id, entry.target_name),
                true,
            )
            .field(
                &entry.labels.moderator,
                format!("<@{}>", entry.moderator_id),
                true,
            )
            .field(&entry.labels.reason, &entry.reason, false)
            .timestamp(timestamp);

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await
            .map_err(|e| PlatformError::Unreachable(e.to_string()))?;

        Ok(())
    }
}
