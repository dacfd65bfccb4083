pub use super::bot_status::Entity as BotStatus;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::warning::Entity as Warning;
