mod bot_status;
mod guild_settings;
mod warning;
