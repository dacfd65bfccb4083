//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. Global slash
//! commands are (re)registered here so definitions follow the running binary.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::server::{
    bot::command::{self, help::HelpCatalog},
    i18n::Catalog,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Overwrites the global command set. A failure is logged and the bot keeps running
/// with whatever definitions Discord already has.
///
/// # Arguments
/// - `catalog` - Translations for command descriptions
/// - `help` - Category listing used by the `/help` choices
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(catalog: &Catalog, help: &HelpCatalog, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("/help")));

    match Command::set_global_commands(&ctx.http, command::definitions(catalog, help)).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
    }
}
