use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::server::{bot::command::help::HelpCatalog, i18n::Catalog};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
    pub owner_id: u64,
    pub help: HelpCatalog,
}

impl Handler {
    pub fn new(db: DatabaseConnection, catalog: Arc<Catalog>, owner_id: u64) -> Self {
        Self {
            db,
            catalog,
            owner_id,
            help: HelpCatalog::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.catalog, &self.help, ctx, ready).await;
    }

    /// Called for every slash command, autocomplete or component interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            interaction::handle_command(self, ctx, command).await;
        }
    }
}
