//! Slash command definitions and the per-interaction context they run in.
//!
//! Commands are registered globally with English names and descriptions, plus a
//! localized description for every other language in the catalog.

pub mod config;
pub mod fun;
pub mod help;
pub mod moderation;
pub mod options;
pub mod reply;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::server::{
    bot::command::help::HelpCatalog, error::AppError, i18n::Catalog, model::actor::Actor,
};

/// Language command names and descriptions are registered in.
const REGISTRATION_LANGUAGE: &str = "en";

/// Everything a command needs to answer one interaction.
pub struct CommandContext<'a> {
    pub ctx: &'a Context,
    pub command: &'a CommandInteraction,
    pub db: &'a DatabaseConnection,
    pub catalog: &'a Catalog,
    pub owner_id: u64,
    /// Language of the guild the command was used in, or the default language in DMs.
    pub language: String,
}

impl CommandContext<'_> {
    pub fn text(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.catalog.text(&self.language, key, params)
    }

    /// Guild and invoking member, `None` when the command was used in a DM.
    pub fn guild_actor(&self) -> Option<(u64, Actor)> {
        let guild_id = self.command.guild_id?;
        let member = self.command.member.as_deref()?;

        Some((guild_id.get(), Actor::from_member(member)))
    }

    pub async fn reply(&self, message: CreateInteractionResponseMessage) -> Result<(), AppError> {
        self.command
            .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
            .await?;

        Ok(())
    }
}

/// Discord locale a catalog language is shown under.
fn discord_locale(language: &str) -> &str {
    match language {
        "en" => "en-US",
        other => other,
    }
}

fn localizations<'a>(catalog: &'a Catalog, key: &'a str) -> impl Iterator<Item = (&'a str, String)> {
    catalog
        .languages()
        .filter(|language| *language != REGISTRATION_LANGUAGE)
        .map(move |language| (discord_locale(language), catalog.text(language, key, &[])))
}

pub fn localized_command(catalog: &Catalog, name: &str, key: &str) -> CreateCommand {
    localizations(catalog, key).fold(
        CreateCommand::new(name).description(catalog.text(REGISTRATION_LANGUAGE, key, &[])),
        |command, (locale, description)| command.description_localized(locale, description),
    )
}

pub fn localized_option(
    catalog: &Catalog,
    kind: CommandOptionType,
    name: &str,
    key: &str,
) -> CreateCommandOption {
    localizations(catalog, key).fold(
        CreateCommandOption::new(kind, name, catalog.text(REGISTRATION_LANGUAGE, key, &[])),
        |option, (locale, description)| option.description_localized(locale, description),
    )
}

/// Every global command the bot registers.
pub fn definitions(catalog: &Catalog, help: &HelpCatalog) -> Vec<CreateCommand> {
    let mut commands = vec![
        help::register(catalog, help),
        config::register(catalog),
        moderation::register(catalog),
    ];
    commands.extend(fun::register(catalog));

    commands
}
