//! `/help`: interactive list of command categories.

use serenity::all::{
    CommandOptionType, CreateCommand, CreateEmbed, CreateInteractionResponseMessage,
};

use crate::server::{
    bot::command::{localized_command, localized_option, options, CommandContext},
    error::AppError,
    i18n::Catalog,
};

const HELP_COLOUR: u32 = 0x3498db;

/// A command as listed by `/help`.
pub struct HelpEntry {
    pub usage: &'static str,
    pub description_key: &'static str,
}

pub struct HelpCategory {
    pub key: &'static str,
    pub entries: Vec<HelpEntry>,
}

impl HelpCategory {
    pub fn title_key(&self) -> String {
        format!("help_category_{}", self.key)
    }

    pub fn description_key(&self) -> String {
        format!("help_category_{}_desc", self.key)
    }
}

/// Fixed category to command mapping, built once at startup.
pub struct HelpCatalog {
    categories: Vec<HelpCategory>,
}

impl HelpCatalog {
    pub fn new() -> Self {
        let entry = |usage, description_key| HelpEntry {
            usage,
            description_key,
        };

        Self {
            categories: vec![
                HelpCategory {
                    key: "general",
                    entries: vec![entry("/help [category]", "cmd_help")],
                },
                HelpCategory {
                    key: "mod",
                    entries: vec![
                        entry("/mod kick <user> [reason]", "cmd_mod_kick"),
                        entry("/mod ban <user> [reason]", "cmd_mod_ban"),
                        entry("/mod mute <user> <hours> [reason]", "cmd_mod_mute"),
                        entry("/mod unmute <user> [reason]", "cmd_mod_unmute"),
                        entry("/mod warn <user> <reason>", "cmd_mod_warn"),
                        entry("/mod warnings <user>", "cmd_mod_warnings"),
                        entry("/mod clearwarns <user>", "cmd_mod_clearwarns"),
                        entry("/mod clear <amount>", "cmd_mod_clear"),
                    ],
                },
                HelpCategory {
                    key: "fun",
                    entries: vec![
                        entry("/8ball <question>", "cmd_8ball"),
                        entry("/coinflip", "cmd_coinflip"),
                        entry("/rps <choice>", "cmd_rps"),
                        entry("/rate <thing>", "cmd_rate"),
                        entry("/ship <user1> <user2>", "cmd_ship"),
                    ],
                },
                HelpCategory {
                    key: "config",
                    entries: vec![
                        entry("/config view", "cmd_config_view"),
                        entry("/config language <language>", "cmd_config_language"),
                        entry("/config log-channel [channel]", "cmd_config_log_channel"),
                        entry("/config staff-role [role]", "cmd_config_staff_role"),
                        entry("/config timezone <timezone>", "cmd_config_timezone"),
                    ],
                },
            ],
        }
    }

    pub fn categories(&self) -> &[HelpCategory] {
        &self.categories
    }

    pub fn find(&self, key: &str) -> Option<&HelpCategory> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// Embed listing every category, or the commands of one category.
    pub fn embed(&self, catalog: &Catalog, language: &str, category: Option<&str>) -> CreateEmbed {
        let text = |key: &str| catalog.text(language, key, &[]);

        match category.and_then(|key| self.find(key)) {
            Some(category) => {
                let category_title = text(&category.title_key());
                let title = catalog.text(
                    language,
                    "help_commands_title",
                    &[("category", category_title.as_str())],
                );
                category.entries.iter().fold(
                    CreateEmbed::new().title(title).colour(HELP_COLOUR),
                    |embed, entry| {
                        embed.field(
                            format!("`{}`", entry.usage),
                            text(entry.description_key),
                            false,
                        )
                    },
                )
            }
            None => self.categories.iter().fold(
                CreateEmbed::new()
                    .title(text("help_title"))
                    .description(text("help_description"))
                    .colour(HELP_COLOUR),
                |embed, category| {
                    embed.field(
                        text(&category.title_key()),
                        text(&category.description_key()),
                        false,
                    )
                },
            ),
        }
    }
}

impl Default for HelpCatalog {
    fn default() -> Self {
        Self::new()
    }
}

pub fn register(catalog: &Catalog, help: &HelpCatalog) -> CreateCommand {
    let category = help.categories().iter().fold(
        localized_option(catalog, CommandOptionType::String, "category", "opt_category"),
        |option, category| {
            option.add_string_choice(catalog.text("en", &category.title_key(), &[]), category.key)
        },
    );

    localized_command(catalog, "help", "cmd_help").add_option(category)
}

pub async fn run(cx: &CommandContext<'_>, help: &HelpCatalog) -> Result<(), AppError> {
    let options = cx.command.data.options();
    let category = options::string(&options, "category");

    cx.reply(
        CreateInteractionResponseMessage::new()
            .embed(help.embed(cx.catalog, &cx.language, category))
            .ephemeral(true),
    )
    .await
}
