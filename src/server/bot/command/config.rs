//! `/config`: per-guild settings.

use serde_json::Value;
use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateEmbed, CreateInteractionResponseMessage,
};

use crate::server::{
    bot::command::{localized_command, localized_option, options, reply, CommandContext},
    error::AppError,
    i18n::Catalog,
    model::{
        actor::Actor,
        settings::{GuildSettings, SettingChange, UpdateSettingsParam, ALLOWED_TIMEZONES},
    },
    service::configuration::ConfigurationService,
};

const CONFIG_COLOUR: u32 = 0x2ecc71;

pub fn register(catalog: &Catalog) -> CreateCommand {
    let subcommand =
        |name: &str, key: &str| localized_option(catalog, CommandOptionType::SubCommand, name, key);

    let language = catalog.languages().fold(
        localized_option(catalog, CommandOptionType::String, "language", "opt_language")
            .required(true),
        |option, code| option.add_string_choice(catalog.text(code, "language_name", &[]), code),
    );
    let timezone = ALLOWED_TIMEZONES.iter().fold(
        localized_option(catalog, CommandOptionType::String, "timezone", "opt_timezone")
            .required(true),
        |option, tz| option.add_string_choice(*tz, *tz),
    );

    localized_command(catalog, "config", "cmd_config")
        .dm_permission(false)
        .add_option(subcommand("view", "cmd_config_view"))
        .add_option(subcommand("language", "cmd_config_language").add_sub_option(language))
        .add_option(
            subcommand("log-channel", "cmd_config_log_channel").add_sub_option(
                localized_option(catalog, CommandOptionType::Channel, "channel", "opt_channel")
                    .channel_types(vec![ChannelType::Text]),
            ),
        )
        .add_option(
            subcommand("staff-role", "cmd_config_staff_role").add_sub_option(localized_option(
                catalog,
                CommandOptionType::Role,
                "role",
                "opt_role",
            )),
        )
        .add_option(subcommand("timezone", "cmd_config_timezone").add_sub_option(timezone))
}

pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some((guild_id, actor)) = cx.guild_actor() else {
        return cx.reply(reply::guild_only_message(cx.catalog, &cx.language)).await;
    };
    let Some((name, options)) = options::subcommand(cx.command.data.options()) else {
        return Ok(());
    };
    let service = ConfigurationService::new(cx.db, cx.catalog, cx.owner_id);

    let content = match name {
        "view" => {
            let settings = service.view_settings(&actor, guild_id).await?;
            return cx
                .reply(
                    CreateInteractionResponseMessage::new()
                        .embed(settings_embed(cx.catalog, &settings))
                        .ephemeral(true),
                )
                .await;
        }
        "language" => {
            let code = options::string(&options, "language").unwrap_or_default();
            let change = SettingChange::parse("language", &Value::from(code))?;
            let settings = update(&service, &actor, guild_id, change).await?;
            cx.catalog.text(&settings.language, "config_lang_success", &[])
        }
        "log-channel" => {
            let channel = options::channel(&options, "channel").map(|channel| channel.id.get());
            update(&service, &actor, guild_id, SettingChange::LogChannelId(channel)).await?;
            match channel {
                Some(id) => {
                    let mention = format!("<#{}>", id);
                    cx.text("config_log_channel_success", &[("channel", mention.as_str())])
                }
                None => cx.text("config_log_channel_cleared", &[]),
            }
        }
        "staff-role" => {
            let role = options::role(&options, "role").map(|role| role.id.get());
            update(&service, &actor, guild_id, SettingChange::StaffRoleId(role)).await?;
            match role {
                Some(id) => {
                    let mention = format!("<@&{}>", id);
                    cx.text("config_set_staff_role_success", &[("role", mention.as_str())])
                }
                None => cx.text("config_staff_role_cleared", &[]),
            }
        }
        "timezone" => {
            let tz = options::string(&options, "timezone").unwrap_or_default();
            let change = SettingChange::parse("timezone", &Value::from(tz))?;
            let settings = update(&service, &actor, guild_id, change).await?;
            cx.text(
                "config_set_timezone_success",
                &[("timezone", settings.timezone.as_str())],
            )
        }
        other => {
            tracing::warn!("Received unknown subcommand /config {}", other);
            return Ok(());
        }
    };

    cx.reply(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
    .await
}

async fn update(
    service: &ConfigurationService<'_>,
    actor: &Actor,
    guild_id: u64,
    change: SettingChange,
) -> Result<GuildSettings, AppError> {
    service
        .update_settings(
            actor,
            UpdateSettingsParam {
                guild_id,
                changes: vec![change],
            },
        )
        .await
}

/// Panel shown by `/config view`, in the guild's own language.
pub fn settings_embed(catalog: &Catalog, settings: &GuildSettings) -> CreateEmbed {
    let language = settings.language.as_str();
    let text = |key: &str| catalog.text(language, key, &[]);
    let or_not_set = |value: Option<String>| value.unwrap_or_else(|| text("config_not_set"));

    CreateEmbed::new()
        .title(text("config_panel_title"))
        .colour(CONFIG_COLOUR)
        .field(text("config_field_language"), text("language_name"), true)
        .field(
            text("config_field_log_channel"),
            or_not_set(settings.log_channel_id.map(|id| format!("<#{}>", id))),
            true,
        )
        .field(
            text("config_field_staff_role"),
            or_not_set(settings.staff_role_id.map(|id| format!("<@&{}>", id))),
            true,
        )
        .field(text("config_field_timezone"), settings.timezone.clone(), true)
}
