//! `/mod`: moderation subcommands.

use serenity::all::{CommandOptionType, CreateCommand, CreateEmbed, CreateInteractionResponseMessage};

use crate::server::{
    bot::command::{localized_command, localized_option, options, reply, CommandContext},
    error::AppError,
    i18n::Catalog,
    model::{
        actor::Actor,
        moderation::{ModerationAction, ModerationOutcome, ModerationRequest, ModerationTarget},
        warning::Warning,
    },
    service::{moderation::ModerationService, platform::discord::DiscordPlatform},
};

const WARNINGS_COLOUR: u32 = 0xe67e22;

/// Most warnings shown by `/mod warnings`; older ones are left out.
const WARNINGS_SHOWN: usize = 25;

/// Discord's limit on embed descriptions, in characters.
const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Reasons longer than this are cut in the warnings list.
const REASON_SHOWN_CHARS: usize = 300;

const ENTRY_SEPARATOR: &str = "\n\n";

pub fn register(catalog: &Catalog) -> CreateCommand {
    let user = || {
        localized_option(catalog, CommandOptionType::User, "user", "opt_user").required(true)
    };
    let reason = || localized_option(catalog, CommandOptionType::String, "reason", "opt_reason");
    let subcommand = |name: &str, key: &str| {
        localized_option(catalog, CommandOptionType::SubCommand, name, key).add_sub_option(user())
    };

    localized_command(catalog, "mod", "cmd_mod")
        .dm_permission(false)
        .add_option(subcommand("kick", "cmd_mod_kick").add_sub_option(reason()))
        .add_option(subcommand("ban", "cmd_mod_ban").add_sub_option(reason()))
        .add_option(
            subcommand("mute", "cmd_mod_mute")
                .add_sub_option(
                    localized_option(catalog, CommandOptionType::Integer, "hours", "opt_hours")
                        .required(true),
                )
                .add_sub_option(reason()),
        )
        .add_option(subcommand("unmute", "cmd_mod_unmute").add_sub_option(reason()))
        .add_option(subcommand("warn", "cmd_mod_warn").add_sub_option(reason().required(true)))
        .add_option(subcommand("warnings", "cmd_mod_warnings"))
        .add_option(subcommand("clearwarns", "cmd_mod_clearwarns"))
        .add_option(
            localized_option(catalog, CommandOptionType::SubCommand, "clear", "cmd_mod_clear")
                .add_sub_option(
                    localized_option(catalog, CommandOptionType::Integer, "amount", "opt_amount")
                        .required(true),
                ),
        )
}

pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some((guild_id, actor)) = cx.guild_actor() else {
        return cx.reply(reply::guild_only_message(cx.catalog, &cx.language)).await;
    };
    let Some((name, options)) = options::subcommand(cx.command.data.options()) else {
        return Ok(());
    };
    if name == "clear" {
        let amount = options::integer(&options, "amount").unwrap_or_default();
        return clear_messages(cx, guild_id, &actor, amount).await;
    }
    let Some(target) = options::user(&options, "user").map(|(user, member)| options::target(user, member))
    else {
        return Ok(());
    };
    let reason = options::string(&options, "reason").map(str::to_string);

    let action = match name {
        "kick" => ModerationAction::Kick,
        "ban" => ModerationAction::Ban,
        "mute" => ModerationAction::Mute {
            duration_hours: options::integer(&options, "hours").unwrap_or_default(),
        },
        "unmute" => ModerationAction::Unmute,
        "warn" => ModerationAction::Warn,
        "clearwarns" => ModerationAction::ClearWarnings,
        "warnings" => return list_warnings(cx, guild_id, &actor, &target).await,
        other => {
            tracing::warn!("Received unknown subcommand /mod {}", other);
            return Ok(());
        }
    };

    let guild_name = cx
        .command
        .guild_id
        .and_then(|guild_id| guild_id.name(&cx.ctx.cache))
        .unwrap_or_default();
    let platform = DiscordPlatform::new(cx.ctx.http.clone());

    let outcome = ModerationService::new(cx.db, &platform, cx.catalog, cx.owner_id)
        .execute(ModerationRequest {
            guild_id,
            guild_name,
            actor,
            target,
            action,
            reason,
        })
        .await?;

    cx.reply(CreateInteractionResponseMessage::new().content(success_text(cx.catalog, &outcome)))
        .await
}

async fn clear_messages(
    cx: &CommandContext<'_>,
    guild_id: u64,
    actor: &Actor,
    amount: i64,
) -> Result<(), AppError> {
    let deleted = ModerationService::new(
        cx.db,
        &DiscordPlatform::new(cx.ctx.http.clone()),
        cx.catalog,
        cx.owner_id,
    )
    .purge(actor, guild_id, cx.command.channel_id.get(), amount)
    .await?;

    cx.reply(
        CreateInteractionResponseMessage::new()
            .content(clear_text(cx.catalog, &cx.language, deleted))
            .ephemeral(true),
    )
    .await
}

/// Confirmation of a message purge, shown only to the moderator.
pub fn clear_text(catalog: &Catalog, language: &str, deleted: u64) -> String {
    let amount = deleted.to_string();
    catalog.text(language, "clear_success", &[("amount", amount.as_str())])
}

async fn list_warnings(
    cx: &CommandContext<'_>,
    guild_id: u64,
    actor: &Actor,
    target: &ModerationTarget,
) -> Result<(), AppError> {
    let warnings = ModerationService::new(
        cx.db,
        &DiscordPlatform::new(cx.ctx.http.clone()),
        cx.catalog,
        cx.owner_id,
    )
    .list_warnings(actor, guild_id, target.user_id)
    .await?;

    cx.reply(
        CreateInteractionResponseMessage::new()
            .embed(warnings_embed(cx.catalog, &cx.language, target, &warnings))
            .ephemeral(true),
    )
    .await
}

/// Confirmation posted in the channel after a completed action.
pub fn success_text(catalog: &Catalog, outcome: &ModerationOutcome) -> String {
    let user = outcome.target.display_name.as_str();
    let text = |key: &str, params: &[(&str, &str)]| catalog.text(&outcome.language, key, params);

    match outcome.action {
        ModerationAction::Kick => text("kick_success_channel", &[("user", user)]),
        ModerationAction::Ban => text("ban_success_channel", &[("user", user)]),
        ModerationAction::Mute { .. } => {
            let timestamp = outcome
                .timeout_until
                .map(|until| format!("<t:{}:R>", until.timestamp()))
                .unwrap_or_default();
            text(
                "mute_success_channel",
                &[("user", user), ("timestamp", timestamp.as_str())],
            )
        }
        ModerationAction::Unmute => text("unmute_success_channel", &[("user", user)]),
        ModerationAction::Warn => {
            let count = outcome.warning_count.unwrap_or_default().to_string();
            text(
                "warn_success_channel",
                &[("user", user), ("count", count.as_str())],
            )
        }
        ModerationAction::ClearWarnings => {
            let count = outcome.removed_warnings.unwrap_or_default().to_string();
            text(
                "clearwarns_success",
                &[("count", count.as_str()), ("user", user)],
            )
        }
    }
}

pub fn warnings_embed(
    catalog: &Catalog,
    language: &str,
    target: &ModerationTarget,
    warnings: &[Warning],
) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(catalog.text(
            language,
            "warnings_list_title",
            &[("user", target.display_name.as_str())],
        ))
        .colour(WARNINGS_COLOUR);

    if warnings.is_empty() {
        return embed.description(catalog.text(language, "warnings_list_no_warnings", &[]));
    }

    embed.description(warnings_description(catalog, language, warnings))
}

/// Lists the latest warnings, oldest first, within the embed description limit.
///
/// Long reasons are shortened first. When the entries still do not fit, the oldest
/// ones are left out.
pub fn warnings_description(catalog: &Catalog, language: &str, warnings: &[Warning]) -> String {
    let shown = &warnings[warnings.len().saturating_sub(WARNINGS_SHOWN)..];

    let mut entries = Vec::new();
    let mut length = 0;
    for warning in shown.iter().rev() {
        let entry = warnings_entry(catalog, language, warning);
        let entry_length = entry.chars().count() + ENTRY_SEPARATOR.len();
        if length + entry_length > EMBED_DESCRIPTION_LIMIT + ENTRY_SEPARATOR.len() {
            break;
        }
        length += entry_length;
        entries.push(entry);
    }
    entries.reverse();

    entries.join(ENTRY_SEPARATOR)
}

fn warnings_entry(catalog: &Catalog, language: &str, warning: &Warning) -> String {
    let warn_id = warning.warn_id.to_string();
    let moderator = format!("<@{}>", warning.moderator_id);
    let timestamp = format!("<t:{}:f>", warning.created_at.timestamp());
    let reason = shorten(&warning.reason, REASON_SHOWN_CHARS);

    catalog.text(
        language,
        "warnings_list_entry",
        &[
            ("warn_id", warn_id.as_str()),
            ("moderator", moderator.as_str()),
            ("timestamp", timestamp.as_str()),
            ("reason", reason.as_str()),
        ],
    )
}

fn shorten(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}
