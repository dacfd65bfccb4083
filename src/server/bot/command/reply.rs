//! Translated replies for failed commands.

use serenity::all::{CreateEmbed, CreateInteractionResponseMessage};

use crate::server::{
    error::{
        access::AccessError, moderation::ModerationError, settings::SettingsError, AppError,
    },
    i18n::Catalog,
    model::moderation::{MAX_MUTE_HOURS, MAX_PURGE_AMOUNT, MIN_MUTE_HOURS, MIN_PURGE_AMOUNT},
};

const ERROR_COLOUR: u32 = 0xe74c3c;

/// Title and body shown to the invoking user for an error.
///
/// Expected denials and validation errors get a dedicated message; anything else is
/// answered with the generic failure text.
pub fn error_text(catalog: &Catalog, language: &str, err: &AppError) -> (String, String) {
    let text = |key: &str, params: &[(&str, &str)]| catalog.text(language, key, params);
    let generic_title = || text("error_generic_title", &[]);

    match err {
        AppError::AccessErr(AccessError::MaintenanceActive) => {
            (generic_title(), text("maintenance_active", &[]))
        }
        AppError::AccessErr(_) => (text("perms_error_title", &[]), text("perms_error_desc", &[])),
        AppError::ModerationErr(ModerationError::InvalidDuration(_)) => {
            let min = MIN_MUTE_HOURS.to_string();
            let max = MAX_MUTE_HOURS.to_string();
            (
                generic_title(),
                text(
                    "error_invalid_duration",
                    &[("min", min.as_str()), ("max", max.as_str())],
                ),
            )
        }
        AppError::ModerationErr(ModerationError::InvalidAmount(_)) => {
            let min = MIN_PURGE_AMOUNT.to_string();
            let max = MAX_PURGE_AMOUNT.to_string();
            (
                generic_title(),
                text(
                    "error_invalid_amount",
                    &[("min", min.as_str()), ("max", max.as_str())],
                ),
            )
        }
        AppError::ModerationErr(ModerationError::PurgeFailed { channel_id, .. }) => {
            let channel = format!("<#{}>", channel_id);
            (
                generic_title(),
                text("error_clear_failed", &[("channel", channel.as_str())]),
            )
        }
        AppError::ModerationErr(ModerationError::EmptyReason) => {
            (generic_title(), text("error_empty_reason", &[]))
        }
        AppError::ModerationErr(ModerationError::ExternalActionFailed {
            action,
            target_id,
            ..
        }) => {
            let user = format!("<@{}>", target_id);
            (
                generic_title(),
                text(
                    "error_action_failed",
                    &[("action", *action), ("user", user.as_str())],
                ),
            )
        }
        AppError::SettingsErr(
            SettingsError::InvalidField(field) | SettingsError::InvalidValue { field, .. },
        ) => (
            generic_title(),
            text("error_invalid_value", &[("field", field.as_str())]),
        ),
        _ => (generic_title(), text("error_generic", &[])),
    }
}

/// Ephemeral reply describing an error.
///
/// Maintenance is answered with plain text, everything else with an embed.
pub fn error_message(
    catalog: &Catalog,
    language: &str,
    err: &AppError,
) -> CreateInteractionResponseMessage {
    let (title, description) = error_text(catalog, language, err);
    let message = CreateInteractionResponseMessage::new().ephemeral(true);

    match err {
        AppError::AccessErr(AccessError::MaintenanceActive) => message.content(description),
        _ => message.embed(
            CreateEmbed::new()
                .title(title)
                .description(description)
                .colour(ERROR_COLOUR),
        ),
    }
}

/// Ephemeral reply for guild-only commands used in direct messages.
pub fn guild_only_message(catalog: &Catalog, language: &str) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(catalog.text(language, "error_guild_only", &[]))
        .ephemeral(true)
}
