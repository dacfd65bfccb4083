//! Slash command dispatch.
//!
//! Resolves the guild language, applies the maintenance gate, runs the command and
//! turns any error into a translated ephemeral reply.

use serenity::all::{CommandInteraction, Context, CreateInteractionResponse};

use crate::server::{
    bot::{
        command::{config, fun, help, moderation, reply, CommandContext},
        handler::Handler,
    },
    error::{moderation::ModerationError, AppError},
    model::settings::DEFAULT_LANGUAGE,
    service::{maintenance::MaintenanceService, translation::TranslationService},
};

pub async fn handle_command(handler: &Handler, ctx: Context, command: CommandInteraction) {
    let language = match command.guild_id {
        Some(guild_id) => TranslationService::new(&handler.db, &handler.catalog)
            .language(guild_id.get())
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to read language of guild {}: {}", guild_id, e);
                DEFAULT_LANGUAGE.to_string()
            }),
        None => DEFAULT_LANGUAGE.to_string(),
    };

    let cx = CommandContext {
        ctx: &ctx,
        command: &command,
        db: &handler.db,
        catalog: &handler.catalog,
        owner_id: handler.owner_id,
        language,
    };

    if let Err(e) = dispatch(handler, &cx).await {
        if is_expected(&e) {
            tracing::debug!("/{} by {} rejected: {}", command.data.name, command.user.id, e);
        } else {
            tracing::error!("/{} by {} failed: {}", command.data.name, command.user.id, e);
        }

        let message = reply::error_message(cx.catalog, &cx.language, &e);
        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            tracing::error!("Failed to send error reply: {}", e);
        }
    }
}

async fn dispatch(handler: &Handler, cx: &CommandContext<'_>) -> Result<(), AppError> {
    MaintenanceService::new(cx.db, cx.owner_id)
        .check(cx.command.user.id.get())
        .await?;

    match cx.command.data.name.as_str() {
        "help" => help::run(cx, &handler.help).await,
        "config" => config::run(cx).await,
        "mod" => moderation::run(cx).await,
        name if fun::COMMANDS.contains(&name) => fun::run(cx).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    }
}

/// Errors caused by the user's input or privileges rather than by the bot.
fn is_expected(error: &AppError) -> bool {
    matches!(
        error,
        AppError::AccessErr(_)
            | AppError::SettingsErr(_)
            | AppError::ModerationErr(
                ModerationError::InvalidDuration(_)
                    | ModerationError::InvalidAmount(_)
                    | ModerationError::EmptyReason
            )
    )
}
