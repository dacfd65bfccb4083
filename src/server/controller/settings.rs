use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        settings::{GuildSettingsDto, SettingsOptionsDto, UpdateSettingsResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::ALLOWED_TIMEZONES,
        service::configuration::ConfigurationService,
        state::AppState,
    },
};

pub static SETTINGS_TAG: &str = "settings";

#[utoipa::path(
    get,
    path = "/api/settings/options",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Accepted languages and timezones", body = SettingsOptionsDto)
    ),
)]
pub async fn get_settings_options(State(state): State<AppState>) -> impl IntoResponse {
    let dto = SettingsOptionsDto {
        languages: state.catalog.languages().map(str::to_string).collect(),
        timezones: ALLOWED_TIMEZONES.iter().map(|tz| tz.to_string()).collect(),
    };

    (StatusCode::OK, Json(dto))
}

#[utoipa::path(
    get,
    path = "/api/settings/{guild_id}",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Effective settings, defaults if never configured", body = GuildSettingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not administer the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session, &state.http_client, state.owner_id)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let settings = ConfigurationService::new(&state.db, &state.catalog, state.owner_id)
        .get_settings(guild_id)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Applies a JSON object of field to value, all or nothing.
///
/// Besides the identity provider check, the caller's current roles are resolved with
/// the bot token so the same authorization rule as the bot commands applies.
#[utoipa::path(
    post,
    path = "/api/settings/{guild_id}",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body(content = Object, description = "Settings fields to change, e.g. `{\"language\": \"en\", \"log_channel_id\": null}`"),
    responses(
        (status = 200, description = "Settings after the update", body = UpdateSettingsResponseDto),
        (status = 400, description = "Unknown field or invalid value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User lacks privileges in the guild", body = ErrorDto),
        (status = 404, description = "User is not a member of the guild", body = ErrorDto),
        (status = 503, description = "Maintenance mode is active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session, &state.http_client, state.owner_id)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let settings = ConfigurationService::new(&state.db, &state.catalog, state.owner_id)
        .update_from_dashboard(&state.discord, user.user_id, guild_id, &payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateSettingsResponseDto {
            success: true,
            settings: settings.into_dto(),
        }),
    ))
}
