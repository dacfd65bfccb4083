use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discord::{DiscordGuildDto, GuildResourceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::discord::GuildResourceKind,
        service::identity::IdentityService,
        state::AppState,
    },
};

pub static GUILD_TAG: &str = "guild";

#[utoipa::path(
    get,
    path = "/api/servers",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Guilds the user administers", body = Vec<DiscordGuildDto>),
        (status = 401, description = "User not authenticated or token expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session, &state.http_client, state.owner_id)
        .require(&[])
        .await?;

    let guilds = IdentityService::new(&state.http_client, &user.access_token)
        .admin_guilds()
        .await?;

    let dto: Vec<DiscordGuildDto> = guilds.into_iter().map(|guild| guild.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/guild/{guild_id}/{resource}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("resource" = String, Path, description = "`channels` or `roles`")
    ),
    responses(
        (status = 200, description = "Text channels or roles of the guild", body = Vec<GuildResourceDto>),
        (status = 400, description = "Unknown resource", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not administer the guild", body = ErrorDto),
        (status = 502, description = "Discord request failed", body = ErrorDto)
    ),
)]
pub async fn get_guild_resources(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, resource)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session, &state.http_client, state.owner_id)
        .require(&[Permission::GuildAdmin(guild_id)])
        .await?;

    let Some(kind) = GuildResourceKind::parse(&resource) else {
        return Err(AppError::BadRequest("Invalid resource".to_string()));
    };

    let resources = match kind {
        GuildResourceKind::Channels => state.discord.text_channels(guild_id).await?,
        GuildResourceKind::Roles => state.discord.roles(guild_id).await?,
    };

    let dto: Vec<GuildResourceDto> = resources
        .into_iter()
        .map(|resource| resource.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}
