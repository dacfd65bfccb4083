use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{admin::BotStatusDto, api::ErrorDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::maintenance::MaintenanceService,
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/api/admin/status",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Current maintenance state", body = BotStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the bot owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session, &state.http_client, state.owner_id)
        .require(&[Permission::Owner])
        .await?;

    let status = MaintenanceService::new(&state.db, state.owner_id)
        .status()
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/toggle",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Maintenance state after the toggle", body = BotStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the bot owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_maintenance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session, &state.http_client, state.owner_id)
        .require(&[Permission::Owner])
        .await?;

    let status = MaintenanceService::new(&state.db, state.owner_id)
        .toggle(user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}
