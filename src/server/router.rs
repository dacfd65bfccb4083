use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{
            __path_get_status, __path_toggle_maintenance, get_status, toggle_maintenance, ADMIN_TAG,
        },
        auth::{
            __path_callback, __path_get_user, __path_login, __path_logout, callback, get_user,
            login, logout, AUTH_TAG,
        },
        guild::{
            __path_get_guild_resources, __path_get_servers, get_guild_resources, get_servers,
            GUILD_TAG,
        },
        settings::{
            __path_get_settings, __path_get_settings_options, __path_update_settings,
            get_settings, get_settings_options, update_settings, SETTINGS_TAG,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "GalaxyBot dashboard API"),
    tags(
        (name = AUTH_TAG, description = "Discord login and session"),
        (name = GUILD_TAG, description = "Guilds administered by the signed-in user"),
        (name = SETTINGS_TAG, description = "Per-guild bot settings"),
        (name = ADMIN_TAG, description = "Owner-only maintenance controls")
    )
)]
struct ApiDoc;

/// Builds the dashboard API router and serves its OpenAPI document.
///
/// The document is available at `/api/openapi.json` and browsable at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(login))
        .routes(routes!(callback))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(get_servers))
        .routes(routes!(get_guild_resources))
        .routes(routes!(get_settings_options))
        .routes(routes!(get_settings, update_settings))
        .routes(routes!(get_status))
        .routes(routes!(toggle_maintenance))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
