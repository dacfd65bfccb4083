//! Application state shared across all request handlers.
//!
//! The state is initialized once during dashboard startup and cloned for each request
//! through Axum's state extraction. Every field is cheap to clone: the database
//! connection is a pool, `reqwest::Client` and `DiscordPlatform` wrap `Arc`s and the
//! translation catalog is shared behind an `Arc`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{i18n::Catalog, service::platform::discord::DiscordPlatform};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the database shared with the bot process.
    pub db: DatabaseConnection,

    /// HTTP client for identity provider requests made with user access tokens.
    ///
    /// Configured without redirects to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Discord client authenticated with the bot token, for guild channels, roles and
    /// member privileges.
    pub discord: DiscordPlatform,

    /// Translation catalog, needed to validate language settings.
    pub catalog: Arc<Catalog>,

    /// Discord ID of the bot owner.
    pub owner_id: u64,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord: DiscordPlatform,
        catalog: Arc<Catalog>,
        owner_id: u64,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord,
            catalog,
            owner_id,
        }
    }
}
