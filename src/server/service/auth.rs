//! Discord OAuth2 login for the dashboard.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::SessionUser,
    service::identity::IdentityService,
    state::OAuth2Client,
};

pub struct AuthService<'a> {
    /// HTTP client for Discord API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes, enough to read the user and the
    /// permissions they hold in each of their guilds.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }

    /// Exchanges the authorization code and fetches the user it belongs to.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - User and access token to store in the session
    /// - `Err(AppError::AuthErr(TokenExchange))` - Discord refused the code
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the user
    pub async fn callback(&self, authorization_code: String) -> Result<SessionUser, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let access_token = token.access_token().secret().clone();
        let user = IdentityService::new(self.http_client, &access_token)
            .current_user()
            .await?;

        tracing::info!("User {} logged in to the dashboard", user.id);

        Ok(SessionUser {
            user_id: user.id.get(),
            name: user.name,
            access_token,
        })
    }
}
