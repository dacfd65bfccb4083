use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User is not logged in")]
    UserNotInSession,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    ///
    /// Results in a 400 Bad Request response asking the user to retry the login.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// The identity provider rejected the stored access token.
    ///
    /// Usually means the token expired; the user has to log in again.
    /// Results in a 401 Unauthorized response.
    #[error("Identity provider rejected the session token with status {0}")]
    TokenRejected(u16),

    /// User is not an administrator of the requested guild according to the
    /// identity provider.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Guild ID they tried to access
    #[error("User {0} is not an administrator of guild {1}")]
    NotGuildAdmin(u64, u64),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures and failed code exchange
/// - 401 Unauthorized - For missing or expired sessions
/// - 403 Forbidden - For callers lacking guild administrator rights
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::TokenRejected(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::NotGuildAdmin(_, _) => {
                (StatusCode::FORBIDDEN, "Access Forbidden")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
