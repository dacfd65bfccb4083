//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. The bot surface
//! reuses the same type and maps it to translated replies instead.

pub mod access;
pub mod auth;
pub mod config;
pub mod internal;
pub mod moderation;
pub mod platform;
pub mod settings;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        access::AccessError, auth::AuthError, config::ConfigError, internal::InternalError,
        moderation::ModerationError, platform::PlatformError, settings::SettingsError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Dashboard authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400, 401, 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Maintenance or authorization gate denial.
    ///
    /// Results in 503 Service Unavailable for maintenance and 403 Forbidden
    /// for missing privileges.
    #[error(transparent)]
    AccessErr(#[from] AccessError),

    /// Rejected settings change.
    ///
    /// Results in 400 Bad Request with the validation message.
    #[error(transparent)]
    SettingsErr(#[from] SettingsError),

    /// Rejected or failed moderation request.
    ///
    /// Results in 400 Bad Request for invalid input and 502 Bad Gateway when
    /// the platform refused the action.
    #[error(transparent)]
    ModerationErr(#[from] ModerationError),

    /// Chat platform client error outside a moderation pipeline.
    ///
    /// Results in 502 Bad Gateway. Lookups of unknown guilds or members become
    /// `NotFound` instead, see the `From<PlatformError>` impl.
    #[error(transparent)]
    PlatformErr(PlatformError),

    /// Internal invariant violation, see `InternalError`.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error when
    /// Discord bot operations fail.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error while binding the dashboard listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

impl From<PlatformError> for AppError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::NotFound(msg) => AppError::NotFound(msg),
            err => AppError::PlatformErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, settings validation and invalid moderation input
/// - 403 Forbidden - For `AccessError::Forbidden` and `AccessError::NotOwner`
/// - 404 Not Found - For `NotFound` variant
/// - 502 Bad Gateway - For platform failures
/// - 503 Service Unavailable - For `AccessError::MaintenanceActive`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::AccessErr(AccessError::MaintenanceActive) => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "The bot is currently under maintenance. Please try again later.",
            ),
            Self::AccessErr(err) => {
                tracing::debug!("{}", err);
                error_response(StatusCode::FORBIDDEN, "Access Forbidden")
            }
            Self::SettingsErr(err) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
            Self::ModerationErr(
                err @ (ModerationError::ExternalActionFailed { .. }
                | ModerationError::PurgeFailed { .. }),
            ) => {
                tracing::warn!("{}", err);
                error_response(StatusCode::BAD_GATEWAY, err.to_string())
            }
            Self::ModerationErr(err) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
            Self::PlatformErr(err) => {
                tracing::warn!("{}", err);
                error_response(StatusCode::BAD_GATEWAY, "Discord request failed")
            }
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
