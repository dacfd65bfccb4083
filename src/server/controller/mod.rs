//! HTTP request handlers of the dashboard API.
//!
//! Handlers check access through `AuthGuard`, convert request bodies into domain
//! parameters, call the service layer and convert the result back into DTOs.

pub mod admin;
pub mod auth;
pub mod guild;
pub mod settings;
