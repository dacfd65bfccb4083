use thiserror::Error;

/// Failures reported by the chat platform client.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The target could not be reached, e.g. a member who does not accept
    /// direct messages or a log channel that no longer exists.
    #[error("Target unreachable: {0}")]
    Unreachable(String),

    /// The platform refused the action, usually for missing bot permissions.
    #[error("Platform rejected the action: {0}")]
    Rejected(String),

    /// A looked-up guild, member or channel does not exist or is not visible to the bot.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Error returned by the Discord HTTP client.
    ///
    /// Boxed due to the size of `serenity::Error`.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

/// Whether Discord answered a request with 404, e.g. Unknown Guild or Unknown Member.
fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http) => http.status_code().map(|status| status.as_u16()) == Some(404),
        _ => false,
    }
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        if is_not_found(&err) {
            PlatformError::NotFound(err.to_string())
        } else {
            PlatformError::Discord(Box::new(err))
        }
    }
}
