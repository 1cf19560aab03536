use thiserror::Error;

/// Errors surfaced by [`crate::Client`].
///
/// The remote HTTP status is never inspected: application-level failures
/// (bad token, insufficient balance, unknown id) come back as ordinary JSON
/// bodies for the caller to interpret. Only input validation and transport
/// faults are modeled here.
#[derive(Debug, Error)]
pub enum Error {
    /// A conversation URL did not contain a parseable id after `convo=`.
    #[error("invalid conversation reference: {0:?}")]
    InvalidConversation(String),

    /// A message was sent with none of text / giphy id / imgur id.
    #[error("message has no content (expected text, giphy id, or imgur id)")]
    EmptyMessage,

    /// The bearer token contains bytes that cannot appear in an HTTP header.
    #[error("authorization token is not a valid header value")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// Transport failure or a response body that is not JSON.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
