use thiserror::Error;

/// Failures reported by the HTTP collaborator.
///
/// Controllers never let one of these escape: every variant is folded into a
/// `QueryState::Failure` with the display string as the visible reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("Error: {status} - {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response (unreachable host, timeout,
    /// request could not be built).
    #[error("Network error: {0}")]
    Network(String),
    /// A 2xx reply whose body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Malformed(String),
}
