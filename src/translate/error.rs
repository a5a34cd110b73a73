use thiserror::Error;

/// Errors produced by a translation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("translation request failed: {0}")]
    Request(String),

    /// The service answered with a non-success HTTP status.
    #[error("translation service returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The body was valid JSON but the service reported an error in it.
    #[error("translation service error {status}: {details}")]
    Service { status: u16, details: String },

    /// The body could not be decoded or lacked the translated text.
    #[error("translation response parse failed: {0}")]
    Parse(String),

    /// A translation task panicked or was cancelled.
    #[error("translation task aborted: {0}")]
    Task(String),
}
