//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. It never reaches the screens: the repository
//! normalises it into an empty or unchanged value and logs it.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid configuration (e.g. a URL that is not http or https).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered but did not report success.
    #[error("API error from {endpoint}: message was \"{message}\"")]
    Api {
        /// URL that was requested.
        endpoint: String,
        /// Value of the `message` field.
        message: String,
    },

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
