use thiserror::Error;

/// Errors returned by [`crate::PortfolioClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 404; `message` is the server's explanation.
    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("unexpected HTTP status {status} from {url}: {message}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        message: String,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
