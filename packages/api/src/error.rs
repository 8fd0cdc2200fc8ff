use thiserror::Error;

/// Why a directory batch could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection, CORS, bad URL).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The source answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
