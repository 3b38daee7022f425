use reqwest::StatusCode;
use thiserror::Error;

/// Failures while producing a response from upstream data.
///
/// Cache problems are deliberately absent: the cache store degrades to a
/// miss or a dropped write and never surfaces here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered outside the 2xx range.
    #[error("upstream API responded with {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    /// The request never produced a usable response (DNS, TLS, timeout).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered 2xx but the payload is not the shape we expect.
    #[error("malformed upstream data: {0}")]
    Malformed(String),
}
