//! Errors raised while harvesting a collection or resolving its identifiers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request to upstream failed: {0}")]
    UpstreamFetch(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("OAI-PMH error {code}: {message}")]
    Protocol { code: String, message: String },

    /// The identifier did not split into `scheme:host:handle`.
    #[error("malformed identifier {identifier:?}: expected 3 colon-separated parts, found {parts}")]
    MalformedIdentifier { identifier: String, parts: usize },

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Errors caused by the remote service rather than by us or the data.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::UpstreamFetch(_)
                | Error::UpstreamStatus { .. }
                | Error::MalformedResponse { .. }
                | Error::Protocol { .. }
        )
    }
}
