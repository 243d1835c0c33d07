//! Unified error types for ClaimSeal.
//! Used by: config, token, callers mapping rejections to 401-equivalents.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("unsupported token header: {0}")]
    UnsupportedHeader(String),

    #[error("no signing secret configured")]
    MissingSecret,

    #[error("claims serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
