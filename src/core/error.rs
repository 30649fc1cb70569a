use thiserror::Error;

/// Why the recipe document could not be turned into a record set.
///
/// Users only ever see the configured error message; the variant is for logs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with HTTP {0}")]
    Status(u16),

    #[error("malformed recipe document: {0}")]
    Decode(#[from] serde_json::Error),
}
