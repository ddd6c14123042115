//! Typed errors for connection-URL parsing.
//!
//! The options-mapping form is statically typed and cannot fail; everything
//! here comes out of the URL path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The connection URL did not parse at all.
    #[error("invalid connection URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL scheme is not one this client speaks.
    #[error("unsupported scheme {scheme:?} (expected \"tcp\" or \"tls\")")]
    UnsupportedScheme { scheme: String },
    /// A known query parameter carried a value that does not parse as its
    /// expected type (e.g. `connect_timeout_ms=soon`).
    #[error("invalid value {value:?} for URL parameter {key:?}")]
    InvalidParam { key: &'static str, value: String },
}
