//! Selector error types

use thiserror::Error;

/// Error raised while decoding a signature or a type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Text does not have the `name(...)` shape
    #[error("invalid signature format: {0:?}")]
    SignatureFormat(String),

    /// Type token matches none of the recognized forms
    #[error("unsupported type: {0:?}")]
    UnsupportedType(String),

    /// Bit size or array length is not a clean decimal digit run
    #[error("malformed integer: {0:?}")]
    MalformedInteger(String),

    /// Type nesting is deeper than the decoder allows
    #[error("type nesting exceeds maximum depth of {0}")]
    DepthLimitExceeded(usize),
}

/// Selector result type
pub type Result<T> = std::result::Result<T, SelectorError>;
