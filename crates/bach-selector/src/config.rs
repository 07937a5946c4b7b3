//! Decoder configuration

/// Default limit on array/tuple nesting
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderConfig {
    /// Maximum nesting of composite types (arrays and tuples).
    /// A primitive sits at depth 0.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Create a config with the given nesting limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
