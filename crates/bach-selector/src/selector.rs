//! Function selector definition

use crate::types::ParamType;

/// A parsed or hand-built function signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSelector {
    /// Function name (e.g., "transfer")
    pub function: String,
    /// Parameter types in declaration order
    pub types: Vec<ParamType>,
    /// Return type. Never set by the decoder and never rendered by the encoder.
    pub returns: Option<ParamType>,
}

impl FunctionSelector {
    /// Create a selector with no return type
    pub fn new(function: impl Into<String>, types: Vec<ParamType>) -> Self {
        Self {
            function: function.into(),
            types,
            returns: None,
        }
    }

    /// Attach a return type
    pub fn with_returns(mut self, returns: ParamType) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Canonical signature text (e.g., "transfer(address,uint256)")
    pub fn signature(&self) -> String {
        crate::encode(self)
    }
}

/// Check `s` against `[A-Za-z_$][A-Za-z_$0-9]*`
pub fn is_valid_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if is_ident_start(b) => bytes.all(is_ident_continue),
        _ => false,
    }
}

pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

pub(crate) fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

// Serde implementation (behind feature flag): both types travel as canonical text
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for FunctionSelector {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for FunctionSelector {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }

    impl Serialize for ParamType {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ParamType {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }

}
