//! Parameter type definitions

/// Parameter type of a function signature
///
/// Trees are owned top-down; composite variants box or own their elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Unsigned integer with bit size (bare `uint` is 256)
    Uint(usize),
    /// Boolean
    Bool,
    /// UTF-8 string
    String,
    /// Address
    Address,
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array
    FixedArray(Box<ParamType>, usize),
    /// Tuple
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Bit size used when `uint` carries no suffix
    pub const DEFAULT_UINT_BITS: usize = 256;

    /// Create a dynamic array of `inner`
    pub fn array(inner: ParamType) -> Self {
        ParamType::Array(Box::new(inner))
    }

    /// Create a fixed-size array of `inner`
    pub fn fixed_array(inner: ParamType, len: usize) -> Self {
        ParamType::FixedArray(Box::new(inner), len)
    }

    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(types) => types.iter().any(|t| t.is_dynamic()),
            ParamType::Uint(_) | ParamType::Bool | ParamType::Address => false,
        }
    }

    /// Check if this is a leaf type
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            ParamType::Uint(_) | ParamType::Bool | ParamType::String | ParamType::Address
        )
    }

    /// Check if this type contains element types
    pub fn is_composite(&self) -> bool {
        !self.is_primitive()
    }

    /// Nesting depth of composite types; primitives are 0
    pub fn depth(&self) -> usize {
        match self {
            ParamType::Array(inner) | ParamType::FixedArray(inner, _) => 1 + inner.depth(),
            ParamType::Tuple(types) => 1 + types.iter().map(|t| t.depth()).max().unwrap_or(0),
            _ => 0,
        }
    }
}
