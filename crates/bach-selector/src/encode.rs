//! Canonical signature encoding

use std::fmt;

use crate::selector::FunctionSelector;
use crate::types::ParamType;

/// Render a selector as canonical signature text
///
/// The return type, if any, is not part of the signature.
pub fn encode(selector: &FunctionSelector) -> String {
    tracing::trace!(
        function = %selector.function,
        params = selector.types.len(),
        "encoding function signature"
    );
    selector.to_string()
}

/// Render a single type as canonical text
pub fn encode_type(param_type: &ParamType) -> String {
    param_type.to_string()
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[ParamType]) -> fmt::Result {
    f.write_str("(")?;
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", ty)?;
    }
    f.write_str(")")
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Bool => f.write_str("bool"),
            ParamType::String => f.write_str("string"),
            ParamType::Address => f.write_str("address"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, len) => write!(f, "{}[{}]", inner, len),
            ParamType::Tuple(types) => write_list(f, types),
        }
    }
}

impl fmt::Display for FunctionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.function)?;
        write_list(f, &self.types)
    }
}
