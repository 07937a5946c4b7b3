//! Signature decoding
//!
//! Recursive-descent parser over the grammar
//!
//! ```text
//! signature   := identifier "(" [ type-list ] ")"
//! type-list   := type ( "," type )*
//! type        := base ( "[" [ digits ] "]" )*
//! base        := "uint" [ digits ] | "bool" | "string" | "address" | "(" type-list ")"
//! ```
//!
//! Empty list segments (`f(uint,,bool)`, trailing commas) are skipped.

use std::str::FromStr;

use crate::config::DecoderConfig;
use crate::error::{Result, SelectorError};
use crate::selector::{is_valid_identifier, FunctionSelector};
use crate::types::ParamType;

/// Signature decoder with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Get the decoder configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a full signature such as `transfer(address,uint256)`
    pub fn decode(&self, signature: &str) -> Result<FunctionSelector> {
        tracing::trace!(signature, "decoding function signature");

        let result = self.decode_inner(signature);
        if let Err(e) = &result {
            tracing::debug!(signature, error = %e, "signature decoding failed");
        }
        result
    }

    /// Decode a single type such as `uint8[4]`
    pub fn decode_type(&self, text: &str) -> Result<ParamType> {
        let mut cursor = Cursor::new(text, self.config.max_depth);
        let ty = cursor.parse_type(0)?;
        if !cursor.at_end() {
            return Err(SelectorError::UnsupportedType(text.to_string()));
        }
        Ok(ty)
    }

    fn decode_inner(&self, signature: &str) -> Result<FunctionSelector> {
        let format_error = || SelectorError::SignatureFormat(signature.to_string());

        let open = signature.find('(').ok_or_else(format_error)?;
        let name = &signature[..open];
        if !is_valid_identifier(name) || !signature.ends_with(')') {
            return Err(format_error());
        }

        let params = &signature[open + 1..signature.len() - 1];
        let mut cursor = Cursor::new(params, self.config.max_depth);
        let (types, _) = cursor.parse_list(0, false)?;

        Ok(FunctionSelector::new(name, types))
    }
}

/// Decode a signature with the default configuration
pub fn decode(signature: &str) -> Result<FunctionSelector> {
    Decoder::default().decode(signature)
}

/// Decode a single type with the default configuration
pub fn decode_type(text: &str) -> Result<ParamType> {
    Decoder::default().decode_type(text)
}

impl FromStr for ParamType {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        decode_type(s)
    }
}

impl FromStr for FunctionSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

/// Byte cursor over a type list. Every position it stops at is an ASCII
/// boundary, so slicing `input` there is always valid.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str, max_depth: usize) -> Self {
        Self {
            input,
            pos: 0,
            max_depth,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Parse a comma-separated list. `nested` lists are closed by `)`,
    /// top-level lists by end of input. Also returns the deepest item depth.
    fn parse_list(&mut self, level: usize, nested: bool) -> Result<(Vec<ParamType>, usize)> {
        let start = self.pos;
        let mut types = Vec::new();
        let mut depth = 0;

        loop {
            self.take_while(|b| b == b',');
            match self.peek() {
                None if !nested => return Ok((types, depth)),
                None => return Err(self.unsupported(start.saturating_sub(1))),
                Some(b')') if nested => {
                    self.pos += 1;
                    return Ok((types, depth));
                }
                _ => {}
            }

            let item_start = self.pos;
            let (ty, item_depth) = self.parse_type_with_depth(level)?;
            types.push(ty);
            depth = depth.max(item_depth);

            match self.peek() {
                Some(b',') | None => {}
                Some(b')') if nested => {}
                _ => return Err(self.unsupported(item_start)),
            }
        }
    }

    fn parse_type(&mut self, level: usize) -> Result<ParamType> {
        self.parse_type_with_depth(level).map(|(ty, _)| ty)
    }

    /// Parse one type nested `level` composites deep. Fails as soon as
    /// `level` plus the type's own depth would exceed `max_depth`.
    fn parse_type_with_depth(&mut self, level: usize) -> Result<(ParamType, usize)> {
        let start = self.pos;

        let (mut ty, mut depth) = match self.peek() {
            Some(b'(') => {
                if level >= self.max_depth {
                    return Err(SelectorError::DepthLimitExceeded(self.max_depth));
                }
                self.pos += 1;
                let (types, inner) = self.parse_list(level + 1, true)?;
                if types.is_empty() {
                    return Err(self.unsupported(start));
                }
                (ParamType::Tuple(types), inner + 1)
            }
            Some(b) if b.is_ascii_alphanumeric() => {
                let token = self.take_while(|b| b.is_ascii_alphanumeric());
                (parse_keyword(token)?, 0)
            }
            _ => return Err(self.unsupported(start)),
        };

        while self.peek() == Some(b'[') {
            if level + depth >= self.max_depth {
                return Err(SelectorError::DepthLimitExceeded(self.max_depth));
            }
            self.pos += 1;
            let len = self.take_while(|b| b != b']');
            if self.peek() != Some(b']') {
                return Err(self.unsupported(start));
            }
            self.pos += 1;

            ty = if len.is_empty() {
                ParamType::array(ty)
            } else {
                ParamType::fixed_array(ty, parse_decimal(len)?)
            };
            depth += 1;
        }

        Ok((ty, depth))
    }

    /// Unsupported-type error carrying the list segment starting at `start`
    fn unsupported(&self, start: usize) -> SelectorError {
        let bytes = self.input.as_bytes();
        let mut depth = 0usize;
        let mut end = start;
        while end < bytes.len() {
            match bytes[end] {
                b'(' => depth += 1,
                b')' if depth == 0 => break,
                b')' => depth -= 1,
                b',' if depth == 0 => break,
                _ => {}
            }
            end += 1;
        }
        SelectorError::UnsupportedType(self.input[start..end].to_string())
    }
}

fn parse_keyword(token: &str) -> Result<ParamType> {
    if let Some(rest) = token.strip_prefix("uint") {
        let bits = if rest.is_empty() {
            ParamType::DEFAULT_UINT_BITS
        } else {
            parse_decimal(rest)?
        };
        return Ok(ParamType::Uint(bits));
    }

    match token {
        "bool" => Ok(ParamType::Bool),
        "string" => Ok(ParamType::String),
        "address" => Ok(ParamType::Address),
        _ => Err(SelectorError::UnsupportedType(token.to_string())),
    }
}

/// Parse a non-empty run of ASCII digits; signs and whitespace are rejected
fn parse_decimal(digits: &str) -> Result<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SelectorError::MalformedInteger(digits.to_string()));
    }
    digits
        .parse()
        .map_err(|_| SelectorError::MalformedInteger(digits.to_string()))
}
