//! # bach-selector
//!
//! Function signature parsing and canonical rendering for BachLedger contracts.
//!
//! A signature such as `transfer(address,uint256)` identifies a contract
//! entry point. This crate converts between that text and a typed
//! [`FunctionSelector`]:
//!
//! - **Decoding**: recursive-descent parsing of `name(type,...)` into
//!   [`ParamType`] trees
//! - **Encoding**: canonical rendering back to text (`uint` becomes `uint256`)
//!
//! ## Supported types
//!
//! | Text | Type |
//! |------|------|
//! | `uint`, `uint<N>` | [`ParamType::Uint`] (bare `uint` is 256 bits) |
//! | `bool` | [`ParamType::Bool`] |
//! | `string` | [`ParamType::String`] |
//! | `address` | [`ParamType::Address`] |
//! | `T[]` | [`ParamType::Array`] |
//! | `T[N]` | [`ParamType::FixedArray`] |
//! | `(T1,T2,...)` | [`ParamType::Tuple`] |
//!
//! ## Example
//!
//! ```rust
//! use bach_selector::{decode, encode, ParamType};
//!
//! let selector = decode("f(uint,bool[])").unwrap();
//! assert_eq!(selector.function, "f");
//! assert_eq!(
//!     selector.types,
//!     vec![ParamType::Uint(256), ParamType::array(ParamType::Bool)]
//! );
//! assert_eq!(encode(&selector), "f(uint256,bool[])");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod decode;
mod encode;
mod error;
mod selector;
mod types;

pub use config::{DecoderConfig, DEFAULT_MAX_DEPTH};
pub use decode::{decode, decode_type, Decoder};
pub use encode::{encode, encode_type};
pub use error::{Result, SelectorError};
pub use selector::{is_valid_identifier, FunctionSelector};
pub use types::ParamType;
