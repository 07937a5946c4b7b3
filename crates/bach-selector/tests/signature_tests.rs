//! Signature decode/encode integration tests for bach-selector
//!
//! Tests the public decode and encode API against canonical and
//! non-canonical signatures.

use bach_selector::{
    decode, decode_type, encode, Decoder, DecoderConfig, FunctionSelector, ParamType,
    SelectorError,
};

// ==================== Decode Tests ====================

#[test]
fn test_decode_multi_arg() {
    let selector = decode("bark(uint256,bool)").unwrap();
    assert_eq!(selector.function, "bark");
    assert_eq!(selector.types, vec![ParamType::Uint(256), ParamType::Bool]);
    assert_eq!(selector.returns, None);
}

#[test]
fn test_decode_zero_args() {
    let selector = decode("rollover()").unwrap();
    assert_eq!(selector.function, "rollover");
    assert!(selector.types.is_empty());
    assert_eq!(encode(&selector), "rollover()");
}

#[test]
fn test_decode_dynamic_array() {
    let selector = decode("pet(address[])").unwrap();
    assert_eq!(selector.types, vec![ParamType::array(ParamType::Address)]);
}

#[test]
fn test_decode_fixed_array() {
    let selector = decode("paw(string[2])").unwrap();
    assert_eq!(
        selector.types,
        vec![ParamType::fixed_array(ParamType::String, 2)]
    );
    assert_eq!(encode(&selector), "paw(string[2])");
}

#[test]
fn test_decode_simple_tuple() {
    let selector = decode("shake((string))").unwrap();
    assert_eq!(
        selector.types,
        vec![ParamType::Tuple(vec![ParamType::String])]
    );
    assert_eq!(encode(&selector), "shake((string))");
}

#[test]
fn test_decode_identifier_characters() {
    let selector = decode("$_mint2(address)").unwrap();
    assert_eq!(selector.function, "$_mint2");
}

#[test]
fn test_decode_skips_empty_segments() {
    let selector = decode("f(uint8,,bool,)").unwrap();
    assert_eq!(selector.types, vec![ParamType::Uint(8), ParamType::Bool]);
}

// ==================== Canonicalization Tests ====================

#[test]
fn test_default_uint_size() {
    let selector = decode("f(uint,bool)").unwrap();
    assert_eq!(selector.types, vec![ParamType::Uint(256), ParamType::Bool]);
    assert_eq!(encode(&selector), "f(uint256,bool)");
}

#[test]
fn test_default_uint_size_nested() {
    let selector = decode("f((uint,uint[])[3])").unwrap();
    assert_eq!(encode(&selector), "f((uint256,uint256[])[3])");
}

#[test]
fn test_round_trip_canonical() {
    let signatures = [
        "transfer(address,uint256)",
        "balanceOf(address)",
        "totalSupply()",
        "paw(string[2])",
        "pet(address[])",
        "shake((string))",
        "shake((string,uint8),bool)",
        "batch((address,uint256)[],bool[4][])",
    ];

    for signature in signatures {
        let selector = decode(signature).unwrap();
        assert_eq!(encode(&selector), signature);
        assert_eq!(selector.to_string(), signature);
    }
}

#[test]
fn test_encode_hand_built_selector() {
    let selector = FunctionSelector::new(
        "approve",
        vec![ParamType::Address, ParamType::Uint(256)],
    )
    .with_returns(ParamType::Bool);
    assert_eq!(encode(&selector), "approve(address,uint256)");
    assert_eq!(selector.signature(), "approve(address,uint256)");
}

// ==================== Error Tests ====================

#[test]
fn test_unsupported_type() {
    assert_eq!(
        decode_type("bytes32"),
        Err(SelectorError::UnsupportedType("bytes32".to_string()))
    );
    assert_eq!(
        decode("f(int256)"),
        Err(SelectorError::UnsupportedType("int256".to_string()))
    );
}

#[test]
fn test_malformed_signature() {
    assert_eq!(
        decode("not_a_signature"),
        Err(SelectorError::SignatureFormat("not_a_signature".to_string()))
    );
    assert!(matches!(
        decode("transfer(address"),
        Err(SelectorError::SignatureFormat(_))
    ));
    assert!(matches!(decode(""), Err(SelectorError::SignatureFormat(_))));
}

#[test]
fn test_malformed_integer() {
    assert_eq!(
        decode("f(uint8a)"),
        Err(SelectorError::MalformedInteger("8a".to_string()))
    );
    assert_eq!(
        decode("f(bool[2x])"),
        Err(SelectorError::MalformedInteger("2x".to_string()))
    );
}

#[test]
fn test_custom_depth_limit() {
    let decoder = Decoder::new(DecoderConfig::with_max_depth(1));
    assert!(decoder.decode("f(bool[],(uint))").is_ok());
    assert_eq!(
        decoder.decode("f((bool[]))"),
        Err(SelectorError::DepthLimitExceeded(1))
    );
}

#[test]
fn test_array_suffix_chain_depth_limit() {
    let decoder = Decoder::new(DecoderConfig::with_max_depth(3));
    assert!(decoder.decode("f(uint8[1][2][3])").is_ok());
    assert_eq!(
        decoder.decode("f(uint8[1][2][3][4])"),
        Err(SelectorError::DepthLimitExceeded(3))
    );
    assert!(decoder.decode("f(bool,((address[][])))").is_err());
    assert!(decoder.decode("f(bool,((address[])))").is_ok());
}

#[test]
fn test_long_array_suffix_chain_is_rejected() {
    let text = format!("f(address{})", "[]".repeat(500_000));
    assert_eq!(
        decode(&text),
        Err(SelectorError::DepthLimitExceeded(bach_selector::DEFAULT_MAX_DEPTH))
    );
}
