//! Fallible construction of core argument types from user-facing strings.
//!
//! The computational functions take fully-formed typed arguments and cannot
//! observe malformed input themselves; every [`Error::InvalidInput`] in the
//! system originates here.

use alloy_primitives::{hex, Address, Bytes, B256, U256};
use alloy_signer_local::PrivateKeySigner;
use starknet_types_core::felt::Felt;

use crate::Error;

/// Parses a 20-byte hex address, with or without `0x` prefix.
pub fn parse_address(field: &'static str, s: &str) -> Result<Address, Error> {
    s.parse::<Address>().map_err(|err| Error::invalid_input(field, err))
}

/// Parses a hex byte string of arbitrary length, with or without `0x` prefix.
pub fn parse_bytes(field: &'static str, s: &str) -> Result<Bytes, Error> {
    hex::decode(s).map(Into::into).map_err(|err| Error::invalid_input(field, err))
}

/// Parses a 32-byte salt. Shorter hex inputs are left-padded with zeros, the
/// way the original tooling treats short salts like `0xbeef`; longer inputs
/// are rejected.
pub fn parse_salt(field: &'static str, s: &str) -> Result<B256, Error> {
    let raw = hex::decode(s).map_err(|err| Error::invalid_input(field, err))?;
    if raw.len() > 32 {
        return Err(Error::invalid_input(
            field,
            format!("expected at most 32 bytes, got {}", raw.len()),
        ));
    }
    Ok(B256::left_padding_from(&raw))
}

/// Parses an unbounded non-negative integer, decimal or `0x` hex.
pub fn parse_u256(field: &'static str, s: &str) -> Result<U256, Error> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => U256::from_str_radix(digits, 16),
        None => U256::from_str_radix(s, 10),
    };
    parsed.map_err(|err| Error::invalid_input(field, err))
}

/// Parses a Starknet field element, decimal or `0x` hex. Mirrors the loose
/// `BigInt(input)` acceptance of the original script.
pub fn parse_felt(field: &'static str, s: &str) -> Result<Felt, Error> {
    let parsed = if s.starts_with("0x") || s.starts_with("0X") {
        Felt::from_hex(s)
    } else {
        Felt::from_dec_str(s)
    };
    parsed.map_err(|err| Error::invalid_input(field, err))
}

/// Parses a secp256k1 private key into a local signer.
pub fn parse_private_key(s: &str) -> Result<PrivateKeySigner, Error> {
    s.trim().parse::<PrivateKeySigner>().map_err(|err| Error::invalid_input("private_key", err))
}
