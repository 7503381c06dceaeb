//! Deterministic deployment addresses for the EVM `CREATE` and `CREATE2`
//! schemes.

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_rlp::Encodable;

/// Computes the address of a contract deployed with `CREATE`:
/// `keccak256(rlp([deployer, nonce]))[12..]`.
///
/// The nonce is kept unbounded rather than narrowed to a machine integer; RLP
/// encodes it as a minimal big-endian integer regardless of width, so the
/// derivation agrees with the u64-nonce rule wherever both apply.
pub fn create_address(deployer: Address, nonce: U256) -> Address {
    let payload_length = deployer.length() + nonce.length();
    let mut buf = Vec::with_capacity(payload_length + 1);
    alloy_rlp::Header { list: true, payload_length }.encode(&mut buf);
    deployer.encode(&mut buf);
    nonce.encode(&mut buf);
    Address::from_slice(&keccak256(&buf)[12..])
}

/// Computes the address of a contract deployed with `CREATE2`, per EIP-1014:
/// `keccak256(0xff ++ deployer ++ salt ++ keccak256(init_code))[12..]`.
pub fn create2_address(deployer: Address, salt: B256, init_code: &[u8]) -> Address {
    let init_code_hash = keccak256(init_code);
    let mut buf = [0u8; 85];
    buf[0] = 0xff;
    buf[1..21].copy_from_slice(deployer.as_slice());
    buf[21..53].copy_from_slice(salt.as_slice());
    buf[53..85].copy_from_slice(init_code_hash.as_slice());
    Address::from_slice(&keccak256(buf)[12..])
}
