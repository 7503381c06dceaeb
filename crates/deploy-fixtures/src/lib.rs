//! Deterministic deployment addresses and RLP transaction fixtures for
//! contract development.
//!
//! The crate is the computational core behind the `fixturegen` CLI. It covers
//! three address-derivation schemes and one fixture pipeline:
//!
//! - [`create::create_address`]: the EVM `CREATE` rule,
//!   `keccak256(rlp([deployer, nonce]))[12..]`.
//! - [`create::create2_address`]: the EVM `CREATE2` rule per EIP-1014.
//! - [`starknet::contract_address_from_hash`]: Starknet's Pedersen-based
//!   deployment address derivation.
//! - [`build_fixture`] / [`decode_signed_legacy`]: signed and unsigned RLP
//!   transaction payloads for test fixtures, including recovery of the
//!   signature parity bit from a legacy EIP-155 `v` value
//!   ([`y_parity_from_v`]).
//!
//! Every function is pure and synchronous: arguments in, value out. Console
//! interaction, environment loading and output formatting live in the CLI.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod create;

pub mod input;

pub mod starknet;

mod error;
pub use error::*;

mod signature;
pub use signature::*;

mod tx;
pub use tx::*;
