//! Error types for the fixture core.

use alloy_primitives::U256;

/// Errors produced by the computational core.
///
/// Both kinds are terminal for the computation attempt: inputs are
/// deterministic, so nothing is retried and nothing is substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input could not be turned into a well-formed argument
    /// (malformed hex, wrong byte width, unparseable integer, bad key
    /// material).
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// What failed while parsing or validating it.
        reason: String,
    },
    /// A legacy signature `v` value matches neither `2*chain_id + 35` nor
    /// `2*chain_id + 36` plus a parity bit, so it is not an EIP-155 style
    /// encoding for the given chain id.
    #[error("signature v value {v} is not an EIP-155 encoding for chain id {chain_id}")]
    InvalidSignatureValue {
        /// The legacy-encoded `v` value.
        v: U256,
        /// The chain id the value was checked against.
        chain_id: U256,
    },
}

impl Error {
    /// Creates an [`Error::InvalidInput`] for the given field.
    pub fn invalid_input(field: &'static str, reason: impl ToString) -> Self {
        Self::InvalidInput { field, reason: reason.to_string() }
    }
}
