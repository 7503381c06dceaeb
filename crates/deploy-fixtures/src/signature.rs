//! Recovery of the y-parity bit from legacy EIP-155 signature encodings.

use alloy_primitives::U256;

use crate::Error;

/// Recovers the y-parity bit from a legacy-encoded signature `v` value.
///
/// The forward rule is `v = 2*chain_id + 35 + y_parity`. Some encoders emit
/// an off-by-one `+36` base, so both candidates are checked, strictly in that
/// order; the candidate ranges are disjoint, so the first match is
/// unambiguous.
///
/// Fails with [`Error::InvalidSignatureValue`] when `v` matches neither
/// candidate, which also covers pre-EIP-155 values like 27/28.
pub fn y_parity_from_v(v: U256, chain_id: U256) -> Result<bool, Error> {
    for offset in [35u64, 36] {
        let Some(base) = chain_id
            .checked_mul(U256::from(2))
            .and_then(|doubled| doubled.checked_add(U256::from(offset)))
        else {
            // No representable v can sit above an overflowing base.
            continue;
        };
        if let Some(candidate) = v.checked_sub(base) {
            if candidate <= U256::from(1) {
                return Ok(candidate == U256::from(1));
            }
        }
    }
    Err(Error::InvalidSignatureValue { v, chain_id })
}
