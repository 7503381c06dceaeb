//! Starknet hash-based deployment addresses.
//!
//! The derivation is the protocol's `CREATE2` analogue: a Pedersen hash chain
//! over a domain prefix, the deployer, the salt, the declared class hash and
//! the constructor calldata hash, reduced into the address space. The domain
//! constants and the field modulus are fixed by the Starknet specification,
//! not by this tool.

use alloy_primitives::U256;
use starknet_crypto::pedersen_hash;
use starknet_types_core::felt::Felt;

/// `"STARKNET_CONTRACT_ADDRESS"` interpreted as a big-endian field element.
const CONTRACT_ADDRESS_PREFIX: &str = "0x535441524b4e45545f434f4e54524143545f41444452455353";

/// Upper bound of the Starknet address space, `2^251 - 256`.
const ADDR_BOUND: U256 =
    U256::from_limbs([0xffffffffffffff00, u64::MAX, u64::MAX, 0x07ffffffffffffff]);

/// Starknet's `compute_hash_on_elements`: a Pedersen fold seeded with zero and
/// terminated by the element count. Order-sensitive by construction.
pub fn compute_hash_on_elements(elements: &[Felt]) -> Felt {
    let folded = elements.iter().fold(Felt::ZERO, |acc, element| pedersen_hash(&acc, element));
    pedersen_hash(&folded, &Felt::from(elements.len() as u64))
}

/// Computes the deployment address of a contract class:
///
/// ```text
/// h([PREFIX, deployer, salt, class_hash, h(constructor_calldata)]) mod 2^251 - 256
/// ```
///
/// where `h` is [`compute_hash_on_elements`]. Argument order follows
/// starknet.js' `calculateContractAddressFromHash`.
pub fn contract_address_from_hash(
    salt: Felt,
    class_hash: Felt,
    constructor_calldata: &[Felt],
    deployer: Felt,
) -> Felt {
    let prefix = Felt::from_hex_unchecked(CONTRACT_ADDRESS_PREFIX);
    let raw = compute_hash_on_elements(&[
        prefix,
        deployer,
        salt,
        class_hash,
        compute_hash_on_elements(constructor_calldata),
    ]);
    normalize_address(raw)
}

/// Reduces a raw hash into the address space.
fn normalize_address(raw: Felt) -> Felt {
    let reduced = U256::from_be_bytes(raw.to_bytes_be()) % ADDR_BOUND;
    Felt::from_bytes_be(&reduced.to_be_bytes::<32>())
}
