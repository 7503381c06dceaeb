//! Signed and unsigned RLP transaction payloads for test fixtures.
//!
//! Mirrors the fixture workflow of the original tooling: build a transaction
//! from a flat field set, sign it with a local key, and report every
//! intermediate artifact (unsigned payload, signing hash, signed payload,
//! signature parts). The flavor is a tagged selection made once upfront; each
//! variant's fields are validated when the transaction is materialized, not
//! interactively.

use alloy_consensus::{SignableTransaction, Signed, TxEip1559, TxEip2930, TxEnvelope, TxLegacy};
use alloy_eips::{
    eip2718::{Decodable2718, Encodable2718},
    eip2930::AccessList,
};
use alloy_primitives::{keccak256, Address, Bytes, PrimitiveSignature, TxKind, B256, U256};
use alloy_rlp::Decodable;
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use serde::Serialize;

use crate::{signature::y_parity_from_v, Error};

/// Transaction flavor, selected once upfront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxVariant {
    /// Legacy transaction with EIP-155 replay protection.
    Legacy,
    /// EIP-2930 access-list transaction (type 1).
    Eip2930,
    /// EIP-1559 dynamic-fee transaction (type 2).
    Eip1559,
}

/// The field set shared by every supported transaction flavor.
///
/// `gas_price` doubles as `max_fee_per_gas` for EIP-1559 fixtures, as in the
/// original tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureParams {
    /// Call target, or `TxKind::Create` for deployments.
    pub to: TxKind,
    /// Value in wei.
    pub value: U256,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas price in wei (max fee per gas for EIP-1559).
    pub gas_price: u128,
    /// Priority fee in wei; only consulted for EIP-1559.
    pub max_priority_fee_per_gas: u128,
    /// Account nonce.
    pub nonce: u64,
    /// Chain id embedded in the signature.
    pub chain_id: u64,
    /// Calldata (or init code for deployments).
    pub input: Bytes,
}

impl FixtureParams {
    fn build_legacy(&self) -> TxLegacy {
        TxLegacy {
            chain_id: Some(self.chain_id),
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            to: self.to,
            value: self.value,
            input: self.input.clone(),
        }
    }

    fn build_eip2930(&self) -> TxEip2930 {
        TxEip2930 {
            chain_id: self.chain_id,
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            to: self.to,
            value: self.value,
            access_list: AccessList::default(),
            input: self.input.clone(),
        }
    }

    fn build_eip1559(&self) -> TxEip1559 {
        TxEip1559 {
            chain_id: self.chain_id,
            nonce: self.nonce,
            gas_limit: self.gas_limit,
            max_fee_per_gas: self.gas_price,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            to: self.to,
            value: self.value,
            access_list: AccessList::default(),
            input: self.input.clone(),
        }
    }
}

/// Signature components as the fixture scripts report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignatureParts {
    /// ECDSA `r`.
    pub r: U256,
    /// ECDSA `s`.
    pub s: U256,
    /// The bit distinguishing the two candidate public keys.
    pub y_parity: bool,
}

/// A generated transaction fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxFixture {
    /// The flavor this fixture was built as.
    pub variant: TxVariant,
    /// Address of the signing key.
    pub signer: Address,
    /// The payload the signature commits to (type byte included for typed
    /// transactions; trailing `[chain_id, 0, 0]` fields for EIP-155 legacy).
    pub unsigned: Bytes,
    /// `keccak256` of the unsigned payload.
    pub signing_hash: B256,
    /// The EIP-2718 encoded signed transaction.
    pub signed: Bytes,
    /// Hash of the signed transaction.
    pub tx_hash: B256,
    /// Signature components.
    pub signature: SignatureParts,
}

/// Builds, signs and encodes a transaction fixture.
pub fn build_fixture(
    params: &FixtureParams,
    variant: TxVariant,
    signer: &PrivateKeySigner,
) -> Result<TxFixture, Error> {
    match variant {
        TxVariant::Legacy => sign_and_encode(params.build_legacy(), variant, signer),
        TxVariant::Eip2930 => sign_and_encode(params.build_eip2930(), variant, signer),
        TxVariant::Eip1559 => sign_and_encode(params.build_eip1559(), variant, signer),
    }
}

fn sign_and_encode<T>(
    tx: T,
    variant: TxVariant,
    signer: &PrivateKeySigner,
) -> Result<TxFixture, Error>
where
    T: SignableTransaction<PrimitiveSignature>,
    TxEnvelope: From<Signed<T>>,
{
    let mut unsigned = Vec::with_capacity(tx.payload_len_for_signature());
    tx.encode_for_signing(&mut unsigned);
    let signing_hash = keccak256(&unsigned);

    let sig = signer
        .sign_hash_sync(&signing_hash)
        .map_err(|err| Error::invalid_input("private_key", err))?;
    let signature = SignatureParts { r: sig.r(), s: sig.s(), y_parity: sig.v() };

    let envelope = TxEnvelope::from(tx.into_signed(sig));
    Ok(TxFixture {
        variant,
        signer: signer.address(),
        unsigned: unsigned.into(),
        signing_hash,
        signed: envelope.encoded_2718().into(),
        tx_hash: *envelope.tx_hash(),
        signature,
    })
}

/// A decoded signed legacy transaction, fields in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedLegacyParts {
    /// Account nonce.
    pub nonce: u64,
    /// Gas price in wei.
    pub gas_price: u128,
    /// Gas limit.
    pub gas_limit: u64,
    /// Call target; `None` for contract creation (empty `to` field).
    pub to: Option<Address>,
    /// Value in wei.
    pub value: U256,
    /// Calldata or init code.
    pub input: Bytes,
    /// Wire-encoded `v`, untouched.
    pub v: U256,
    /// ECDSA `r`.
    pub r: U256,
    /// ECDSA `s`.
    pub s: U256,
}

impl SignedLegacyParts {
    /// Recovers the parity bit from the wire `v` for the given chain id.
    pub fn y_parity(&self, chain_id: U256) -> Result<bool, Error> {
        y_parity_from_v(self.v, chain_id)
    }
}

/// Decodes a signed legacy transaction payload
/// `rlp([nonce, gasPrice, gasLimit, to, value, data, v, r, s])`.
///
/// The `v` field is returned as encoded; interpret it with
/// [`SignedLegacyParts::y_parity`].
pub fn decode_signed_legacy(rlp_bytes: &[u8]) -> Result<SignedLegacyParts, Error> {
    let mut buf = rlp_bytes;

    let header = alloy_rlp::Header::decode(&mut buf).map_err(rlp_err)?;
    if !header.list {
        return Err(Error::invalid_input("transaction", "expected an RLP list"));
    }

    let nonce = u64::decode(&mut buf).map_err(rlp_err)?;
    let gas_price = u128::decode(&mut buf).map_err(rlp_err)?;
    let gas_limit = u64::decode(&mut buf).map_err(rlp_err)?;

    // The `to` field is an empty string for contract creation.
    let to_raw = Bytes::decode(&mut buf).map_err(rlp_err)?;
    let to = match to_raw.len() {
        0 => None,
        20 => Some(Address::from_slice(&to_raw)),
        n => {
            return Err(Error::invalid_input("to", format!("expected 0 or 20 bytes, got {n}")));
        }
    };

    let value = U256::decode(&mut buf).map_err(rlp_err)?;
    let input = Bytes::decode(&mut buf).map_err(rlp_err)?;
    let v = U256::decode(&mut buf).map_err(rlp_err)?;
    let r = U256::decode(&mut buf).map_err(rlp_err)?;
    let s = U256::decode(&mut buf).map_err(rlp_err)?;

    Ok(SignedLegacyParts { nonce, gas_price, gas_limit, to, value, input, v, r, s })
}

/// Decodes any EIP-2718 payload (typed or legacy) into a consensus envelope.
pub fn decode_envelope(bytes: &[u8]) -> Result<TxEnvelope, Error> {
    TxEnvelope::decode_2718(&mut &bytes[..]).map_err(|err| Error::invalid_input("transaction", err))
}

fn rlp_err(err: alloy_rlp::Error) -> Error {
    Error::invalid_input("transaction", err)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, hex, uint};

    use super::*;

    // =========================================================================
    // Signed legacy fixtures generated with Foundry's `cast mktx`
    // =========================================================================

    /// The canonical CREATE2 factory deployment transaction (pre-EIP-155,
    /// v=27), signed by 0x3fab184622dc19b6109349b94811493bf2a45362.
    const CREATE2_FACTORY_TX: &[u8] = &hex!(
        "f8a58085174876e800830186a08080b853604580600e600039806000f350fe7fffffffffffffffff"
        "ffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f580"
        "15156039578182fd5b8082525050506014600cf31ba0222222222222222222222222222222222222"
        "2222222222222222222222222222a022222222222222222222222222222222222222222222222222"
        "22222222222222"
    );

    /// cast mktx ... --legacy --chain 1 --create 0x6080604052 (v = 0x26 = 38).
    const POST_EIP155_CHAIN_1_TX: &[u8] = &hex!(
        "f856808504a817c800830186a0808085608060405226a0fceb37453e90ac5ec2780748b7a4907b1d"
        "cfb87708697de2e6be19831938c77ba0224ee4c1aaa6a1490b4e3a1fbed7c5151668a12b6f6e3227"
        "c2692a64cf79e81f"
    );

    /// cast mktx ... --legacy --chain 1337 --create 0x6080604052 (v = 0x0a95).
    const POST_EIP155_CHAIN_1337_TX: &[u8] = &hex!(
        "f858808504a817c800830186a08080856080604052820a95a0bea22b3c93e686c12e09c4c5199192"
        "44bd710de249e2588b22cfb28a2d9ecc22a04b8d3598bae247ce8846aafa41fdaadff2e2154034f5"
        "789448bf263d905f20c3"
    );

    /// cast mktx ... --legacy 0x4242...4242 on chain 900 (v = 0x072b).
    const CALL_CHAIN_900_TX: &[u8] = &hex!(
        "f866808504a817c800825208944242424242424242424242424242424242424242808082072ba094"
        "a1d148b08c268261581dd9e90478bae0c937e26eec574809876bdd34de82daa03e2fb4dd2cb99703"
        "feeb0da3c3a1062a047f0091aa09610c3a7feecfda6f6bad"
    );

    /// Hardhat dev account 0.
    const SIGNER_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn params() -> FixtureParams {
        FixtureParams {
            to: TxKind::Call(address!("70997970c51812dc3a010c7d01b50e0d17dc79c8")),
            value: U256::from(1_000_000_000u64),
            gas_limit: 21_000,
            gas_price: 20_000_000_000,
            max_priority_fee_per_gas: 1_000_000_000,
            nonce: 7,
            chain_id: 1337,
            input: Bytes::default(),
        }
    }

    #[test]
    fn decode_create2_factory_deployment() {
        let parts = decode_signed_legacy(CREATE2_FACTORY_TX).expect("should decode");
        assert_eq!(parts.nonce, 0);
        assert_eq!(parts.gas_price, 100_000_000_000);
        assert_eq!(parts.gas_limit, 100_000);
        assert_eq!(parts.to, None);
        assert_eq!(parts.value, U256::ZERO);
        assert_eq!(parts.v, U256::from(27));
        assert_eq!(
            parts.r,
            uint!(0x2222222222222222222222222222222222222222222222222222222222222222_U256)
        );
        assert_eq!(parts.r, parts.s);
        // Pre-EIP-155 v values carry no chain id and are rejected by the
        // EIP-155 reverse mapping.
        assert!(matches!(parts.y_parity(U256::ZERO), Err(Error::InvalidSignatureValue { .. })));
    }

    #[test]
    fn decode_recovers_parity_for_chain_1() {
        let parts = decode_signed_legacy(POST_EIP155_CHAIN_1_TX).expect("should decode");
        assert_eq!(parts.to, None);
        assert_eq!(parts.input, Bytes::from(hex!("6080604052")));
        assert_eq!(parts.v, U256::from(38));
        assert_eq!(parts.y_parity(U256::from(1)), Ok(true));
    }

    #[test]
    fn decode_recovers_parity_for_chain_1337() {
        let parts = decode_signed_legacy(POST_EIP155_CHAIN_1337_TX).expect("should decode");
        assert_eq!(parts.v, U256::from(2709));
        assert_eq!(parts.y_parity(U256::from(1337)), Ok(false));
        // The wrong chain id yields no consistent parity.
        assert!(parts.y_parity(U256::from(1)).is_err());
    }

    #[test]
    fn decode_call_transaction() {
        let parts = decode_signed_legacy(CALL_CHAIN_900_TX).expect("should decode");
        assert_eq!(parts.to, Some(address!("4242424242424242424242424242424242424242")));
        assert_eq!(parts.gas_limit, 21_000);
        assert_eq!(parts.y_parity(U256::from(900)), Ok(false));
    }

    #[test]
    fn decode_rejects_malformed_rlp() {
        assert!(decode_signed_legacy(&hex!("deadbeef")).is_err());
        assert!(decode_signed_legacy(&[]).is_err());
        let truncated = &CREATE2_FACTORY_TX[..CREATE2_FACTORY_TX.len() - 10];
        assert!(decode_signed_legacy(truncated).is_err());
    }

    #[test]
    fn legacy_fixture_round_trips() {
        let signer: PrivateKeySigner = SIGNER_KEY.parse().unwrap();
        let fixture = build_fixture(&params(), TxVariant::Legacy, &signer).unwrap();

        assert_eq!(fixture.signer, address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert_eq!(fixture.signing_hash, keccak256(&fixture.unsigned));

        let parts = decode_signed_legacy(&fixture.signed).expect("should decode own output");
        assert_eq!(parts.nonce, 7);
        assert_eq!(parts.gas_price, 20_000_000_000);
        assert_eq!(parts.gas_limit, 21_000);
        assert_eq!(parts.to, Some(address!("70997970c51812dc3a010c7d01b50e0d17dc79c8")));
        assert_eq!(parts.value, U256::from(1_000_000_000u64));
        assert_eq!(parts.r, fixture.signature.r);
        assert_eq!(parts.s, fixture.signature.s);
        // The wire v re-derives the parity bit the signer produced.
        assert_eq!(parts.y_parity(U256::from(1337)), Ok(fixture.signature.y_parity));
    }

    #[test]
    fn legacy_fixture_recovers_signer() {
        let signer: PrivateKeySigner = SIGNER_KEY.parse().unwrap();
        let fixture = build_fixture(&params(), TxVariant::Legacy, &signer).unwrap();

        let envelope = decode_envelope(&fixture.signed).expect("should decode");
        let TxEnvelope::Legacy(signed) = envelope else {
            panic!("expected a legacy envelope");
        };
        assert_eq!(signed.recover_signer().unwrap(), signer.address());
        assert_eq!(signed.tx().chain_id, Some(1337));
    }

    #[test]
    fn eip1559_fixture_round_trips() {
        let signer: PrivateKeySigner = SIGNER_KEY.parse().unwrap();
        let fixture = build_fixture(&params(), TxVariant::Eip1559, &signer).unwrap();

        // Typed payloads lead with their type byte, both unsigned and signed.
        assert_eq!(fixture.unsigned[0], 0x02);
        assert_eq!(fixture.signed[0], 0x02);

        let envelope = decode_envelope(&fixture.signed).expect("should decode");
        assert_eq!(envelope.encoded_2718(), fixture.signed.to_vec());
        let TxEnvelope::Eip1559(signed) = envelope else {
            panic!("expected an eip1559 envelope");
        };
        assert_eq!(signed.tx().max_fee_per_gas, 20_000_000_000);
        assert_eq!(signed.tx().max_priority_fee_per_gas, 1_000_000_000);
        assert_eq!(signed.signature().r(), fixture.signature.r);
        assert_eq!(signed.signature().v(), fixture.signature.y_parity);
        assert_eq!(signed.recover_signer().unwrap(), signer.address());
    }

    #[test]
    fn eip2930_fixture_round_trips() {
        let signer: PrivateKeySigner = SIGNER_KEY.parse().unwrap();
        let fixture = build_fixture(&params(), TxVariant::Eip2930, &signer).unwrap();

        assert_eq!(fixture.unsigned[0], 0x01);
        assert_eq!(fixture.signed[0], 0x01);

        let envelope = decode_envelope(&fixture.signed).expect("should decode");
        let TxEnvelope::Eip2930(signed) = envelope else {
            panic!("expected an eip2930 envelope");
        };
        assert_eq!(signed.tx().gas_price, 20_000_000_000);
        assert!(signed.tx().access_list.0.is_empty());
        assert_eq!(signed.recover_signer().unwrap(), signer.address());
    }

    #[test]
    fn variants_sign_distinct_payloads() {
        let signer: PrivateKeySigner = SIGNER_KEY.parse().unwrap();
        let legacy = build_fixture(&params(), TxVariant::Legacy, &signer).unwrap();
        let eip2930 = build_fixture(&params(), TxVariant::Eip2930, &signer).unwrap();
        let eip1559 = build_fixture(&params(), TxVariant::Eip1559, &signer).unwrap();
        assert_ne!(legacy.signing_hash, eip2930.signing_hash);
        assert_ne!(eip2930.signing_hash, eip1559.signing_hash);
        assert_ne!(legacy.tx_hash, eip1559.tx_hash);
    }
}
