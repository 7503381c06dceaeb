//! Transaction fixture subcommand.

use alloy_primitives::{hex, TxKind, U256};
use clap::Parser;
use deploy_fixtures::{build_fixture, decode_signed_legacy, input, FixtureParams, TxVariant};
use tracing::debug;

use crate::Error;

/// Transaction flavor flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TxType {
    /// Legacy transaction with EIP-155 replay protection
    Legacy,
    /// EIP-2930 access-list transaction (type 1)
    Eip2930,
    /// EIP-1559 dynamic-fee transaction (type 2)
    Eip1559,
}

impl From<TxType> for TxVariant {
    fn from(value: TxType) -> Self {
        match value {
            TxType::Legacy => Self::Legacy,
            TxType::Eip2930 => Self::Eip2930,
            TxType::Eip1559 => Self::Eip1559,
        }
    }
}

/// Build signed and unsigned RLP transaction fixtures
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Transaction flavor
    #[arg(long, value_enum, default_value_t = TxType::Legacy)]
    pub tx_type: TxType,

    /// Target address; omit for a contract creation
    #[arg(long)]
    pub to: Option<String>,

    /// Value in wei, decimal or 0x hex
    #[arg(long, default_value = "0")]
    pub value: String,

    /// Gas limit
    #[arg(long, default_value_t = 100_000)]
    pub gas_limit: u64,

    /// Gas price in wei (max fee per gas for EIP-1559)
    #[arg(long, default_value_t = 20_000_000_000)]
    pub gas_price: u128,

    /// Priority fee in wei, EIP-1559 only
    #[arg(long, default_value_t = 0)]
    pub max_priority_fee_per_gas: u128,

    /// Account nonce
    #[arg(long, default_value_t = 0)]
    pub nonce: u64,

    /// Chain id embedded in the signature
    #[arg(long, default_value_t = 1)]
    pub chain_id: u64,

    /// Calldata (or init code), hex
    #[arg(long, default_value = "0x")]
    pub data: String,

    /// Signing key, hex; read from the environment by default
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Emit the fixture as pretty-printed JSON instead of sections
    #[arg(long)]
    pub json: bool,
}

impl Cmd {
    /// Execute the tx command.
    pub fn run(&self) -> Result<(), Error> {
        let signer = input::parse_private_key(&self.private_key)?;
        let to = match &self.to {
            Some(to) => TxKind::Call(input::parse_address("to", to)?),
            None => TxKind::Create,
        };
        let params = FixtureParams {
            to,
            value: input::parse_u256("value", &self.value)?,
            gas_limit: self.gas_limit,
            gas_price: self.gas_price,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            nonce: self.nonce,
            chain_id: self.chain_id,
            input: input::parse_bytes("data", &self.data)?,
        };
        let variant = TxVariant::from(self.tx_type);
        debug!(?variant, chain_id = self.chain_id, nonce = self.nonce, "building fixture");

        let fixture = build_fixture(&params, variant, &signer)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&fixture)?);
            return Ok(());
        }

        println!("wallet address: {}", fixture.signer);
        println!();
        println!("=== Unsigned ===");
        println!("rlp:          {}", fixture.unsigned);
        println!("signing hash: {}", fixture.signing_hash);
        println!();
        println!("=== Signed ===");
        println!("rlp:     {}", fixture.signed);
        println!("tx hash: {}", fixture.tx_hash);
        println!();
        println!("=== Signature ===");
        println!("r:        {:#x}", fixture.signature.r);
        println!("s:        {:#x}", fixture.signature.s);
        println!("y parity: {}", fixture.signature.y_parity);

        // For legacy fixtures, walk our own signed payload back apart the way
        // the original tooling prints its decoded RLP, re-deriving the parity
        // bit from the wire v.
        if variant == TxVariant::Legacy {
            let parts = decode_signed_legacy(&fixture.signed)?;
            println!();
            println!("=== Decoded legacy payload ===");
            println!("nonce:     {}", parts.nonce);
            println!("gas price: {}", parts.gas_price);
            println!("gas limit: {}", parts.gas_limit);
            match parts.to {
                Some(to) => println!("to:        {to}"),
                None => println!("to:        (contract creation)"),
            }
            println!("value:     {}", parts.value);
            println!("data:      0x{}", hex::encode(&parts.input));
            println!("v:         {}", parts.v);
            println!("y parity:  {}", parts.y_parity(U256::from(self.chain_id))?);
        }

        Ok(())
    }
}
