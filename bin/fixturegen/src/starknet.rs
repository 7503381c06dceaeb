//! Starknet deployment address subcommand.

use clap::Parser;
use deploy_fixtures::{input, starknet};
use tracing::debug;

use crate::Error;

/// Compute a Starknet deployment address
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Declared class hash of the contract, decimal or 0x hex
    #[arg(long)]
    pub class_hash: String,

    /// Deployment salt, decimal or 0x hex
    #[arg(long, default_value = "0x65766d5f61646472657373")]
    pub salt: String,

    /// Deployer contract address, decimal or 0x hex
    #[arg(long, default_value = "0x7753aaa1814b9f978fd93b66453ae87419b66d764fbf9313847edeb0283ef63")]
    pub deployer: String,

    /// Constructor calldata field elements; defaults to [deployer, salt]
    #[arg(long, value_delimiter = ',')]
    pub calldata: Vec<String>,
}

impl Cmd {
    /// Execute the starknet command.
    pub fn run(&self) -> Result<(), Error> {
        let class_hash = input::parse_felt("class_hash", &self.class_hash)?;
        let salt = input::parse_felt("salt", &self.salt)?;
        let deployer = input::parse_felt("deployer", &self.deployer)?;
        let calldata = if self.calldata.is_empty() {
            vec![deployer, salt]
        } else {
            self.calldata
                .iter()
                .map(|element| input::parse_felt("calldata", element))
                .collect::<Result<_, _>>()?
        };
        debug!(%class_hash, %salt, %deployer, calldata_len = calldata.len(), "computing deployment address");

        let address = starknet::contract_address_from_hash(salt, class_hash, &calldata, deployer);
        println!("Pre-computed Starknet Address: {address:#x}");
        Ok(())
    }
}
