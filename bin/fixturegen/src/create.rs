//! `CREATE` and `CREATE2` address subcommands.

use clap::Parser;
use deploy_fixtures::{create, input};
use tracing::debug;

use crate::Error;

/// Default deployer, hardhat dev account 0.
const DEFAULT_DEPLOYER: &str = "0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266";

/// Default init code: a small counter contract, kept as the stock fixture.
const DEFAULT_INIT_CODE: &str = "0x6080604052348015600f57600080fd5b506004361060465760003560e01c806306661abd14604b578063371303c01460655780636d4ce63c14606d578063b3bcfa82146074575b600080fd5b605360005481565b60405190815260200160405180910390f35b606b607a565b005b6000546053565b606b6091565b6001600080828254608a919060b7565b9091555050565b6001600080828254608a919060cd565b634e487b7160e01b600052601160045260246000fd5b8082018082111560c75760c760a1565b92915050565b8181038181111560c75760c760a156fea2646970667358221220f379b9089b70e8e00da8545f9a86f648441fdf27ece9ade2c71653b12fb80c7964736f6c63430008120033";

/// Compute a CREATE deployment address
#[derive(Parser, Debug)]
pub struct CreateCmd {
    /// Deployer (sender) address
    #[arg(long, default_value = DEFAULT_DEPLOYER)]
    pub deployer: String,

    /// Deployer account nonce, decimal or 0x hex
    #[arg(long, default_value = "420")]
    pub nonce: String,
}

impl CreateCmd {
    /// Execute the create command.
    pub fn run(&self) -> Result<(), Error> {
        let deployer = input::parse_address("deployer", &self.deployer)?;
        let nonce = input::parse_u256("nonce", &self.nonce)?;
        debug!(%deployer, %nonce, "computing CREATE address");

        let address = create::create_address(deployer, nonce);
        println!("Generated Address: {address}");
        Ok(())
    }
}

/// Compute a CREATE2 deployment address
#[derive(Parser, Debug)]
pub struct Create2Cmd {
    /// Deployer (sender) address
    #[arg(long, default_value = DEFAULT_DEPLOYER)]
    pub deployer: String,

    /// Contract initialization code, hex
    #[arg(long, default_value = DEFAULT_INIT_CODE)]
    pub init_code: String,

    /// Deployment salt, hex; short values are left-padded to 32 bytes
    #[arg(long, default_value = "0xbeef")]
    pub salt: String,
}

impl Create2Cmd {
    /// Execute the create2 command.
    pub fn run(&self) -> Result<(), Error> {
        let deployer = input::parse_address("deployer", &self.deployer)?;
        let init_code = input::parse_bytes("init_code", &self.init_code)?;
        let salt = input::parse_salt("salt", &self.salt)?;
        debug!(%deployer, %salt, init_code_len = init_code.len(), "computing CREATE2 address");

        let address = create::create2_address(deployer, salt, &init_code);
        println!("Generated Address: {address}");
        Ok(())
    }
}
