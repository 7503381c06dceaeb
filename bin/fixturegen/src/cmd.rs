use clap::Parser;

/// Main command enumeration for the fixturegen CLI.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true, version)]
pub enum MainCmd {
    /// Compute a CREATE deployment address
    Create(crate::create::CreateCmd),
    /// Compute a CREATE2 deployment address
    Create2(crate::create::Create2Cmd),
    /// Compute a Starknet deployment address
    Starknet(crate::starknet::Cmd),
    /// Build signed and unsigned RLP transaction fixtures
    Tx(crate::tx::Cmd),
}

/// Error types for the fixturegen CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Core computation or input error
    #[error("{0}")]
    Fixtures(#[from] deploy_fixtures::Error),
    /// Output serialization error
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl MainCmd {
    /// Execute the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Create(cmd) => cmd.run(),
            Self::Create2(cmd) => cmd.run(),
            Self::Starknet(cmd) => cmd.run(),
            Self::Tx(cmd) => cmd.run(),
        }
    }
}
