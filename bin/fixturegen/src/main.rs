//! Fixture generator CLI for contract development.
//!
//! Computes deterministic deployment addresses (`CREATE`, `CREATE2`,
//! Starknet) and produces signed/unsigned RLP transaction payloads for test
//! fixtures. Each subcommand is a thin shell over the pure functions in
//! `deploy-fixtures`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
pub use cmd::*;

mod create;
mod starknet;
mod tx;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    MainCmd::parse().run().inspect_err(|err| tracing::error!(%err, "command failed"))
}
