//! holdem Command Line Binary
//!
//! Equity and showdown calculations from the terminal, or the REST server
//! via the `serve` subcommand.

use clap::Parser;
use holdem_calc::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    cli::Args::parse().run().await
}
