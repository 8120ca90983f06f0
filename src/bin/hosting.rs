//! hosting Server Binary
//!
//! Runs the REST server configured entirely from the environment.

use holdem_calc::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    let config = equity::Config::from_env();
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| hosting::BIND_ADDR.to_string());
    pool(config.workers)?;
    hosting::Server::run(config, bind).await?;
    Ok(())
}
