use clap::Parser;
use std::net::SocketAddr;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
#[command(version, about = crate::meta::DESCRIPTION)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:8000")]
    pub listen_address: SocketAddr,
    /// Used as the log filter when `RUST_LOG` isn't set.
    #[arg(long)]
    #[arg(default_value = "flow_puzzle_api=info")]
    pub log_level: String,
}
