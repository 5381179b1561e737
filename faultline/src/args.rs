use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Faultline member API
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "HTTP service resolving handler faults into structured error responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "faultline.toml", env = "FAULTLINE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "FAULTLINE_LISTEN")]
    pub listen: Option<SocketAddr>,
}
