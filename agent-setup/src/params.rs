use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agent-setup")]
pub struct Params {
    /// JSON or TOML file to seed the configuration from.
    #[arg(long, env = "AGENT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long = "protocol", env = "AGENT_PROTOCOLS", value_delimiter = ',', default_value = "udp,tcp")]
    pub protocols: Vec<String>,

    /// Broker endpoints (`host:port`). Replaces any addresses from the file.
    #[arg(long = "address", env = "AGENT_ADDRESSES", value_delimiter = ',')]
    pub addresses: Vec<String>,

    #[arg(long, env = "AGENT_LOG_LEVEL", default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,

    /// Print the final configuration as JSON.
    #[arg(long)]
    pub print: bool,
}
