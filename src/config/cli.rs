use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mondial-relay-pickup")]
#[command(about = "Look up Mondial Relay pickup points for a shipping address")]
pub struct CliConfig {
    #[arg(long, default_value = "relay.toml")]
    pub config: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List pickup points near an address
    List {
        #[arg(long)]
        postcode: String,

        #[arg(long)]
        country: String,

        #[arg(long)]
        weight: f64,
    },
    /// Resolve the address of a previously listed pickup point
    Address { pickup_id: String },
    /// Print the flat shipping amount for a shipment
    Cost {
        #[arg(long, default_value = "0")]
        weight: f64,
    },
}
