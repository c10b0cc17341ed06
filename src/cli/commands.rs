//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bank API test harness CLI
#[derive(Parser, Debug)]
#[command(name = "bank-api-harness")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Harness configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Write inferred response interfaces
    #[arg(long, global = true)]
    pub generate_interfaces: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an OAuth token and write it to the token file
    Token,

    /// Generate an interface declaration from a JSON file
    Infer {
        /// JSON file holding a response body
        #[arg(short, long)]
        input: PathBuf,

        /// Interface name
        #[arg(short, long)]
        name: String,

        /// Suite file name (without extension)
        #[arg(short, long)]
        suite: String,

        /// Expand nested objects into child interfaces
        #[arg(long)]
        nested: bool,
    },

    /// Run the banking flows
    Run {
        /// Customer id used by the lookup flow
        #[arg(long, default_value = "123")]
        customer_id: u64,

        /// Skip the token file and send requests unauthenticated
        #[arg(long)]
        no_auth: bool,
    },
}
