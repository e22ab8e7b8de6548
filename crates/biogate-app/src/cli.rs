use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biogate", about = "biogate — biometric session gate")]
pub struct Cli {
    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the provider's availability snapshot
    Check,

    /// Run one authentication attempt and print the outcome
    Attempt {
        /// Force the simulated provider with this result (`success` or an error code)
        #[arg(long)]
        simulate: Option<String>,
    },

    /// Attempt, then sign out, printing the session after each step
    Cycle {
        #[arg(long)]
        simulate: Option<String>,
    },
}
