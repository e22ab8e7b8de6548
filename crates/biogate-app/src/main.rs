mod cli;
mod commands;
mod setup;

use anyhow::Result;
use biogate_core::config::AppConfig;
use biogate_core::lifecycle;
use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    lifecycle::init_tracing();

    let mut cli = Cli::parse();
    let mut config = AppConfig::load_or_default(cli.config.as_deref());

    if let Commands::Attempt { simulate } | Commands::Cycle { simulate } = &mut cli.command {
        setup::apply_simulate_override(&mut config, simulate.take());
    }
    lifecycle::log_startup(&config);

    let result = match cli.command {
        Commands::Check => commands::check(&config).await,
        Commands::Attempt { .. } => commands::attempt(&config).await,
        Commands::Cycle { .. } => commands::cycle(&config).await,
    };
    lifecycle::log_shutdown();
    result
}
