//! Command line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use crate::bootstrap;
use ow_app::Verbosity;

mod normalize;
mod replay;

#[derive(Parser)]
#[command(name = "openwith")]
#[command(author, version, about = "Normalize OS share/open events into file descriptors")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to <config dir>/openwith/config.toml when present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Resolver fixtures (JSON table of locator → type/path)
    #[arg(long, short = 'r', global = true)]
    pub resolver: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize one share event and print the result (`null` for no result)
    Normalize {
        /// JSON file holding one share event
        #[arg(long, short = 'e')]
        event: PathBuf,
    },

    /// Feed a sequence of share events through the intake and print every delivered share
    Replay {
        /// JSON file holding an array of share events
        #[arg(long, short = 'e')]
        events: PathBuf,

        /// Register the handler before the event at this index (queued until then)
        #[arg(long, default_value = "0")]
        handler_after: usize,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = bootstrap::load_settings(cli.config.as_deref())?;
    if cli.verbose {
        settings.verbosity = Verbosity::Debug;
    }
    bootstrap::tracing::init_tracing_subscriber(settings.verbosity)?;
    for issue in &settings.config_issues {
        warn!(issue = %issue, "Ignoring invalid config value, using default");
    }

    let resolver = bootstrap::build_resolver(cli.resolver.as_deref())?;

    match cli.command {
        Commands::Normalize { event } => normalize::run(&event, resolver, &settings).await,
        Commands::Replay {
            events,
            handler_after,
        } => replay::run(&events, handler_after, resolver, &settings).await,
    }
}
