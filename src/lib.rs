//! jobhunter library root.
//! Exposes the CLI parser, the high-level run() function and the record
//! update/sync core used by the binary and by the tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
        Commands::Shell => cli::commands::shell::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Stats => cli::commands::stats::handle(cli, cfg),
        Commands::Companies => cli::commands::companies::handle(cli, cfg),
        Commands::Prompt { .. } => cli::commands::prompt::handle(cli, cfg),
        Commands::Sync => cli::commands::sync::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (alternate file with --config)
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // 3️⃣ command-line override of the local dataset
    if let Some(data) = &cli.data {
        cfg.local_dataset = data.clone();
    }

    dispatch(&cli, &cfg)
}
