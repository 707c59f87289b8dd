//! telopcsv library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    if cli.no_color {
        ui::messages::set_color(false);
    }

    // 2️⃣ carica config UNA sola volta (init la crea, non la legge)
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&Config::resolve_path(cli.config.as_deref()))?,
    };

    if !cfg.color {
        ui::messages::set_color(false);
    }

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
