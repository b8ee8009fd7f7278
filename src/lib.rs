//! rBikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use std::io;

use clap::Parser;
use crate::cli::Cli;
use crate::config::Config;
use crate::core::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::Prompter;

/// Build the configuration from the file and the command-line overrides.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;
    log::debug!("configuration: {cfg:?}");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match Session::new(&cfg).run(&mut prompter) {
        // closed input ends the session loop like a "no" to restart
        Err(AppError::InputClosed) => {
            log::info!("input closed, exiting");
            Ok(())
        }
        other => other,
    }
}
