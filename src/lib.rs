//! track library root.
//! Exposes the CLI parser, the high-level run() function and the interval log
//! engine used by the commands.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::context::Context;
use cli::parser::{Cli, Commands, TimesFile};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let default = Commands::Status(TimesFile::default());
    let command = cli.command.as_ref().unwrap_or(&default);

    match command {
        Commands::Config { print, init } => commands::config::handle(*print, *init, cfg),
        Commands::Begin(f) => commands::begin::handle(&Context::new(cli, cfg, f)),
        Commands::End(f) => commands::end::handle(&Context::new(cli, cfg, f)),
        Commands::Fork(f) => commands::fork::handle(&Context::new(cli, cfg, f)),
        Commands::List(f) => commands::list::handle(&Context::new(cli, cfg, f)),
        Commands::Next(f) => commands::next::handle(&Context::new(cli, cfg, f)),
        Commands::Run(f) => commands::run::handle(&Context::new(cli, cfg, f)),
        Commands::Status(f) => commands::status::handle(&Context::new(cli, cfg, f)),
        Commands::Total(f) => commands::total::handle(&Context::new(cli, cfg, f)),
        Commands::Verify(f) => commands::verify::handle(&Context::new(cli, cfg, f)),
        Commands::Wait(f) => commands::wait::handle(&Context::new(cli, cfg, f)),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the config once
    let cfg = Config::load()?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
