use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

mod analyzer;
mod cli;
mod core;
mod estimator;
mod history;
mod models;
mod suggestions;

use crate::cli::{handlers, menu, Args, CliCommand};
use crate::core::config::Config;

fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    if !config.color_output {
        console::set_colors_enabled(false);
    }

    let args = Args::parse();
    log::debug!("Command line args: {:?}", args);

    let attack_model = args.model.unwrap_or(config.default_attack_model);

    match args.command {
        Some(CliCommand::Check { password }) => {
            handlers::handle_check(password.as_deref(), attack_model, args.json)
        }
        Some(CliCommand::Models) => handlers::handle_models(),
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })?;
            }

            menu::run_cli_menu(attack_model, should_exit)
        }
    }
}
