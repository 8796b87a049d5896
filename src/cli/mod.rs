// src/cli/mod.rs
use clap::Parser;

use crate::models::AttackModel;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod render;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Attack model for the crack-time estimate
    #[arg(long, short, env = "DEFAULT_ATTACK_MODEL", value_enum)]
    pub model: Option<AttackModel>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
