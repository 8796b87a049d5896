// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a password once and print the report
    Check {
        /// Password to analyze; prompted for interactively when omitted
        /// (preferred, so the password stays out of shell history)
        password: Option<String>,
    },

    /// List the available attack models and their guess rates
    Models,
}
