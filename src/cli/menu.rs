// src/cli/menu.rs
use anyhow::Result;
use inquire::{InquireError, Password, Select};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::build_report;
use crate::cli::render;
use crate::history::AnalysisHistory;
use crate::models::AttackModel;

pub fn run_cli_menu(default_model: AttackModel, should_exit: Arc<AtomicBool>) -> Result<()> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSGAUGE CHECKER         ║");
    println!("╚══════════════════════════════════════╝");
    println!("Analyze password strength locally. Nothing leaves this machine.");

    let mut attack_model = default_model;
    let mut history = AnalysisHistory::new();

    loop {
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        println!();
        let options = vec![
            "🔍 Analyze a password",
            "⚔️  Change attack model",
            "📈 View entropy history",
            "❌ Exit",
        ];

        let choice = match Select::new("Choose an option:", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                break;
            }
            Err(e) => return Err(e.into()),
        };

        match choice {
            "🔍 Analyze a password" => {
                let password = match Password::new("Password to analyze:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .with_help_message("Input is analyzed locally and never stored")
                    .prompt()
                {
                    Ok(password) => password,
                    Err(InquireError::OperationCanceled)
                    | Err(InquireError::OperationInterrupted) => continue,
                    Err(e) => return Err(e.into()),
                };

                let report = build_report(&password, attack_model);
                history.record(report.analysis.length, report.analysis.entropy);
                render::print_report(&report);
            }
            "⚔️  Change attack model" => {
                let labels: Vec<&str> = AttackModel::ALL.iter().map(|m| m.label()).collect();
                match Select::new("Attacker to assume:", labels).prompt() {
                    Ok(label) => {
                        if let Some(model) =
                            AttackModel::ALL.into_iter().find(|m| m.label() == label)
                        {
                            attack_model = model;
                            println!("✅ Attack model set to: {}", attack_model);
                        }
                    }
                    Err(InquireError::OperationCanceled)
                    | Err(InquireError::OperationInterrupted) => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            "📈 View entropy history" => {
                render::print_history(&history);
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
