// src/cli/handlers.rs
use anyhow::Result;
use chrono::Utc;
use inquire::Password;

use crate::analyzer;
use crate::cli::render;
use crate::estimator;
use crate::models::{AttackModel, StrengthReport};
use crate::suggestions;

// Run the full engine pass: analysis, crack-time estimate, suggestions
pub fn build_report(password: &str, model: AttackModel) -> StrengthReport {
    let analysis = analyzer::analyze(password);
    let crack_time = estimator::estimate_crack_time(analysis.entropy, model);
    let suggestions = suggestions::generate_suggestions(&analysis);

    log::debug!(
        "analyzed password: length={} score={} entropy={:.1}",
        analysis.length,
        analysis.strength_score,
        analysis.entropy
    );

    StrengthReport {
        analysis,
        attack_model: model,
        crack_time,
        suggestions,
        generated_at: Utc::now(),
    }
}

// Handler for the single-shot `check` command
pub fn handle_check(password: Option<&str>, model: AttackModel, json: bool) -> Result<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => Password::new("Enter the password to analyze:")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?,
    };

    let report = build_report(&password, model);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report);
    }

    Ok(())
}

// Handler for the `models` command
pub fn handle_models() -> Result<()> {
    println!("Available attack models:");
    for model in AttackModel::ALL {
        println!(
            "  {:<22} {:>12} guesses/sec",
            model.label(),
            format_rate(model.guesses_per_second())
        );
    }
    Ok(())
}

fn format_rate(rate: f64) -> String {
    if rate >= 1e9 {
        format!("{:.0} billion", rate / 1e9)
    } else if rate >= 1e6 {
        format!("{:.0} million", rate / 1e6)
    } else {
        format!("{:.0}", rate)
    }
}
