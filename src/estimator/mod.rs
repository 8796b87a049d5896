// src/estimator/mod.rs
//
// Crack-time projection from an entropy estimate and an attacker model.

use crate::models::{AttackModel, CrackTimeEstimate};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0; // 30 days
const YEAR: f64 = 31_536_000.0; // 365 days
const CENTURY: f64 = 3_153_600_000.0; // 100 years

// exp2 of anything above this is still finite; entropies past it are all
// "Centuries" anyway, so clamping loses nothing
const MAX_LOG2_SECONDS: f64 = 512.0;

/// Estimate the average-case time to exhaust the keyspace implied by
/// `entropy` bits at the model's guess rate.
///
/// The search is assumed to find the password after half the keyspace, hence
/// the division by `2 * rate`. Works in the log2 domain so very large
/// entropies never overflow to infinity.
pub fn estimate_crack_time(entropy: f64, model: AttackModel) -> CrackTimeEstimate {
    // Non-finite or negative entropy is treated as zero
    let entropy = if entropy.is_finite() && entropy > 0.0 {
        entropy
    } else {
        0.0
    };

    // seconds = 2^entropy / (2 * rate)  =>  log2(seconds) = entropy - 1 - log2(rate)
    let log2_seconds = entropy - 1.0 - model.guesses_per_second().log2();
    let seconds = log2_seconds.min(MAX_LOG2_SECONDS).exp2().max(0.0);

    CrackTimeEstimate {
        seconds,
        display: format_seconds(seconds),
    }
}

// Largest unit that keeps the displayed value >= 1, rounded to nearest
fn format_seconds(seconds: f64) -> String {
    if seconds < 1.0 {
        "Instant".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.round() as u64)
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).round() as u64)
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).round() as u64)
    } else if seconds < MONTH {
        format!("{} days", (seconds / DAY).round() as u64)
    } else if seconds < YEAR {
        format!("{} months", (seconds / MONTH).round() as u64)
    } else if seconds < CENTURY {
        format!("{} years", (seconds / YEAR).round() as u64)
    } else {
        "Centuries".to_string()
    }
}
