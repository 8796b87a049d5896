// src/cli/render.rs
use console::{style, StyledObject};

use crate::history::AnalysisHistory;
use crate::models::{PasswordAnalysis, Strength, StrengthReport};

const BAR_WIDTH: usize = 20;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

// Print the full report: badge, class checklist, weaknesses, crack-time
// card and suggestions
pub fn print_report(report: &StrengthReport) {
    let analysis = &report.analysis;

    println!();
    println!(
        "🔐 Strength: {} ({}/100)",
        strength_badge(analysis.strength),
        analysis.strength_score
    );
    println!("   [{}]", score_bar(analysis.strength_score));
    println!();

    println!("Character classes:");
    println!("   {} lowercase letters", checkmark(analysis.has_lowercase));
    println!("   {} uppercase letters", checkmark(analysis.has_uppercase));
    println!("   {} numbers", checkmark(analysis.has_numbers));
    println!("   {} symbols", checkmark(analysis.has_symbols));
    println!(
        "   Charset size: {} | Entropy: {:.1} bits",
        analysis.charset_size, analysis.entropy
    );

    print_weaknesses(analysis);

    println!();
    println!(
        "⏱️  Crack time ({}): {}",
        report.attack_model,
        style(&report.crack_time.display).bold()
    );

    println!();
    println!("💡 Suggestions:");
    for suggestion in &report.suggestions {
        println!("   • {}", suggestion);
    }
}

fn print_weaknesses(analysis: &PasswordAnalysis) {
    if analysis.repeated_chars == 0
        && analysis.sequences.is_empty()
        && analysis.dictionary_words.is_empty()
    {
        return;
    }

    println!();
    println!("Detected weaknesses:");
    if analysis.repeated_chars > 0 {
        println!(
            "   ⚠️  {} repeated character run(s)",
            analysis.repeated_chars
        );
    }
    if !analysis.sequences.is_empty() {
        println!(
            "   ⚠️  Sequential patterns: {}",
            analysis.sequences.join(", ")
        );
    }
    if !analysis.dictionary_words.is_empty() {
        println!(
            "   ⚠️  Common words: {}",
            analysis.dictionary_words.join(", ")
        );
    }
}

// Print the rolling (length, entropy) history as a text sparkline
pub fn print_history(history: &AnalysisHistory) {
    if history.is_empty() {
        println!("❗ No samples recorded yet. Analyze a password first.");
        return;
    }

    let entropies: Vec<f64> = history.samples().map(|s| s.entropy).collect();
    let max = entropies.iter().cloned().fold(f64::MIN, f64::max).max(1.0);

    let chart: String = entropies
        .iter()
        .map(|e| {
            let level = ((e / max) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect();

    println!();
    println!("📈 Entropy history ({} samples, max {:.1} bits)", history.len(), max);
    println!("   {}", chart);
    if let Some(last) = history.samples().last() {
        println!("   Latest: {} chars, {:.1} bits", last.length, last.entropy);
    }
}

fn strength_badge(strength: Strength) -> StyledObject<&'static str> {
    let badge = style(strength.label()).bold();
    match strength {
        Strength::VeryWeak => badge.red(),
        Strength::Weak => badge.red(),
        Strength::Medium => badge.yellow(),
        Strength::Strong => badge.green(),
        Strength::VeryStrong => badge.green().bright(),
    }
}

fn score_bar(score: u8) -> String {
    let filled = (score as usize * BAR_WIDTH) / 100;
    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    bar
}

fn checkmark(present: bool) -> &'static str {
    if present {
        "✅"
    } else {
        "❌"
    }
}
