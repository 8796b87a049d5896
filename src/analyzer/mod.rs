// src/analyzer/mod.rs
//
// Pure password analysis. `analyze` is total: any string in, a fully
// populated `PasswordAnalysis` out, with no side effects.

pub mod patterns;

use crate::models::{PasswordAnalysis, Strength};
use patterns::{
    ASCENDING_SEQUENCES, COMMON_PASSWORDS, DIGIT_SIZE, LOWERCASE_SIZE, SYMBOL_SIZE, UPPERCASE_SIZE,
};

/// Analyze a password and produce its composition, entropy, detected
/// weaknesses and composite strength score.
///
/// The entropy figure assumes every character is drawn uniformly from the
/// union of the detected character classes. That deliberately overestimates
/// real-world passwords; it is the standard "best case" charset model, kept
/// for compatibility with the score thresholds below.
pub fn analyze(password: &str) -> PasswordAnalysis {
    let length = password.chars().count();

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_numbers = password.chars().any(|c| c.is_ascii_digit());
    // Symbol class is "not alphanumeric", so non-ASCII input lands here too
    let has_symbols = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let charset_size = charset_size(has_lowercase, has_uppercase, has_numbers, has_symbols);

    let entropy = if length == 0 {
        0.0
    } else {
        length as f64 * f64::from(charset_size.max(1)).log2()
    };

    let repeated_chars = count_repeated_runs(password);
    let sequences = find_sequences(password);
    let dictionary_words = find_dictionary_words(password);

    let strength_score = score(
        length,
        has_lowercase,
        has_uppercase,
        has_numbers,
        has_symbols,
        repeated_chars,
        sequences.len(),
        dictionary_words.len(),
    );
    let strength = Strength::from_score(strength_score);

    PasswordAnalysis {
        length,
        has_lowercase,
        has_uppercase,
        has_numbers,
        has_symbols,
        charset_size,
        entropy,
        repeated_chars,
        sequences,
        dictionary_words,
        strength_score,
        strength,
    }
}

fn charset_size(lower: bool, upper: bool, numbers: bool, symbols: bool) -> u32 {
    let mut size = 0;
    if lower {
        size += LOWERCASE_SIZE;
    }
    if upper {
        size += UPPERCASE_SIZE;
    }
    if numbers {
        size += DIGIT_SIZE;
    }
    if symbols {
        size += SYMBOL_SIZE;
    }
    size
}

// Count runs of 3 or more identical consecutive characters. A run of any
// length counts once, so occurrences never overlap.
fn count_repeated_runs(password: &str) -> usize {
    let mut runs = 0;
    let mut run_len = 0;
    let mut prev: Option<char> = None;

    for c in password.chars() {
        if prev == Some(c) {
            run_len += 1;
        } else {
            if run_len >= 3 {
                runs += 1;
            }
            run_len = 1;
            prev = Some(c);
        }
    }
    if run_len >= 3 {
        runs += 1;
    }
    runs
}

fn find_sequences(password: &str) -> Vec<String> {
    let lowered = password.to_lowercase();
    ASCENDING_SEQUENCES
        .iter()
        .filter(|seq| lowered.contains(*seq))
        .map(|seq| seq.to_string())
        .collect()
}

fn find_dictionary_words(password: &str) -> Vec<String> {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .map(|word| word.to_string())
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn score(
    length: usize,
    lower: bool,
    upper: bool,
    numbers: bool,
    symbols: bool,
    repeated: usize,
    sequence_count: usize,
    dictionary_count: usize,
) -> u8 {
    let mut score: i64 = 0;

    // Length contribution, capped at 40 points
    score += (length as i64).saturating_mul(4).min(40);

    // Character variety
    if upper {
        score += 10;
    }
    if lower {
        score += 10;
    }
    if numbers {
        score += 10;
    }
    if symbols {
        score += 15;
    }

    // Penalties for detected weaknesses
    score -= 10 * repeated as i64;
    score -= 5 * sequence_count as i64;
    score -= 15 * dictionary_count as i64;

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_matches_input_character_count() {
        for p in ["", "a", "abcdef", "pässwörd", "こんにちは"] {
            assert_eq!(analyze(p).length, p.chars().count());
        }
    }

    #[test]
    fn empty_password_is_the_zero_case() {
        let analysis = analyze("");
        assert_eq!(analysis.length, 0);
        assert_eq!(analysis.charset_size, 0);
        assert_eq!(analysis.entropy, 0.0);
        assert_eq!(analysis.repeated_chars, 0);
        assert!(analysis.sequences.is_empty());
        assert!(analysis.dictionary_words.is_empty());
        assert_eq!(analysis.strength_score, 0);
        assert_eq!(analysis.strength, Strength::VeryWeak);
    }

    #[test]
    fn charset_grows_with_each_new_class() {
        let lower = analyze("abqz").charset_size;
        let lower_upper = analyze("abqzQ").charset_size;
        let lower_upper_digit = analyze("abqzQ9").charset_size;
        let all_four = analyze("abqzQ9!").charset_size;

        assert_eq!(lower, 26);
        assert_eq!(lower_upper, 52);
        assert_eq!(lower_upper_digit, 62);
        assert_eq!(all_four, 94);
        assert!(lower <= lower_upper && lower_upper <= lower_upper_digit);
        assert!(lower_upper_digit <= all_four);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        let analysis = analyze("héllo");
        assert!(analysis.has_lowercase);
        assert!(analysis.has_symbols);
        assert_eq!(analysis.charset_size, 26 + 32);
    }

    #[test]
    fn entropy_follows_charset_model() {
        let analysis = analyze("Tr0ub4dor&3");
        assert!(analysis.has_uppercase);
        assert!(analysis.has_lowercase);
        assert!(analysis.has_numbers);
        assert!(analysis.has_symbols);
        assert_eq!(analysis.charset_size, 94);

        let expected = 11.0 * 94f64.log2();
        assert!((analysis.entropy - expected).abs() < 1e-9);
    }

    #[test]
    fn repeated_runs_counted_without_overlap() {
        assert_eq!(analyze("abc").repeated_chars, 0);
        assert_eq!(analyze("aab").repeated_chars, 0);
        assert_eq!(analyze("aaab").repeated_chars, 1);
        // A long run is still one run
        assert_eq!(analyze("aaaaaa").repeated_chars, 1);
        assert_eq!(analyze("aaabbbcc").repeated_chars, 2);
        assert_eq!(analyze("aaa111").repeated_chars, 2);
    }

    #[test]
    fn sequences_match_case_insensitively_in_table_order() {
        let analysis = analyze("xyzABC");
        assert_eq!(analysis.sequences, vec!["abc", "xyz"]);

        // "111" is not an ascending run and must not match
        assert!(analyze("aaa111").sequences.is_empty());
    }

    #[test]
    fn overlapping_ascending_run_reports_each_window() {
        assert_eq!(analyze("1234").sequences, vec!["123", "234"]);
    }

    #[test]
    fn dictionary_hits_reduce_score_and_strength() {
        let analysis = analyze("password");
        assert_eq!(analysis.dictionary_words, vec!["password"]);

        // Same composition without the dictionary hit scores >= 15 higher
        let clean = analyze("pdroswas");
        assert!(clean.dictionary_words.is_empty());
        assert!(analysis.strength_score + 15 <= clean.strength_score);
        assert!(analysis.strength <= Strength::Weak);
    }

    #[test]
    fn dictionary_check_is_substring_and_case_insensitive() {
        let analysis = analyze("MyQwErTy2024");
        assert_eq!(analysis.dictionary_words, vec!["qwerty"]);
    }

    #[test]
    fn score_is_clamped_for_pathological_input() {
        // Very long, all classes, no penalties: clamps at 100
        let strong = analyze("aB3!xK9$mQ7@wE5#rT1&yU8*");
        assert!(strong.strength_score <= 100);

        // One repeated character forever: penalty floor at 0
        let repeated = "a".repeat(5000);
        let weak = analyze(&repeated);
        // 40 length + 10 lowercase - 10 for the single run
        assert_eq!(weak.strength_score, 40);

        // Every dictionary word at once still stays in [0,100]
        let everything = patterns::COMMON_PASSWORDS.concat();
        let analysis = analyze(&everything);
        assert_eq!(analysis.strength_score, 0);
    }

    #[test]
    fn score_formula_is_exact_for_a_known_input() {
        // "abcdef": 6 chars lowercase, one sequence table scan:
        // contains abc, bcd, cde, def -> 4 sequences
        let analysis = analyze("abcdef");
        assert_eq!(analysis.sequences.len(), 4);
        // 24 (length) + 10 (lower) - 20 (sequences) = 14
        assert_eq!(analysis.strength_score, 14);
        assert_eq!(analysis.strength, Strength::VeryWeak);
    }

    #[test]
    fn equal_passwords_produce_identical_analyses() {
        let a = analyze("C0rrect-Horse!");
        let b = analyze("C0rrect-Horse!");
        assert_eq!(a.entropy.to_bits(), b.entropy.to_bits());
        assert_eq!(a.strength_score, b.strength_score);
        assert_eq!(a.sequences, b.sequences);
        assert_eq!(a.dictionary_words, b.dictionary_words);
    }
}
