// src/suggestions/mod.rs
//
// Remediation advice derived from an analysis. Checklist order is fixed so
// consumers can rely on stable output for the same input.

use crate::models::PasswordAnalysis;

const RECOMMENDED_MIN_LENGTH: usize = 12;

/// Produce an ordered list of remediation suggestions. Never empty: a
/// password with nothing to fix gets a single affirmation instead.
pub fn generate_suggestions(analysis: &PasswordAnalysis) -> Vec<String> {
    let mut suggestions = Vec::new();

    if analysis.length < RECOMMENDED_MIN_LENGTH {
        suggestions.push(format!(
            "Use at least {} characters; length is the biggest single win",
            RECOMMENDED_MIN_LENGTH
        ));
    }
    if !analysis.has_uppercase {
        suggestions.push("Add uppercase letters (A-Z)".to_string());
    }
    if !analysis.has_lowercase {
        suggestions.push("Add lowercase letters (a-z)".to_string());
    }
    if !analysis.has_numbers {
        suggestions.push("Add numbers (0-9)".to_string());
    }
    if !analysis.has_symbols {
        suggestions.push("Add symbols (!@#$%...)".to_string());
    }
    if analysis.repeated_chars > 0 {
        suggestions.push("Avoid repeating the same character three or more times".to_string());
    }
    if !analysis.sequences.is_empty() {
        suggestions.push("Avoid sequential characters like 'abc' or '123'".to_string());
    }
    if !analysis.dictionary_words.is_empty() {
        suggestions.push("Avoid common words and known weak passwords".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Great password! No obvious weaknesses detected".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn never_returns_an_empty_list() {
        for p in ["", "a", "password", "xK9$mQ7@wE5#rT1&"] {
            assert!(!generate_suggestions(&analyze(p)).is_empty());
        }
    }

    #[test]
    fn strong_password_gets_the_affirmation_only() {
        let suggestions = generate_suggestions(&analyze("xK9$mQ7@wE5#rT1&"));
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("Great password"));
    }

    #[test]
    fn checklist_fires_in_declaration_order() {
        // Short, lowercase-only, with a run, a sequence and a dictionary hit
        let suggestions = generate_suggestions(&analyze("abcpassworddd"));
        let expected_prefixes = [
            "Add uppercase",
            "Add numbers",
            "Add symbols",
            "Avoid repeating",
            "Avoid sequential",
            "Avoid common words",
        ];
        assert_eq!(suggestions.len(), expected_prefixes.len());
        for (suggestion, prefix) in suggestions.iter().zip(expected_prefixes) {
            assert!(
                suggestion.starts_with(prefix),
                "expected '{}' to start with '{}'",
                suggestion,
                prefix
            );
        }
    }

    #[test]
    fn short_password_is_told_to_grow() {
        let suggestions = generate_suggestions(&analyze("xK9$mQ7@"));
        assert!(suggestions[0].contains("at least 12 characters"));
    }

    #[test]
    fn empty_password_triggers_every_structural_check() {
        let suggestions = generate_suggestions(&analyze(""));
        // length + four missing classes; no weakness penalties on empty input
        assert_eq!(suggestions.len(), 5);
    }
}
