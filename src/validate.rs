//! Name validation
//!
//! Scores any candidate name out of 10 with a handful of heuristics.
//! Problems that make a name hard to use go in `issues`; softer advice goes
//! in `recommendations`. Only a name that is empty or shorter than three
//! characters is reported as invalid.

use crate::types::ValidationResult;

const MIN_LENGTH: usize = 3;
const IDEAL_LENGTH: std::ops::RangeInclusive<usize> = 5..=25;
const MAX_WORD_LENGTH: usize = 8;

const SPECIAL_CHARS: &str = "!@#$%^&*()[]{}|;:,.<>?";

const GENERIC_WORDS: &[&str] = &["project", "app", "system", "platform", "projet", "application"];

/// Score a name against the naming heuristics
pub fn validate_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();
    let length = trimmed.chars().count();

    if length < MIN_LENGTH {
        return ValidationResult {
            is_valid: false,
            score: 0.0,
            issues: vec![format!(
                "Name is too short ({} characters, minimum {})",
                length, MIN_LENGTH
            )],
            recommendations: vec![],
        };
    }

    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    let mut score: f64 = 10.0;

    // === LENGTH ===
    if IDEAL_LENGTH.contains(&length) {
        score += 2.0;
    } else if length > *IDEAL_LENGTH.end() {
        issues.push(format!(
            "Name is long ({} characters); aim for at most {}",
            length,
            IDEAL_LENGTH.end()
        ));
        score -= 1.0;
    }

    // === SHAPE ===
    if trimmed.contains(char::is_whitespace) {
        score += 1.0;
    }

    if trimmed.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        issues.push("Name contains special characters".to_string());
        score -= 2.0;
    }

    if trimmed.chars().any(char::is_numeric) {
        recommendations.push("Avoid digits unless they are part of the brand".to_string());
        score -= 0.5;
    }

    // === GENERICNESS ===
    let lower = trimmed.to_lowercase();
    if let Some(word) = GENERIC_WORDS.iter().find(|w| lower.contains(*w)) {
        recommendations.push(format!(
            "'{}' is a generic word; prefer something more distinctive",
            word
        ));
        score -= 1.0;
    }

    if trimmed
        .split_whitespace()
        .all(|w| w.chars().count() <= MAX_WORD_LENGTH)
    {
        score += 1.0;
    }

    let score = score.clamp(0.0, 10.0);

    recommendations.push(
        if score >= 8.0 {
            "Excellent name: short, clear and distinctive"
        } else if score >= 6.0 {
            "Good name, but it could still be improved"
        } else {
            "This name could be improved; consider the points above"
        }
        .to_string(),
    );

    ValidationResult {
        is_valid: true,
        score,
        issues,
        recommendations,
    }
}
