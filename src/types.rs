//! Core types for the namesmith naming pipeline
//!
//! Everything here is a plain value: created fresh per call, returned to the
//! caller or stored in the name cache, never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One of the four name construction strategies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Industry prefix/suffix vocabulary around the lead concept
    Template,
    /// Lead concept followed by a project-type word
    Descriptive,
    /// Free combination of the two lead concepts
    Creative,
    /// Lead concept followed by an industry pattern phrase
    Professional,
}

impl Strategy {
    /// Evaluation order. Ties on confidence go to the earliest entry.
    pub const ALL: [Strategy; 4] = [
        Strategy::Template,
        Strategy::Descriptive,
        Strategy::Creative,
        Strategy::Professional,
    ];

    /// Fixed ranking weight. Not a probability.
    pub fn confidence(&self) -> f64 {
        match self {
            Strategy::Template => 0.9,
            Strategy::Professional => 0.85,
            Strategy::Descriptive => 0.8,
            Strategy::Creative => 0.7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Template => "template",
            Strategy::Descriptive => "descriptive",
            Strategy::Creative => "creative",
            Strategy::Professional => "professional",
        }
    }
}

/// Language of the description and of the generated explanation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    French,
    English,
}

impl Language {
    /// Lenient parse; `None` for anything that is not French or English.
    pub fn parse(language: &str) -> Option<Self> {
        match language.trim().to_lowercase().as_str() {
            "french" | "fr" | "français" | "francais" => Some(Language::French),
            "english" | "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Canonical resource key, used as the stopword file stem
    pub fn key(&self) -> &'static str {
        match self {
            Language::French => "french",
            Language::English => "english",
        }
    }
}

/// A single synthesizer output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameCandidate {
    pub name: String,
    pub strategy: Strategy,
    pub confidence: f64,
}

impl NameCandidate {
    pub fn new(name: String, strategy: Strategy) -> Self {
        Self {
            name,
            strategy,
            confidence: strategy.confidence(),
        }
    }
}

/// The recommended name plus everything needed to explain it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameResult {
    pub recommended_name: String,
    pub name_type: Strategy,
    pub confidence: f64,
    /// The other three candidates, in evaluation order
    pub alternatives: Vec<String>,
    pub reasoning: String,
    pub key_concepts_used: Vec<String>,
    pub industry_context: String,
    pub language: String,
}

/// Heuristic score of an arbitrary name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// 0.0 - 10.0
    pub score: f64,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Vocabulary hints for a given industry and project type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamingSuggestions {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub descriptive_words: Vec<String>,
    pub examples: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidences_are_distinct() {
        let mut values: Vec<f64> = Strategy::ALL.iter().map(|s| s.confidence()).collect();
        values.sort_by(|a, b| b.partial_cmp(a).unwrap());
        values.dedup();
        assert_eq!(values, vec![0.9, 0.85, 0.8, 0.7]);
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&Strategy::Professional).unwrap();
        assert_eq!(json, "\"professional\"");
        assert_eq!(Strategy::Creative.name(), "creative");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("french"), Some(Language::French));
        assert_eq!(Language::parse(" FR "), Some(Language::French));
        assert_eq!(Language::parse("English"), Some(Language::English));
        assert_eq!(Language::parse("klingon"), None);
        assert_eq!(Language::default().key(), "french");
    }

    #[test]
    fn test_candidate_takes_strategy_confidence() {
        let candidate = NameCandidate::new("CareHub".to_string(), Strategy::Template);
        assert_eq!(candidate.confidence, 0.9);
    }
}
