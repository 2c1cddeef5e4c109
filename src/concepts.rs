//! Concept extraction
//!
//! Turns a free-text project description into at most six significant
//! keywords. Domain vocabulary goes first, frequency fills the rest.

use crate::stopwords::{StopwordSource, CUSTOM_STOPWORDS};
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;

pub const MAX_CONCEPTS: usize = 6;

/// How many matches each domain vocabulary may contribute up front
const DOMAIN_SLOTS: usize = 2;

pub const TECH_CONCEPTS: &[&str] = &[
    "api", "app", "web", "mobile", "cloud", "ai", "ml", "blockchain", "iot",
    "dashboard", "analytics", "automation", "integration",
];

pub const BUSINESS_CONCEPTS: &[&str] = &[
    "crm", "erp", "management", "tracking", "monitoring", "planning",
    "optimization", "workflow", "collaboration", "communication",
];

/// Lowercased word units. Runs containing a digit are dropped.
///
/// Text is NFC-normalized first so a decomposed accent stays inside its word.
pub fn tokenize(text: &str) -> Vec<String> {
    let composed: String = text.nfc().collect();
    // Punctuation separates words rather than discarding them: "d'hôpital"
    // yields "hôpital" and "e-commerce" yields "commerce".
    composed
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .filter(|t| t.chars().all(char::is_alphabetic))
        .map(|t| t.to_string())
        .collect()
}

/// Stopword set for a language, custom words always included
pub fn stopwords_for(source: &dyn StopwordSource, language: &str, extra: &[String]) -> HashSet<String> {
    let mut words: HashSet<String> = CUSTOM_STOPWORDS.iter().map(|w| w.to_string()).collect();
    words.extend(extra.iter().map(|w| w.to_lowercase()));

    match source.load(language) {
        Ok(lang_words) => words.extend(lang_words),
        Err(e) => tracing::debug!("using custom stopwords only: {}", e),
    }

    words
}

/// Extract up to `MAX_CONCEPTS` key concepts from a description
pub fn extract_key_concepts(description: &str, stopwords: &HashSet<String>) -> Vec<String> {
    let tokens: Vec<String> = tokenize(description)
        .into_iter()
        .filter(|t| !stopwords.contains(t))
        .filter(|t| t.chars().count() > 2)
        .collect();

    // Counts plus first-seen order so equal counts stay stable
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, pos)).0 += 1;
    }
    let mut ranked: Vec<(&str, usize, usize)> =
        counts.into_iter().map(|(t, (n, first))| (t, n, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    fn push(concepts: &mut Vec<String>, word: &str) {
        if concepts.len() < MAX_CONCEPTS && !concepts.iter().any(|c| c == word) {
            concepts.push(word.to_string());
        }
    }

    let mut concepts: Vec<String> = Vec::with_capacity(MAX_CONCEPTS);

    for vocabulary in [TECH_CONCEPTS, BUSINESS_CONCEPTS] {
        let mut taken = 0;
        for token in &tokens {
            if taken == DOMAIN_SLOTS {
                break;
            }
            if vocabulary.iter().any(|v| v == token) && !concepts.contains(token) {
                push(&mut concepts, token);
                taken += 1;
            }
        }
    }

    for (word, _, _) in ranked {
        push(&mut concepts, word);
    }

    concepts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::BundledStopwords;

    fn french() -> HashSet<String> {
        stopwords_for(&BundledStopwords, "french", &[])
    }

    fn english() -> HashSet<String> {
        stopwords_for(&BundledStopwords, "english", &[])
    }

    #[test]
    fn test_tokenize_splits_on_apostrophes() {
        let tokens = tokenize("Gestion d'hôpital");
        assert_eq!(tokens, vec!["gestion", "d", "hôpital"]);
    }

    #[test]
    fn test_tokenize_splits_on_hyphens() {
        let tokens = tokenize("e-commerce temps-réel");
        assert_eq!(tokens, vec!["e", "commerce", "temps", "réel"]);
    }

    #[test]
    fn test_decomposed_accents_stay_in_words() {
        let nfd = "gestion te\u{301}le\u{301}me\u{301}decine";
        assert_eq!(tokenize(nfd), vec!["gestion", "télémédecine"]);

        let concepts = extract_key_concepts(nfd, &french());
        assert_eq!(concepts, vec!["gestion", "télémédecine"]);
    }

    #[test]
    fn test_tokenize_drops_digits() {
        let tokens = tokenize("web3 platform 2024 cloud");
        assert_eq!(tokens, vec!["platform", "cloud"]);
    }

    #[test]
    fn test_hospital_description() {
        let concepts = extract_key_concepts(
            "Application web de gestion d'hôpital avec télémédecine",
            &french(),
        );
        assert_eq!(concepts, vec!["web", "gestion", "hôpital", "télémédecine"]);
    }

    #[test]
    fn test_domain_concepts_come_first() {
        let concepts = extract_key_concepts(
            "A tool for invoices invoices invoices with workflow tracking and cloud api sync",
            &english(),
        );
        assert_eq!(&concepts[..4], &["cloud", "api", "workflow", "tracking"]);
        assert_eq!(concepts[4], "invoices");
    }

    #[test]
    fn test_domain_slots_are_capped() {
        let concepts = extract_key_concepts(
            "mobile web cloud dashboard analytics",
            &english(),
        );
        assert_eq!(&concepts[..2], &["mobile", "web"]);
        assert_eq!(concepts.len(), 5);
    }

    #[test]
    fn test_frequency_ranking() {
        let concepts = extract_key_concepts(
            "garden seeds garden water garden seeds",
            &english(),
        );
        assert_eq!(concepts, vec!["garden", "seeds", "water"]);
    }

    #[test]
    fn test_at_most_six_unique_alphabetic() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india \
                    alpha bravo x9 ab c'est l'été";
        let concepts = extract_key_concepts(text, &english());
        assert!(concepts.len() <= MAX_CONCEPTS);
        let unique: HashSet<_> = concepts.iter().collect();
        assert_eq!(unique.len(), concepts.len());
        for c in &concepts {
            assert!(c.chars().count() > 2, "{} too short", c);
            assert!(c.chars().all(char::is_alphabetic), "{} not alphabetic", c);
        }
    }

    #[test]
    fn test_unknown_language_uses_custom_set_only() {
        let words = stopwords_for(&BundledStopwords, "latin", &[]);
        assert!(words.contains("projet"));
        assert!(!words.contains("avec"));

        let concepts = extract_key_concepts("projet avec inventaire", &words);
        assert_eq!(concepts, vec!["avec", "inventaire"]);
    }

    #[test]
    fn test_extra_stopwords() {
        let words = stopwords_for(&BundledStopwords, "english", &["Invoices".to_string()]);
        let concepts = extract_key_concepts("invoices for clinics", &words);
        assert_eq!(concepts, vec!["clinics"]);
    }

    #[test]
    fn test_empty_description() {
        assert!(extract_key_concepts("", &french()).is_empty());
        assert!(extract_key_concepts("le la de", &french()).is_empty());
    }
}
