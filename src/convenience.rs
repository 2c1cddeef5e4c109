//! Convenience functions
//!
//! Two modes:
//! 1. Simple mode: the free functions below share one process-wide
//!    generator, so repeated requests hit the same cache from any thread.
//! 2. Full mode: build your own `NameGenerator` to control the seed, the
//!    cache bound and the stopword sources.

use crate::generator::NameGenerator;
use crate::types::{NameResult, NamingSuggestions, ValidationResult};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Language used when the caller does not pick one
pub const DEFAULT_LANGUAGE: &str = "french";

fn shared() -> MutexGuard<'static, NameGenerator> {
    static SHARED: OnceLock<Mutex<NameGenerator>> = OnceLock::new();
    SHARED
        .get_or_init(|| Mutex::new(NameGenerator::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Recommended name for a project, cached process-wide
///
/// ```rust,ignore
/// let result = namesmith::generate_project_name(
///     "Application web de gestion d'hôpital avec télémédecine",
///     "Healthcare",
///     "Application Web",
///     "complexe",
///     "french",
/// );
/// println!("{} ({})", result.recommended_name, result.reasoning);
/// ```
pub fn generate_project_name(
    description: &str,
    industry: &str,
    project_type: &str,
    complexity: &str,
    language: &str,
) -> NameResult {
    shared().generate_project_name(description, industry, project_type, complexity, language)
}

pub fn extract_key_concepts(description: &str, language: &str) -> Vec<String> {
    shared().extract_key_concepts(description, language)
}

pub fn validate_name(name: &str) -> ValidationResult {
    crate::validate::validate_name(name)
}

pub fn get_naming_suggestions(industry: &str, project_type: &str) -> NamingSuggestions {
    crate::generator::get_naming_suggestions(industry, project_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_cache_across_threads() {
        let description = "inventory tracking for small breweries";
        let first = generate_project_name(description, "E-commerce", "Dashboard", "moyen", "english");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(move || {
                    generate_project_name(description, "E-commerce", "Dashboard", "moyen", "english")
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), first);
        }
    }

    #[test]
    fn test_simple_mode_entry_points() {
        let concepts = extract_key_concepts("Suivi des livraisons de colis", DEFAULT_LANGUAGE);
        assert_eq!(concepts, vec!["suivi", "livraisons", "colis"]);

        assert!(!validate_name("ab").is_valid);
        assert_eq!(get_naming_suggestions("Finance", "API").examples.len(), 5);
    }
}
