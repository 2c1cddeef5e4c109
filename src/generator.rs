//! Name Generator
//!
//! The core of namesmith - turns a project description into a recommended
//! name, three alternatives and a short explanation.
//!
//! Pipeline:
//! 1. Fingerprint the request and serve repeats from the cache
//! 2. Extract key concepts from the description
//! 3. Run every synthesizer
//! 4. Keep the highest-confidence candidate
//! 5. Explain the choice

use crate::cache::{self, NameCache};
use crate::concepts;
use crate::stopwords::{BundledStopwords, DirStopwords, LayeredStopwords, StopwordSource};
use crate::synthesis::{self, NamingContext};
use crate::templates;
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// How many concepts are quoted back in a result
const KEY_CONCEPTS_USED: usize = 3;

/// Configuration for a `NameGenerator`
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Random seed for reproducible names (None = entropy)
    pub seed: Option<u64>,

    /// Maximum cached results (None = unbounded)
    pub cache_capacity: Option<usize>,

    /// Directory of `<language>.txt` stopword lists, tried before the bundled ones
    pub stopwords_dir: Option<PathBuf>,

    /// Words removed from every description on top of the stopword lists
    pub extra_stopwords: Vec<String>,
}

/// Generates, caches and explains project names
pub struct NameGenerator<R: Rng = StdRng> {
    rng: R,
    cache: NameCache,
    stopwords: Box<dyn StopwordSource>,
    extra_stopwords: Vec<String>,
    loaded_stopwords: HashMap<String, HashSet<String>>,
}

impl NameGenerator<StdRng> {
    /// Entropy-seeded generator with an unbounded cache and bundled stopwords
    pub fn new() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }

    /// Generator whose names are fully reproducible
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(&GeneratorConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let stopwords: Box<dyn StopwordSource> = match &config.stopwords_dir {
            Some(dir) => Box::new(LayeredStopwords::new(vec![
                Box::new(DirStopwords::new(dir.clone())),
                Box::new(BundledStopwords),
            ])),
            None => Box::new(BundledStopwords),
        };

        let mut generator = Self::with_parts(rng, NameCache::from_capacity(config.cache_capacity), stopwords);
        generator.extra_stopwords = config.extra_stopwords.clone();
        generator
    }
}

impl Default for NameGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NameGenerator<R> {
    /// Assemble a generator from explicit collaborators
    pub fn with_parts(rng: R, cache: NameCache, stopwords: Box<dyn StopwordSource>) -> Self {
        Self {
            rng,
            cache,
            stopwords,
            extra_stopwords: Vec::new(),
            loaded_stopwords: HashMap::new(),
        }
    }

    /// Generate a name for a project, or return the cached one for a repeat request
    pub fn generate_project_name(
        &mut self,
        description: &str,
        industry: &str,
        project_type: &str,
        complexity: &str,
        language: &str,
    ) -> NameResult {
        // 1. Serve repeats unchanged
        let key = cache::fingerprint(description, industry, project_type, complexity);
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("name cache hit for {}", &key[..12]);
            return cached.clone();
        }

        // 2. Concepts
        let concepts = self.extract_key_concepts(description, language);

        // 3. Every strategy, in evaluation order
        let ctx = NamingContext {
            concepts: &concepts,
            industry,
            project_type,
            complexity,
        };
        let candidates: Vec<NameCandidate> = Strategy::ALL
            .iter()
            .map(|&strategy| NameCandidate::new(synthesis::synthesize(strategy, &ctx, &mut self.rng), strategy))
            .collect();

        // 4. First maximum wins
        let best = select_best(&candidates);
        let chosen = &candidates[best];
        tracing::debug!(
            "selected {} '{}' ({:.2}) from {} candidates",
            chosen.strategy.name(),
            chosen.name,
            chosen.confidence,
            candidates.len()
        );

        // 5. Explain
        let key_concepts: Vec<String> = concepts.iter().take(KEY_CONCEPTS_USED).cloned().collect();
        let reasoning = explain(
            chosen,
            industry,
            &key_concepts,
            Language::parse(language).unwrap_or_default(),
        );

        let result = NameResult {
            recommended_name: chosen.name.clone(),
            name_type: chosen.strategy,
            confidence: chosen.confidence,
            alternatives: candidates
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != best)
                .map(|(_, c)| c.name.clone())
                .collect(),
            reasoning,
            key_concepts_used: key_concepts,
            industry_context: industry.to_string(),
            language: language.to_string(),
        };

        // 6. Remember
        self.cache.insert(key, result.clone());
        result
    }

    /// Key concepts of a description, stopwords resolved once per language
    pub fn extract_key_concepts(&mut self, description: &str, language: &str) -> Vec<String> {
        let lang_key = Language::parse(language)
            .map(|l| l.key().to_string())
            .unwrap_or_else(|| language.trim().to_lowercase());

        let source = self.stopwords.as_ref();
        let extra = &self.extra_stopwords;
        let words = self
            .loaded_stopwords
            .entry(lang_key)
            .or_insert_with_key(|key| concepts::stopwords_for(source, key, extra));

        concepts::extract_key_concepts(description, words)
    }

    pub fn get_naming_suggestions(&self, industry: &str, project_type: &str) -> NamingSuggestions {
        get_naming_suggestions(industry, project_type)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Index of the first candidate with the highest confidence
fn select_best(candidates: &[NameCandidate]) -> usize {
    let mut best = 0;
    for (i, candidate) in candidates.iter().enumerate().skip(1) {
        if candidate.confidence > candidates[best].confidence {
            best = i;
        }
    }
    best
}

/// Per-strategy explanation plus a closing sentence quoting the name
fn explain(chosen: &NameCandidate, industry: &str, concepts: &[String], language: Language) -> String {
    let concept_list = concepts.join(", ");
    let has_concepts = !concepts.is_empty();

    let body = match (language, chosen.strategy) {
        (Language::French, Strategy::Template) if has_concepts => format!(
            "Ce nom reprend le vocabulaire du secteur {} et met en avant vos concepts clés : {}.",
            industry, concept_list
        ),
        (Language::French, Strategy::Template) => format!(
            "Ce nom reprend le vocabulaire typique du secteur {}.",
            industry
        ),
        (Language::French, Strategy::Descriptive) if has_concepts => format!(
            "Ce nom décrit directement le projet à partir de {}.",
            concept_list
        ),
        (Language::French, Strategy::Descriptive) => {
            "Ce nom décrit directement le type de projet.".to_string()
        }
        (Language::French, Strategy::Creative) => format!(
            "Ce nom associe de façon originale les idées fortes du projet : {}.",
            concept_list
        ),
        (Language::French, Strategy::Professional) if has_concepts => format!(
            "Ce nom adopte un ton professionnel adapté au secteur {}, centré sur {}.",
            industry, concept_list
        ),
        (Language::French, Strategy::Professional) => format!(
            "Ce nom adopte un ton professionnel adapté au secteur {}.",
            industry
        ),
        (Language::English, Strategy::Template) if has_concepts => format!(
            "This name draws on {} industry vocabulary and highlights your key concepts: {}.",
            industry, concept_list
        ),
        (Language::English, Strategy::Template) => format!(
            "This name draws on typical {} industry vocabulary.",
            industry
        ),
        (Language::English, Strategy::Descriptive) if has_concepts => format!(
            "This name describes the project directly from {}.",
            concept_list
        ),
        (Language::English, Strategy::Descriptive) => {
            "This name describes the type of project directly.".to_string()
        }
        (Language::English, Strategy::Creative) => format!(
            "This name creatively combines the project's strongest ideas: {}.",
            concept_list
        ),
        (Language::English, Strategy::Professional) if has_concepts => format!(
            "This name takes a professional tone suited to the {} industry, centered on {}.",
            industry, concept_list
        ),
        (Language::English, Strategy::Professional) => format!(
            "This name takes a professional tone suited to the {} industry.",
            industry
        ),
    };

    let closing = match language {
        Language::French => format!(
            "« {} » est court, facile à retenir et cohérent avec votre projet.",
            chosen.name
        ),
        Language::English => format!(
            "\"{}\" is short, memorable and consistent with your project.",
            chosen.name
        ),
    };

    format!("{} {}", body, closing)
}

/// Vocabulary hints plus five deterministic example names
pub fn get_naming_suggestions(industry: &str, project_type: &str) -> NamingSuggestions {
    let set = templates::templates(industry);
    let type_suffixes = templates::project_type_suffixes(project_type);

    let owned = |words: &[&str], n: usize| -> Vec<String> {
        words.iter().take(n).map(|w| w.to_string()).collect()
    };

    let mut examples: Vec<String> = set
        .prefixes
        .iter()
        .zip(set.suffixes.iter())
        .take(3)
        .map(|(p, s)| format!("{}{}", p, s))
        .collect();
    examples.push(format!("{} {}", set.core_words[0], type_suffixes[0]));
    examples.push(format!("{}{}", set.prefixes[0], set.core_words[1]));

    NamingSuggestions {
        prefixes: owned(set.prefixes, 5),
        suffixes: owned(set.suffixes, 5),
        descriptive_words: owned(set.descriptive_words, 3),
        examples,
    }
}
