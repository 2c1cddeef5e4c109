//! Stopword resources
//!
//! Language lists come from a `StopwordSource`. The bundled source ships
//! French and English; `DirStopwords` reads `<dir>/<language>.txt`. A source
//! that cannot serve a language answers with `ResourceError::Unavailable`
//! and the concept extractor falls back to `CUSTOM_STOPWORDS` alone.

use crate::types::Language;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Words that never make a useful concept, whatever the language
pub const CUSTOM_STOPWORDS: &[&str] = &[
    "projet", "project", "application", "système", "system", "plateforme",
    "platform", "solution", "outil", "tool", "faire", "créer", "create",
    "permettre", "permet", "utilisateur", "utilisateurs", "user", "users",
    "nouveau", "nouvelle", "new", "simple", "très", "very",
];

pub const FRENCH_STOPWORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en",
    "et", "eux", "il", "ils", "je", "la", "le", "les", "leur", "lui", "ma",
    "mais", "me", "même", "mes", "moi", "mon", "ne", "nos", "notre", "nous",
    "on", "ou", "par", "pas", "pour", "qu", "que", "qui", "sa", "se", "ses",
    "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos",
    "votre", "vous", "été", "étée", "étées", "étés", "étant", "suis", "es",
    "est", "sommes", "êtes", "sont", "serai", "sera", "serons", "seront",
    "serait", "seraient", "étais", "était", "étions", "étiez", "étaient",
    "fus", "fut", "soit", "soient", "ai", "as", "avons", "avez", "ont",
    "aura", "aurons", "auront", "aurait", "auraient", "avais", "avait",
    "avions", "aviez", "avaient", "eut", "ayant", "ayez", "ayons", "cette",
    "cet", "ceci", "cela", "comme", "donc", "plus", "moins", "tout", "tous",
    "toute", "toutes", "aussi", "entre", "sans", "sous", "vers", "chez",
    "afin", "ainsi", "dont", "où", "quel", "quelle", "quels", "quelles",
];

pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Why a stopword list could not be produced
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("no stopword list available for language '{0}'")]
    Unavailable(String),
    #[error("failed to read stopword list {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Provider of language-specific stopword sets
pub trait StopwordSource: Send {
    fn load(&self, language: &str) -> Result<HashSet<String>, ResourceError>;
}

/// Compiled-in French and English lists
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStopwords;

impl StopwordSource for BundledStopwords {
    fn load(&self, language: &str) -> Result<HashSet<String>, ResourceError> {
        let words = match Language::parse(language) {
            Some(Language::French) => FRENCH_STOPWORDS,
            Some(Language::English) => ENGLISH_STOPWORDS,
            None => return Err(ResourceError::Unavailable(language.to_string())),
        };
        Ok(words.iter().map(|w| w.to_string()).collect())
    }
}

/// Stopword lists stored as `<dir>/<language>.txt`, one word per line
#[derive(Debug, Clone)]
pub struct DirStopwords {
    dir: PathBuf,
}

impl DirStopwords {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, language: &str) -> PathBuf {
        let stem = Language::parse(language)
            .map(|l| l.key().to_string())
            .unwrap_or_else(|| language.trim().to_lowercase());
        self.dir.join(format!("{}.txt", stem))
    }
}

impl StopwordSource for DirStopwords {
    fn load(&self, language: &str) -> Result<HashSet<String>, ResourceError> {
        let path = self.path_for(language);
        if !path.exists() {
            return Err(ResourceError::Unavailable(language.to_string()));
        }

        let content = fs::read_to_string(&path).map_err(|source| ResourceError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(content
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.to_lowercase())
            .collect())
    }
}

/// Tries each source in turn, first success wins
pub struct LayeredStopwords {
    sources: Vec<Box<dyn StopwordSource>>,
}

impl LayeredStopwords {
    pub fn new(sources: Vec<Box<dyn StopwordSource>>) -> Self {
        Self { sources }
    }
}

impl StopwordSource for LayeredStopwords {
    fn load(&self, language: &str) -> Result<HashSet<String>, ResourceError> {
        let mut last_err = ResourceError::Unavailable(language.to_string());
        for source in &self.sources {
            match source.load(language) {
                Ok(words) => return Ok(words),
                Err(e) => {
                    tracing::debug!("stopword source skipped: {}", e);
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_french() {
        let words = BundledStopwords.load("french").unwrap();
        assert!(words.contains("avec"));
        assert!(words.contains("pour"));
        assert!(!words.contains("hôpital"));
    }

    #[test]
    fn test_bundled_english() {
        let words = BundledStopwords.load("en").unwrap();
        assert!(words.contains("the"));
        assert!(words.contains("with"));
    }

    #[test]
    fn test_bundled_unknown_language_is_unavailable() {
        let err = BundledStopwords.load("latin").unwrap_err();
        assert!(matches!(err, ResourceError::Unavailable(ref l) if l == "latin"));
    }

    #[test]
    fn test_dir_stopwords_reads_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("french.txt"),
            "# custom list\nle\n\n  Avec  \nhôpital\n",
        )
        .unwrap();

        let source = DirStopwords::new(dir.path());
        let words = source.load("fr").unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("avec"));
        assert!(words.contains("hôpital"));
    }

    #[test]
    fn test_dir_stopwords_missing_file() {
        let dir = tempdir().unwrap();
        let source = DirStopwords::new(dir.path());
        assert!(matches!(
            source.load("english"),
            Err(ResourceError::Unavailable(_))
        ));
    }

    #[test]
    fn test_layered_falls_through_to_bundled() {
        let dir = tempdir().unwrap();
        let layered = LayeredStopwords::new(vec![
            Box::new(DirStopwords::new(dir.path())),
            Box::new(BundledStopwords),
        ]);
        let words = layered.load("english").unwrap();
        assert!(words.contains("the"));
        assert!(layered.load("latin").is_err());
    }
}
