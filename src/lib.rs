//! namesmith - project name generation
//!
//! Turns a free-text project description, an industry, a project type and a
//! complexity level into a recommended project name, three alternatives and
//! a short explanation. Also scores arbitrary names against a set of naming
//! heuristics.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use namesmith::{NameGenerator, validate_name};
//!
//! // Seeded generator: same inputs, same names
//! let mut generator = NameGenerator::seeded(42);
//! let result = generator.generate_project_name(
//!     "Application web de gestion d'hôpital avec télémédecine",
//!     "Healthcare",
//!     "Application Web",
//!     "complexe",
//!     "french",
//! );
//!
//! let check = validate_name(&result.recommended_name);
//! println!("{} scored {:.1}/10", result.recommended_name, check.score);
//! ```
//!
//! # Architecture
//!
//! ```text
//! description ──▶ concepts ──▶ template ─────┐
//!                  (stopwords)  descriptive ──┤
//!                               creative ─────┼──▶ select max confidence ──▶ NameResult
//!                               professional ─┘         (cached by fingerprint)
//! ```

pub mod cache;
pub mod concepts;
pub mod convenience;
pub mod generator;
pub mod stopwords;
pub mod synthesis;
pub mod templates;
pub mod types;
pub mod validate;

// Core types
pub use generator::{GeneratorConfig, NameGenerator};
pub use types::*;

// Building blocks
pub use cache::{fingerprint, NameCache};
pub use stopwords::{BundledStopwords, DirStopwords, LayeredStopwords, ResourceError, StopwordSource};
pub use templates::{templates, NameTemplateSet};

// Simple mode
pub use convenience::{extract_key_concepts, generate_project_name, get_naming_suggestions, validate_name};
