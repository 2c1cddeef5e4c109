//! Name synthesizers
//!
//! Four independent strategies. Each is a pure function of its inputs plus
//! the random generator it is handed, so a seeded `StdRng` reproduces the
//! exact same names. None of them fails on an empty concept list.

use crate::templates::{self, NameTemplateSet};
use crate::types::Strategy;
use rand::seq::SliceRandom;
use rand::Rng;

/// Inputs shared by every strategy
#[derive(Debug, Clone, Copy)]
pub struct NamingContext<'a> {
    pub concepts: &'a [String],
    pub industry: &'a str,
    pub project_type: &'a str,
    pub complexity: &'a str,
}

/// Upper-case first letter, rest lower-case
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Random element of a non-empty static list
fn pick<R: Rng + ?Sized>(words: &[&'static str], rng: &mut R) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Run one strategy
pub fn synthesize<R: Rng + ?Sized>(strategy: Strategy, ctx: &NamingContext, rng: &mut R) -> String {
    match strategy {
        Strategy::Template => template_name(ctx, rng),
        Strategy::Descriptive => descriptive_name(ctx, rng),
        Strategy::Creative => creative_name(ctx, rng),
        Strategy::Professional => professional_name(ctx, rng),
    }
}

/// Industry vocabulary wrapped around the lead concept
pub fn template_name<R: Rng + ?Sized>(ctx: &NamingContext, rng: &mut R) -> String {
    let set: &NameTemplateSet = templates::templates(ctx.industry);

    let Some(first) = ctx.concepts.first() else {
        return format!("{}{}", pick(set.prefixes, rng), pick(set.suffixes, rng));
    };

    let concept = title_case(first);
    match rng.gen_range(0..4) {
        0 => format!("{}{}", pick(set.prefixes, rng), concept),
        1 => format!("{}{}", concept, pick(set.suffixes, rng)),
        2 => format!(
            "{}{}{}",
            pick(set.prefixes, rng),
            concept,
            pick(set.suffixes, rng)
        ),
        _ => format!("{} {}", concept, pick(set.descriptive_words, rng)),
    }
}

/// Lead concept plus a word describing the project type
pub fn descriptive_name<R: Rng + ?Sized>(ctx: &NamingContext, rng: &mut R) -> String {
    match ctx.concepts.first() {
        Some(first) => format!(
            "{} {}",
            title_case(first),
            pick(templates::project_type_suffixes(ctx.project_type), rng)
        ),
        None => format!("My {}", ctx.project_type),
    }
}

/// Combinations of the two lead concepts; needs at least two
pub fn creative_name<R: Rng + ?Sized>(ctx: &NamingContext, rng: &mut R) -> String {
    let [first, second, ..] = ctx.concepts else {
        return template_name(ctx, rng);
    };

    let c1 = title_case(first);
    let c2 = title_case(second);
    match rng.gen_range(0..5) {
        0 => format!("{}{}", c1, c2),
        1 => format!(
            "{}{}",
            pick(templates::complexity_modifiers(ctx.complexity), rng),
            c1
        ),
        2 => format!("{} {}", c1, c2),
        3 => format!("{}X", c1),
        _ => format!("{} Pro", c1),
    }
}

/// Lead concept (or the industry itself) plus an industry pattern phrase
pub fn professional_name<R: Rng + ?Sized>(ctx: &NamingContext, rng: &mut R) -> String {
    let pattern = pick(templates::professional_patterns(ctx.industry), rng);
    match ctx.concepts.first() {
        Some(first) => format!("{} {}", title_case(first), pattern),
        None => format!("{} {}", ctx.industry, pattern),
    }
}
