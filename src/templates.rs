//! Naming templates: the static vocabulary behind every synthesizer
//!
//! Four lookup tables, all immutable:
//! - industry → `NameTemplateSet` (prefixes, core words, suffixes, descriptive words)
//! - project type → descriptive suffixes
//! - complexity → modifier words
//! - industry → professional pattern phrases
//!
//! Every table has a fallback so an unknown key never fails a lookup.
//! Keys match exactly first, then case-insensitively.

use serde::Serialize;

/// The industry used whenever a key is not recognized
pub const DEFAULT_INDUSTRY: &str = "Technology";

/// Vocabulary bound to an industry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameTemplateSet {
    pub industry: &'static str,
    pub prefixes: &'static [&'static str],
    pub core_words: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub descriptive_words: &'static [&'static str],
}

// ============================================================================
// INDUSTRY TEMPLATE SETS
// ============================================================================

const TECHNOLOGY: NameTemplateSet = NameTemplateSet {
    industry: "Technology",
    prefixes: &["Tech", "Digi", "Smart", "Cyber", "Data", "Cloud", "Net", "Code"],
    core_words: &["Logic", "Byte", "Pixel", "Stack", "Matrix", "Vector"],
    suffixes: &["Hub", "Lab", "Works", "Flow", "Sync", "Core", "Forge"],
    descriptive_words: &["Solutions", "Systems", "Technologies", "Labs"],
};

const HEALTHCARE: NameTemplateSet = NameTemplateSet {
    industry: "Healthcare",
    prefixes: &["Med", "Care", "Health", "Vita", "Cura", "Bio", "Well"],
    core_words: &["Care", "Pulse", "Heal", "Life", "Cure", "Vital"],
    suffixes: &["Care", "Med", "Plus", "Link", "Path", "Point", "Line"],
    descriptive_words: &["Santé", "Care", "Wellness", "Medical"],
};

const FINANCE: NameTemplateSet = NameTemplateSet {
    industry: "Finance",
    prefixes: &["Fin", "Pay", "Capi", "Money", "Cash", "Fund", "Trust"],
    core_words: &["Ledger", "Vault", "Coin", "Wealth", "Asset", "Credit"],
    suffixes: &["Pay", "Bank", "Fund", "Wise", "Trust", "Vest", "Flow"],
    descriptive_words: &["Finance", "Capital", "Invest", "Wealth"],
};

const EDUCATION: NameTemplateSet = NameTemplateSet {
    industry: "Education",
    prefixes: &["Edu", "Learn", "Study", "Know", "Skill", "Mind", "Brain"],
    core_words: &["Academy", "Campus", "Class", "Tutor", "Mentor", "Quest"],
    suffixes: &["Academy", "Learn", "School", "Path", "Mind", "Spark", "Up"],
    descriptive_words: &["Academy", "Learning", "Education", "School"],
};

const ECOMMERCE: NameTemplateSet = NameTemplateSet {
    industry: "E-commerce",
    prefixes: &["Shop", "Buy", "Market", "Store", "Deal", "Cart", "Trade"],
    core_words: &["Cart", "Basket", "Bazaar", "Boutique", "Mall", "Outlet"],
    suffixes: &["Shop", "Store", "Mart", "Cart", "Deals", "Market", "Hub"],
    descriptive_words: &["Store", "Market", "Shop", "Boutique"],
};

const ENTERTAINMENT: NameTemplateSet = NameTemplateSet {
    industry: "Entertainment",
    prefixes: &["Fun", "Play", "Joy", "Star", "Show", "Stream", "Beat"],
    core_words: &["Stage", "Scene", "Arena", "Studio", "Vibe", "Wave"],
    suffixes: &["Play", "Fun", "Zone", "Box", "Tube", "Fest", "Live"],
    descriptive_words: &["Studio", "Entertainment", "Live", "Media"],
};

const ENVIRONMENT: NameTemplateSet = NameTemplateSet {
    industry: "Environment",
    prefixes: &["Eco", "Green", "Terra", "Enviro", "Sol", "Aqua", "Leaf"],
    core_words: &["Earth", "Leaf", "Root", "Seed", "Tree", "River"],
    suffixes: &["Earth", "Green", "Life", "Leaf", "Way", "Cycle", "Nest"],
    descriptive_words: &["Green", "Eco", "Sustainable", "Nature"],
};

const INDUSTRIES: &[NameTemplateSet] = &[
    TECHNOLOGY,
    HEALTHCARE,
    FINANCE,
    EDUCATION,
    ECOMMERCE,
    ENTERTAINMENT,
    ENVIRONMENT,
];

// ============================================================================
// PROJECT TYPE, COMPLEXITY AND PATTERN TABLES
// ============================================================================

const PROJECT_TYPE_SUFFIXES: &[(&str, &[&str])] = &[
    ("Application Web", &["Web", "Online", "Portal", "Site"]),
    ("Application Mobile", &["Mobile", "Go", "App", "Pocket"]),
    ("Dashboard", &["Dashboard", "Analytics", "Insight", "View"]),
    ("API", &["API", "Connect", "Link", "Gateway"]),
    ("CMS", &["CMS", "Content", "Publisher", "Editor"]),
    ("E-commerce", &["Shop", "Store", "Market", "Commerce"]),
    ("Système", &["System", "Manager", "Suite", "Control"]),
];

const DEFAULT_PROJECT_TYPE_SUFFIXES: &[&str] = &["Platform", "System", "Pro"];

const COMPLEXITY_MODIFIERS: &[(&str, &[&str])] = &[
    ("simple", &["Easy", "Simple", "Quick", "Lite"]),
    ("moyen", &["Smart", "Pro", "Plus"]),
    ("complexe", &["Advanced", "Ultra", "Max"]),
    ("expert", &["Enterprise", "Elite", "Prime"]),
];

const DEFAULT_COMPLEXITY_MODIFIERS: &[&str] = &["Smart", "Pro"];

const PROFESSIONAL_PATTERNS: &[(&str, &[&str])] = &[
    ("Technology", &["System", "Platform", "Solution", "Engine", "Framework"]),
    ("Healthcare", &["Care", "Health", "Medical", "Clinic", "Wellness"]),
    ("Finance", &["Capital", "Finance", "Invest", "Pay", "Fund"]),
    ("Education", &["Academy", "Learning", "Campus", "Institute", "Scholar"]),
    ("E-commerce", &["Commerce", "Market", "Retail", "Store", "Trade"]),
    ("Entertainment", &["Studio", "Media", "Entertainment", "Live", "Stage"]),
    ("Environment", &["Green", "Eco", "Earth", "Sustain", "Nature"]),
];

/// Exact match first, then a case-insensitive pass
fn lookup<'a, T>(table: &'a [(&'static str, T)], key: &str) -> Option<&'a T> {
    let key = key.trim();
    table
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| table.iter().find(|(k, _)| k.to_lowercase() == key.to_lowercase()))
        .map(|(_, v)| v)
}

fn find_industry(industry: &str) -> Option<&'static NameTemplateSet> {
    let key = industry.trim();
    INDUSTRIES
        .iter()
        .find(|t| t.industry == key)
        .or_else(|| {
            INDUSTRIES
                .iter()
                .find(|t| t.industry.to_lowercase() == key.to_lowercase())
        })
}

/// Template set for an industry, Technology when unknown
pub fn templates(industry: &str) -> &'static NameTemplateSet {
    find_industry(industry).unwrap_or_else(|| {
        tracing::debug!("unknown industry '{}', using {}", industry, DEFAULT_INDUSTRY);
        &TECHNOLOGY
    })
}

/// Whether `industry` has its own template set
pub fn is_known_industry(industry: &str) -> bool {
    find_industry(industry).is_some()
}

/// All industries with a dedicated template set
pub fn industries() -> Vec<&'static str> {
    INDUSTRIES.iter().map(|t| t.industry).collect()
}

pub fn project_type_suffixes(project_type: &str) -> &'static [&'static str] {
    lookup(PROJECT_TYPE_SUFFIXES, project_type)
        .copied()
        .unwrap_or(DEFAULT_PROJECT_TYPE_SUFFIXES)
}

pub fn complexity_modifiers(complexity: &str) -> &'static [&'static str] {
    lookup(COMPLEXITY_MODIFIERS, complexity)
        .copied()
        .unwrap_or(DEFAULT_COMPLEXITY_MODIFIERS)
}

/// Pattern phrases for the professional strategy, Technology when unknown
pub fn professional_patterns(industry: &str) -> &'static [&'static str] {
    lookup(PROFESSIONAL_PATTERNS, industry)
        .or_else(|| lookup(PROFESSIONAL_PATTERNS, DEFAULT_INDUSTRY))
        .copied()
        .unwrap_or(&["System", "Platform", "Solution", "Engine", "Framework"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_industry_has_enough_words() {
        for set in INDUSTRIES {
            assert!(set.prefixes.len() >= 5, "{} prefixes", set.industry);
            assert!(set.core_words.len() >= 2, "{} core words", set.industry);
            assert!(set.suffixes.len() >= 5, "{} suffixes", set.industry);
            assert!(set.descriptive_words.len() >= 3, "{} descriptive", set.industry);
        }
    }

    #[test]
    fn test_industry_names_are_unique() {
        let mut names = industries();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total, "Industry keys should be unique");
    }

    #[test]
    fn test_unknown_industry_falls_back_to_technology() {
        assert_eq!(templates("Astrology").industry, "Technology");
        assert!(!is_known_industry("Astrology"));
        assert_eq!(
            professional_patterns("Astrology"),
            &["System", "Platform", "Solution", "Engine", "Framework"]
        );
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(templates("healthcare").industry, "Healthcare");
        assert!(is_known_industry("  FINANCE "));
        assert_eq!(project_type_suffixes("api")[0], "API");
        assert_eq!(complexity_modifiers("Expert")[0], "Enterprise");
    }

    #[test]
    fn test_project_type_defaults() {
        assert_eq!(project_type_suffixes("Application Web")[0], "Web");
        assert_eq!(project_type_suffixes("Système")[0], "System");
        assert_eq!(
            project_type_suffixes("Spaceship"),
            &["Platform", "System", "Pro"]
        );
    }

    #[test]
    fn test_complexity_defaults() {
        assert_eq!(complexity_modifiers("complexe"), &["Advanced", "Ultra", "Max"]);
        assert_eq!(complexity_modifiers("galactic"), &["Smart", "Pro"]);
    }

    #[test]
    fn test_every_industry_has_patterns() {
        for name in industries() {
            assert!(
                lookup(PROFESSIONAL_PATTERNS, name).is_some(),
                "{} has no professional patterns",
                name
            );
        }
    }
}
