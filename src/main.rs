//! namesmith CLI
//!
//! Run with: cargo run -- "<project description>" [--industry=X] [--type=X]
//!                        [--complexity=X] [--language=X] [--seed=N] [--json]
//!
//! Other commands:
//!   --validate <name>                 Score a name
//!   --concepts <text> [--language=X]  Show extracted key concepts
//!   --suggest [--industry=X] [--type=X]

use anyhow::{Context, Result};
use namesmith::{templates, validate_name, GeneratorConfig, NameGenerator};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let level = if args.iter().any(|a| a == "--verbose") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let json_output = args.iter().any(|a| a == "--json");
    let positional: String = args[1..]
        .iter()
        .filter(|a| !a.starts_with("--"))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    match args.get(1).map(|s| s.as_str()) {
        Some("--validate") => run_validate(&validate_target(&args), json_output),
        Some("--concepts") => run_concepts(&args, &positional, json_output),
        Some("--suggest") => run_suggest(&args, json_output),
        Some("--industries") => {
            for industry in templates::industries() {
                println!("{}", industry);
            }
            Ok(())
        }
        Some("--help") | Some("-h") | None => {
            print_usage();
            Ok(())
        }
        Some(_) if positional.trim().is_empty() => {
            print_usage();
            anyhow::bail!("missing project description")
        }
        Some(_) => run_generate(&args, &positional, json_output),
    }
}

/// Value of a `--name=value` flag
fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    let prefix = format!("--{}=", name);
    args.iter().find_map(|a| a.strip_prefix(prefix.as_str()))
}

/// Name given to `--validate`: everything after the command except output flags
fn validate_target(args: &[String]) -> String {
    args.iter()
        .skip(2)
        .filter(|a| *a != "--json" && *a != "--verbose")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

fn get_stopwords_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("NAMESMITH_STOPWORDS_DIR") {
        return Some(PathBuf::from(dir));
    }
    // XDG data dir on Linux, ~/Library/Application Support on macOS
    let dir = dirs::data_dir()?.join("namesmith").join("stopwords");
    dir.is_dir().then_some(dir)
}

fn build_generator(args: &[String]) -> Result<NameGenerator> {
    let seed = flag(args, "seed")
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("--seed expects an unsigned integer")?;

    let stopwords_dir = get_stopwords_dir();
    if let Some(dir) = &stopwords_dir {
        tracing::info!("Loading stopword lists from {:?}", dir);
    }

    Ok(NameGenerator::from_config(&GeneratorConfig {
        seed,
        stopwords_dir,
        ..Default::default()
    }))
}

fn run_generate(args: &[String], description: &str, json_output: bool) -> Result<()> {
    let industry = flag(args, "industry").unwrap_or("Technology");
    let project_type = flag(args, "type").unwrap_or("Application Web");
    let complexity = flag(args, "complexity").unwrap_or("moyen");
    let language = flag(args, "language").unwrap_or(namesmith::convenience::DEFAULT_LANGUAGE);

    if !templates::is_known_industry(industry) {
        tracing::warn!("Unknown industry '{}', using Technology vocabulary", industry);
    }

    let mut generator = build_generator(args)?;
    let result = generator.generate_project_name(description, industry, project_type, complexity, language);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n  {}  ({}, {:.0}%)", result.recommended_name, result.name_type.name(), result.confidence * 100.0);
    println!("\n  {}", result.reasoning);
    if !result.key_concepts_used.is_empty() {
        println!("\n  Key concepts: {}", result.key_concepts_used.join(", "));
    }
    println!("\n  Alternatives:");
    for alt in &result.alternatives {
        println!("    • {}", alt);
    }
    println!();
    Ok(())
}

fn run_validate(name: &str, json_output: bool) -> Result<()> {
    let validation = validate_name(name);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&validation)?);
        return Ok(());
    }

    let status = if validation.is_valid { "valid" } else { "invalid" };
    println!("\n  \"{}\" is {} - score {:.1}/10", name, status, validation.score);
    for issue in &validation.issues {
        println!("    ⚠ {}", issue);
    }
    for rec in &validation.recommendations {
        println!("    → {}", rec);
    }
    println!();
    Ok(())
}

fn run_concepts(args: &[String], text: &str, json_output: bool) -> Result<()> {
    let language = flag(args, "language").unwrap_or(namesmith::convenience::DEFAULT_LANGUAGE);
    let mut generator = build_generator(args)?;
    let concepts = generator.extract_key_concepts(text, language);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&concepts)?);
    } else if concepts.is_empty() {
        println!("No key concepts found");
    } else {
        println!("{}", concepts.join(", "));
    }
    Ok(())
}

fn run_suggest(args: &[String], json_output: bool) -> Result<()> {
    let industry = flag(args, "industry").unwrap_or("Technology");
    let project_type = flag(args, "type").unwrap_or("Application Web");
    let suggestions = namesmith::get_naming_suggestions(industry, project_type);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    println!("\n  Prefixes:          {}", suggestions.prefixes.join(", "));
    println!("  Suffixes:          {}", suggestions.suffixes.join(", "));
    println!("  Descriptive words: {}", suggestions.descriptive_words.join(", "));
    println!("  Examples:          {}", suggestions.examples.join(", "));
    println!();
    Ok(())
}

fn print_usage() {
    println!("namesmith - project name generator\n");
    println!("Usage:");
    println!("  namesmith <description> [--industry=X] [--type=X] [--complexity=X]");
    println!("            [--language=french|english] [--seed=N] [--json]");
    println!("  namesmith --validate <name> [--json]");
    println!("  namesmith --concepts <text> [--language=X] [--json]");
    println!("  namesmith --suggest [--industry=X] [--type=X] [--json]");
    println!("  namesmith --industries");
    println!("\nAdd --verbose for debug logging.");
}
