//! Catalog Linter: validates rule catalogs and reports keyword shadowing.
//!
//! Usage: catalog_linter [<catalog.ron | dir>...]
//!
//! With no paths the built-in catalog is checked.

use anyhow::{Context, Result};
use cinematic_brief::core::catalog::Catalog;
use cinematic_brief::core::classify::RuleSet;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog_linter")]
#[command(about = "Check brief catalogs for invalid or unreachable rules", long_about = None)]
struct Args {
    /// Catalog files or directories of `.ron` catalogs
    paths: Vec<PathBuf>,

    /// Treat shadowed keywords as errors too
    #[arg(long)]
    strict: bool,
}

#[derive(Default)]
struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut report = Report::default();

    if args.paths.is_empty() {
        println!("Checking built-in catalog");
        lint_catalog("built-in", &Catalog::builtin(), args.strict, &mut report);
    } else {
        let mut files = Vec::new();
        for path in &args.paths {
            collect_ron_files(path, &mut files)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
        }
        for file in &files {
            let label = file.display().to_string();
            match Catalog::load_from_ron(file) {
                Ok(catalog) => {
                    println!("  Loaded: {}", label);
                    lint_catalog(&label, &catalog, args.strict, &mut report);
                }
                Err(e) => report.errors.push(format!("{}: {}", label, e)),
            }
        }
    }

    println!("\n=== Catalog Lint Report ===\n");

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("All checks passed!");
    }
    for warning in &report.warnings {
        println!("WARNING: {}", warning);
    }
    for error in &report.errors {
        println!("ERROR: {}", error);
    }
    println!(
        "\nSummary: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    if !report.errors.is_empty() {
        process::exit(1);
    }
    Ok(())
}

fn collect_ron_files(path: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    if path.is_file() {
        files.push(path.to_path_buf());
        return Ok(());
    }
    let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    for entry in entries {
        if entry.is_dir() {
            collect_ron_files(&entry, files)?;
        } else if entry.extension().and_then(|s| s.to_str()) == Some("ron") {
            files.push(entry);
        }
    }
    Ok(())
}

fn lint_catalog(label: &str, catalog: &Catalog, strict: bool, report: &mut Report) {
    lint_rules(label, "moods", &catalog.moods, strict, report);
    lint_rules(label, "styles", &catalog.styles, strict, report);

    if catalog.scenes.len() < 3 {
        report.warnings.push(format!(
            "{}: only {} scene templates; short briefs will repeat templates",
            label,
            catalog.scenes.len()
        ));
    }
}

fn lint_rules(label: &str, section: &str, rules: &RuleSet, strict: bool, report: &mut Report) {
    debug!(label, section, rules = rules.rules.len(), "linting rule set");

    for shadowed in rules.shadowed_keywords() {
        let msg = format!(
            "{}: {} rule {} keyword '{}' is shadowed by rule {} (\"{}\")",
            label,
            section,
            shadowed.rule,
            shadowed.keyword,
            shadowed.shadowed_by,
            rules.rules[shadowed.shadowed_by].descriptor
        );
        if strict {
            report.errors.push(msg);
        } else {
            report.warnings.push(msg);
        }
    }

    for idx in rules.fully_shadowed_rules() {
        report.errors.push(format!(
            "{}: {} rule {} (\"{}\") can never match",
            label, section, idx, rules.rules[idx].descriptor
        ));
    }

    for (idx, rule) in rules.rules.iter().enumerate() {
        let mut seen = rustc_hash::FxHashSet::default();
        for keyword in &rule.keywords {
            if !seen.insert(keyword.as_str()) {
                report.warnings.push(format!(
                    "{}: {} rule {} lists '{}' twice",
                    label, section, idx, keyword
                ));
            }
        }
    }
}
