//! Command implementations for the ep-synonyms CLI.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SynonymsError};
use crate::mapping::{BuilderConfig, SynonymMappingBuilder, SynonymEntry};
use crate::schema::FieldGroup;
use crate::store::{JsonWordlistStore, Scope, WordlistSource, validate_rows};

/// Execute a CLI command.
pub fn execute_command(args: SynonymsArgs) -> Result<()> {
    match &args.command {
        Command::Apply(apply_args) => apply_wordlist(apply_args, &args),
        Command::Slug(slug_args) => show_slugs(slug_args, &args),
        Command::Validate(validate_args) => validate_wordlist(validate_args, &args),
        Command::Schema => show_schema(&args),
    }
}

/// Merge a wordlist into a mapping document.
fn apply_wordlist(args: &ApplyArgs, cli_args: &SynonymsArgs) -> Result<()> {
    let config = args.builder_config()?;
    let mapping = load_mapping(&args.mapping)?;
    let store = JsonWordlistStore::open(&args.wordlist)?;

    let site = args.site_context();
    let entries = store.entries_for(&site)?;
    info!(
        "Applying {} wordlist entries from scope '{}'",
        entries.len(),
        site.resolve()
    );

    let builder = SynonymMappingBuilder::new(config);
    let outcome = builder.build(mapping, &entries);

    let unresolved = builder.unresolved_filter_references(outcome.mapping());
    if !unresolved.is_empty() {
        warn!(
            "Analyzer references undefined synonym filters: {}",
            unresolved.join(", ")
        );
    }

    let augmented = outcome.is_augmented();
    let rendered = render_json(outcome.mapping(), cli_args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))?;
            output_result(
                "Mapping written",
                &ApplyResult {
                    output: path.to_string_lossy().to_string(),
                    scope: site.resolve().to_string(),
                    augmented,
                    entries_applied: if augmented { entries.len() } else { 0 },
                },
                cli_args,
            )?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Show the filter key each word maps to.
fn show_slugs(args: &SlugArgs, cli_args: &SynonymsArgs) -> Result<()> {
    let prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| BuilderConfig::default().filter_prefix);
    if prefix.is_empty() {
        return Err(SynonymsError::invalid_argument("prefix must not be empty"));
    }

    let results = slug_results(&args.words, &prefix);
    output_result("Filter keys", &results, cli_args)
}

/// Validate the stored wordlist of one scope.
fn validate_wordlist(args: &ValidateArgs, cli_args: &SynonymsArgs) -> Result<()> {
    let store = JsonWordlistStore::open(&args.wordlist)?;
    let scope = Scope::new(&args.scope);
    let rows = store.rows(&scope)?;
    let report = validate_rows(store.schema(), &rows);

    output_result(
        "Wordlist validated",
        &ValidationResult {
            path: args.wordlist.to_string_lossy().to_string(),
            scope: scope.to_string(),
            accepted: report.accepted.len(),
            rejected: report.rejected,
        },
        cli_args,
    )
}

/// Print the field-group schema.
fn show_schema(cli_args: &SynonymsArgs) -> Result<()> {
    println!("{}", render_json(&FieldGroup::synonyms(), cli_args)?);
    Ok(())
}

fn load_mapping(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        SynonymsError::invalid_argument(format!(
            "Failed to read mapping file '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn slug_results(words: &[String], prefix: &str) -> Vec<SlugResult> {
    words
        .iter()
        .map(|word| {
            let entry = SynonymEntry::new(word.as_str(), "");
            SlugResult {
                word: word.clone(),
                slug: entry.slug(),
                filter_key: entry.filter_key(prefix),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_results() {
        let words = vec!["Car!".to_string(), "Ice Cream".to_string()];
        let results = slug_results(&words, "elasticpress_synonyms_");

        assert_eq!(results[0].slug, "car");
        assert_eq!(results[0].filter_key, "elasticpress_synonyms_car");
        assert_eq!(results[1].filter_key, "elasticpress_synonyms_ice-cream");
    }

    #[test]
    fn test_load_mapping_missing_file() {
        let err = load_mapping(Path::new("/nonexistent/mapping.json")).unwrap_err();
        assert!(matches!(err, SynonymsError::InvalidArgument(_)));
    }
}
