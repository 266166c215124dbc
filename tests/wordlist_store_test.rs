//! Integration tests for JSON wordlist stores feeding the mapping builder.

use std::fs;

use elasticpress_synonyms::prelude::*;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_json_store_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wordlist.json");
    fs::write(
        &path,
        r#"{
            "main": {
                "elasticpress_synonyms": [
                    {"word": "car", "synonyms": "automobile, vehicle"},
                    {"word": "", "synonyms": "ignored"},
                    {"word": "tv", "synonyms": "television"}
                ]
            },
            "blog-4": {"elasticpress_synonyms": [{"word": "bike", "synonyms": "bicycle"}]}
        }"#,
    )?;

    let store = JsonWordlistStore::open(&path)?;
    assert_eq!(store.path(), Some(path.as_path()));

    let network = SiteContext::multisite(Scope::new("blog-4"), Scope::root());
    assert_eq!(
        store.entries_for(&network)?,
        vec![
            SynonymEntry::new("car", "automobile, vehicle"),
            SynonymEntry::new("tv", "television"),
        ]
    );

    let standalone = SiteContext::single_site(Scope::new("blog-4"));
    assert_eq!(
        store.entries_for(&standalone)?,
        vec![SynonymEntry::new("bike", "bicycle")]
    );

    Ok(())
}

#[test]
fn test_missing_wordlist_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = JsonWordlistStore::open(temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(SynonymsError::Store(_))));
}

#[test]
fn test_store_entries_into_builder() -> Result<()> {
    let store = JsonWordlistStore::from_json_str(
        r#"[{"word": "Car", "synonyms": "automobile, vehicle"}]"#,
    )?;
    let entries = store.entries_for(&SiteContext::default())?;

    let mapping = json!({
        "settings": {
            "analysis": {
                "filter": {},
                "analyzer": { "default": { "filter": [] } }
            }
        }
    });
    let mapping = build_mapping(mapping, &entries).into_mapping();
    assert_eq!(
        mapping["settings"]["analysis"]["analyzer"]["default"]["filter"],
        json!(["elasticpress_synonyms_car"])
    );

    Ok(())
}

#[test]
fn test_empty_scope_leaves_mapping_unchanged() -> Result<()> {
    let store = JsonWordlistStore::from_json_str(r#"{"main": {"elasticpress_synonyms": null}}"#)?;
    let entries = store.entries(&Scope::root())?;

    let mapping = json!({
        "settings": {
            "analysis": {
                "filter": {},
                "analyzer": { "default": { "filter": ["lowercase"] } }
            }
        }
    });
    let outcome = build_mapping(mapping.clone(), &entries);
    assert_eq!(outcome, BuildOutcome::Unchanged(mapping));

    Ok(())
}

#[test]
fn test_builder_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"filter_prefix": "syn_", "dedupe_analyzer_filters": true}"#)?;

    let config = BuilderConfig::load(&path)?;
    assert_eq!(config.filter_prefix, "syn_");
    assert_eq!(config.analyzer, "default");
    assert!(config.dedupe_analyzer_filters);

    fs::write(&path, r#"{"filter_prefix": ""}"#)?;
    assert!(matches!(
        BuilderConfig::load(&path),
        Err(SynonymsError::Config(_))
    ));

    fs::write(&path, r#"{"layout": "merged"}"#)?;
    assert!(BuilderConfig::load(&path).is_err());

    Ok(())
}
