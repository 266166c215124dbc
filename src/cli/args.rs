//! Command line argument parsing for ep-synonyms using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mapping::config::{BuilderConfig, FilterLayout};
use crate::store::{Scope, SiteContext};

/// ep-synonyms - merge synonym wordlists into Elasticsearch index settings
#[derive(Parser, Debug, Clone)]
#[command(name = "ep-synonyms")]
#[command(about = "Merge editor-maintained synonym wordlists into Elasticsearch index settings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynonymsArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynonymsArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge a wordlist into an index mapping
    Apply(ApplyArgs),

    /// Show the filter keys derived from words
    Slug(SlugArgs),

    /// Validate a stored wordlist against the field-group schema
    Validate(ValidateArgs),

    /// Print the wordlist field-group schema
    Schema,
}

/// Arguments for applying a wordlist
#[derive(Parser, Debug, Clone)]
pub struct ApplyArgs {
    /// Index mapping document (JSON)
    #[arg(value_name = "MAPPING_FILE")]
    pub mapping: PathBuf,

    /// Wordlist document (JSON)
    #[arg(value_name = "WORDLIST_FILE")]
    pub wordlist: PathBuf,

    /// Site the mapping is built for
    #[arg(short, long, default_value = Scope::ROOT)]
    pub scope: String,

    /// Site is part of a multisite network sharing the root wordlist
    #[arg(long, env = "EP_SYNONYMS_MULTISITE")]
    pub multisite: bool,

    /// Scope holding the network-wide wordlist
    #[arg(long, default_value = Scope::ROOT)]
    pub network_root: String,

    /// Builder configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "EP_SYNONYMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Filter layout, overriding the configuration file
    #[arg(long)]
    pub layout: Option<LayoutArg>,

    /// Do not append filter keys the analyzer already references
    #[arg(long)]
    pub dedupe: bool,

    /// Write the mapping to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

impl ApplyArgs {
    /// Site context described by the scope flags.
    pub fn site_context(&self) -> SiteContext {
        if self.multisite {
            SiteContext::multisite(Scope::new(&self.scope), Scope::new(&self.network_root))
        } else {
            SiteContext::single_site(Scope::new(&self.scope))
        }
    }

    /// Builder configuration: the configuration file, if any, with command
    /// line overrides applied.
    pub fn builder_config(&self) -> Result<BuilderConfig> {
        let mut config = match &self.config {
            Some(path) => BuilderConfig::load(path)?,
            None => BuilderConfig::default(),
        };
        if let Some(layout) = self.layout {
            config.layout = layout.into();
        }
        if self.dedupe {
            config.dedupe_analyzer_filters = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for deriving filter keys
#[derive(Parser, Debug, Clone)]
pub struct SlugArgs {
    /// Words to derive filter keys for
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Filter key prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for validating a wordlist
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Wordlist document (JSON)
    #[arg(value_name = "WORDLIST_FILE")]
    pub wordlist: PathBuf,

    /// Scope to validate
    #[arg(short, long, default_value = Scope::ROOT)]
    pub scope: String,
}

/// Filter layouts selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// One synonym filter per word
    PerEntry,
    /// A single synonym filter with a dedicated analyzer
    Shared,
}

impl From<LayoutArg> for FilterLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::PerEntry => FilterLayout::PerEntry,
            LayoutArg::Shared => FilterLayout::Shared,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_apply() {
        let args = SynonymsArgs::try_parse_from([
            "ep-synonyms",
            "apply",
            "mapping.json",
            "wordlist.json",
            "--scope",
            "blog-2",
            "--multisite",
            "--layout",
            "shared",
            "--dedupe",
        ])
        .unwrap();

        let Command::Apply(apply) = args.command else {
            panic!("Expected apply command");
        };
        assert_eq!(apply.mapping, PathBuf::from("mapping.json"));
        assert_eq!(apply.layout, Some(LayoutArg::Shared));
        assert_eq!(apply.site_context().resolve(), &Scope::root());

        let config = apply.builder_config().unwrap();
        assert_eq!(config.layout, FilterLayout::Shared);
        assert!(config.dedupe_analyzer_filters);
    }

    #[test]
    fn test_apply_defaults() {
        let args =
            SynonymsArgs::try_parse_from(["ep-synonyms", "apply", "m.json", "w.json"]).unwrap();
        let Command::Apply(apply) = args.command else {
            panic!("Expected apply command");
        };
        assert_eq!(apply.site_context(), SiteContext::single_site(Scope::root()));
        assert_eq!(apply.builder_config().unwrap(), BuilderConfig::default());
    }

    #[test]
    fn test_verbosity() {
        let args = SynonymsArgs::try_parse_from(["ep-synonyms", "schema"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SynonymsArgs::try_parse_from(["ep-synonyms", "-vvv", "schema"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = SynonymsArgs::try_parse_from(["ep-synonyms", "schema", "-q", "-v"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_slug_requires_words() {
        assert!(SynonymsArgs::try_parse_from(["ep-synonyms", "slug"]).is_err());
    }
}
