//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SynonymsArgs};
use crate::error::Result;
use crate::store::RejectedRow;

/// Result structure for applying a wordlist.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResult {
    pub output: String,
    pub scope: String,
    pub augmented: bool,
    pub entries_applied: usize,
}

/// Filter key derived for a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct SlugResult {
    pub word: String,
    pub slug: String,
    pub filter_key: String,
}

/// Result structure for wordlist validation.
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub path: String,
    pub scope: String,
    pub accepted: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SynonymsArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Render a JSON document honoring `--pretty`.
pub fn render_json<T: Serialize>(value: &T, args: &SynonymsArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SynonymsArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match &value {
        serde_json::Value::Array(items) => {
            for item in items {
                output_generic_human(item, args)?;
            }
            Ok(())
        }
        _ => output_generic_human(&value, args),
    }
}

fn output_generic_human(value: &serde_json::Value, _args: &SynonymsArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{}: {}", key, format_value(val));
            }
        }
        _ => println!("{}", format_value(value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SynonymsArgs) -> Result<()> {
    println!("{}", render_json(result, args)?);
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let fields = obj
                .iter()
                .map(|(key, val)| format!("{key}={}", format_value(val)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{{{fields}}}")
        }
        serde_json::Value::Null => "null".to_string(),
    }
}
