//! Field-group definition for the synonyms options page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SynonymsError};
use crate::mapping::entry::SynonymEntry;

/// Name of the repeater field holding the wordlist.
pub const WORDLIST_FIELD: &str = "elasticpress_synonyms";

/// Options page the field group is attached to.
pub const OPTIONS_PAGE: &str = "acf-options-synonyms";

/// A stored wordlist row before validation: sub-field name to raw value.
pub type RawRow = Map<String, Value>;

/// Kind of form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Repeating group of sub-fields, stored as a list of rows.
    Repeater,
    /// Single-line text.
    Text,
}

/// A form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instructions: String,
    #[serde(default)]
    pub required: bool,
    /// Column width in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_fields: Vec<Field>,
}

impl Field {
    /// Create a text field.
    pub fn text(key: &str, label: &str, name: &str) -> Self {
        Field {
            key: key.to_string(),
            label: label.to_string(),
            name: name.to_string(),
            field_type: FieldType::Text,
            instructions: String::new(),
            required: false,
            width: None,
            layout: None,
            button_label: None,
            sub_fields: Vec::new(),
        }
    }

    /// Create a repeater over `sub_fields`.
    pub fn repeater(key: &str, label: &str, name: &str, sub_fields: Vec<Field>) -> Self {
        Field {
            field_type: FieldType::Repeater,
            sub_fields,
            ..Field::text(key, label, name)
        }
    }

    pub fn instructions(mut self, instructions: &str) -> Self {
        self.instructions = instructions.to_string();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn width(mut self, width: u8) -> Self {
        self.width = Some(width);
        self
    }

    pub fn layout(mut self, layout: &str) -> Self {
        self.layout = Some(layout.to_string());
        self
    }

    pub fn button_label(mut self, label: &str) -> Self {
        self.button_label = Some(label.to_string());
        self
    }
}

/// A `param operator value` rule deciding where a field group is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRule {
    pub param: String,
    pub operator: String,
    pub value: String,
}

/// A group of form fields bound to an admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub key: String,
    pub title: String,
    pub fields: Vec<Field>,
    /// Outer list is OR-ed, inner lists are AND-ed.
    pub location: Vec<Vec<LocationRule>>,
    pub menu_order: i32,
    pub position: String,
    pub style: String,
    pub label_placement: String,
    pub instruction_placement: String,
    pub active: bool,
}

impl FieldGroup {
    /// The synonyms wordlist field group.
    pub fn synonyms() -> Self {
        let word = Field::text("field_57fcc813c8863", "Word", "word")
            .instructions("The original word")
            .required(true)
            .width(20);
        let synonyms = Field::text("field_57fcc820c8864", "Synonyms", "synonyms")
            .instructions("Comma separated list of synonyms")
            .required(true);
        let wordlist = Field::repeater(
            "field_57fcc7f8c8862",
            "Synonyms",
            WORDLIST_FIELD,
            vec![word, synonyms],
        )
        .layout("table")
        .button_label("Add word");

        FieldGroup {
            key: "group_57fcc7ef3b815".to_string(),
            title: "Synonyms".to_string(),
            fields: vec![wordlist],
            location: vec![vec![LocationRule {
                param: "options_page".to_string(),
                operator: "==".to_string(),
                value: OPTIONS_PAGE.to_string(),
            }]],
            menu_order: 0,
            position: "normal".to_string(),
            style: "default".to_string(),
            label_placement: "top".to_string(),
            instruction_placement: "label".to_string(),
            active: true,
        }
    }

    /// Look up a top-level field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The repeater holding the wordlist rows.
    pub fn wordlist_field(&self) -> Result<&Field> {
        self.field(WORDLIST_FIELD)
            .filter(|field| field.field_type == FieldType::Repeater)
            .ok_or_else(|| {
                SynonymsError::schema(format!(
                    "Field group '{}' has no repeater named '{}'",
                    self.key, WORDLIST_FIELD
                ))
            })
    }

    /// Validate a stored row against the wordlist repeater and convert it
    /// into an entry.
    ///
    /// Every required sub-field must hold a non-blank string or a number.
    /// Values are passed on verbatim, without trimming.
    pub fn validate_row(&self, row: &RawRow) -> Result<SynonymEntry> {
        let repeater = self.wordlist_field()?;

        for sub_field in repeater.sub_fields.iter().filter(|f| f.required) {
            match row.get(&sub_field.name).and_then(scalar_text) {
                Some(text) if !text.trim().is_empty() => {}
                Some(_) => {
                    return Err(SynonymsError::schema(format!(
                        "Required field '{}' is blank",
                        sub_field.name
                    )));
                }
                None => {
                    return Err(SynonymsError::schema(format!(
                        "Required field '{}' is missing",
                        sub_field.name
                    )));
                }
            }
        }

        let word = row.get("word").and_then(scalar_text).unwrap_or_default();
        let synonyms = row.get("synonyms").and_then(scalar_text).unwrap_or_default();
        Ok(SynonymEntry::new(word, synonyms))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
