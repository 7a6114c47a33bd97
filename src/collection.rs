// Collection Item Fields - user-defined per-collection field schemas
// Unlike block variants, the schema here travels with the content itself,
// stored as `_schema` metadata inside both locale branches

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::document::{ContentDocument, Locale};
use crate::error::{CmsError, CmsResult};

/// Key under which the field schema is embedded in the content document.
/// Metadata only; never rendered as a field.
pub const SCHEMA_KEY: &str = "_schema";

/// Field types available to collection items. Flat values only; no nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFieldType {
    Text,
    Textarea,
    Image,
    Video,
    Media,
}

impl CollectionFieldType {
    /// Media fields hold locale-independent values, edited in English only
    pub fn is_shared(&self) -> bool {
        matches!(
            self,
            CollectionFieldType::Image | CollectionFieldType::Video | CollectionFieldType::Media
        )
    }
}

/// One entry of the embedded `_schema` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionFieldSpec {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: CollectionFieldType,
}

impl CollectionFieldSpec {
    pub fn new(key: &str, field_type: CollectionFieldType) -> Self {
        Self {
            key: key.to_string(),
            field_type,
        }
    }
}

/// One editor row: the spec plus both locale values
#[derive(Debug, Clone)]
pub struct CollectionFieldRow {
    pub spec: CollectionFieldSpec,
    pub value_en: String,
    pub value_ar: String,
}

/// Editing state for one collection item's fields
#[derive(Debug, Clone, Default)]
pub struct CollectionItemForm {
    rows: Vec<CollectionFieldRow>,
}

impl CollectionItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild editor rows from a stored document. The `_schema` array is
    /// read from the English branch (falling back to Arabic); shared rows
    /// take their Arabic display value from English.
    pub fn load(stored: &Value) -> Self {
        let document = ContentDocument::from_value(stored);
        let specs = read_schema(&document);

        let rows = specs
            .into_iter()
            .map(|spec| {
                let value_en = string_value(document.en.get(&spec.key));
                let value_ar = if spec.field_type.is_shared() {
                    value_en.clone()
                } else {
                    string_value(document.ar.get(&spec.key))
                };
                CollectionFieldRow {
                    spec,
                    value_en,
                    value_ar,
                }
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[CollectionFieldRow] {
        &self.rows
    }

    pub fn add_row(&mut self, key: &str, field_type: CollectionFieldType) {
        self.rows.push(CollectionFieldRow {
            spec: CollectionFieldSpec::new(key, field_type),
            value_en: String::new(),
            value_ar: String::new(),
        });
    }

    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn set_key(&mut self, index: usize, key: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.spec.key = key.to_string();
        }
    }

    /// Write one locale's value for a row. Shared rows are meant to be
    /// written from the English tab only; this layer does not re-sync them
    /// on save, it relies on the editor gate below.
    pub fn set_value(&mut self, index: usize, locale: Locale, value: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            match locale {
                Locale::En => row.value_en = value.to_string(),
                Locale::Ar => row.value_ar = value.to_string(),
            }
        }
    }

    /// Whether a row's value input is enabled for the given locale
    pub fn is_row_editable(&self, index: usize, locale: Locale) -> bool {
        match self.rows.get(index) {
            Some(row) if row.spec.field_type.is_shared() => locale == Locale::En,
            Some(_) => true,
            None => false,
        }
    }

    /// Save-time validation: keys must be non-empty, unique, and must not
    /// collide with the schema metadata key
    pub fn validate(&self) -> CmsResult<()> {
        let mut seen = std::collections::HashSet::new();
        for row in &self.rows {
            let key = row.spec.key.trim();
            if key.is_empty() {
                return Err(CmsError::Validation("Field keys cannot be empty".to_string()));
            }
            if key == SCHEMA_KEY {
                return Err(CmsError::Validation(format!(
                    "'{}' is reserved for schema metadata",
                    SCHEMA_KEY
                )));
            }
            if !seen.insert(key.to_string()) {
                return Err(CmsError::Validation(format!("Duplicate field key '{}'", key)));
            }
        }
        Ok(())
    }

    /// Build the persistable document: each row's English/Arabic value under
    /// its key, with the `_schema` array duplicated into both branches.
    pub fn save(&self) -> CmsResult<ContentDocument> {
        self.validate()?;

        let specs: Vec<&CollectionFieldSpec> = self.rows.iter().map(|r| &r.spec).collect();
        let schema_value = serde_json::to_value(&specs)?;

        let mut en = Map::new();
        let mut ar = Map::new();
        for row in &self.rows {
            en.insert(row.spec.key.clone(), Value::String(row.value_en.clone()));
            ar.insert(row.spec.key.clone(), Value::String(row.value_ar.clone()));
        }
        en.insert(SCHEMA_KEY.to_string(), schema_value.clone());
        ar.insert(SCHEMA_KEY.to_string(), schema_value);

        Ok(ContentDocument { en, ar })
    }
}

fn read_schema(document: &ContentDocument) -> Vec<CollectionFieldSpec> {
    let raw = document
        .en
        .get(SCHEMA_KEY)
        .or_else(|| document.ar.get(SCHEMA_KEY))
        .and_then(Value::as_array);

    let Some(entries) = raw else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(spec) => Some(spec),
            Err(err) => {
                debug!("Skipping malformed _schema entry: {}", err);
                None
            }
        })
        .collect()
}

fn string_value(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_form() -> CollectionItemForm {
        let mut form = CollectionItemForm::new();
        form.add_row("title", CollectionFieldType::Text);
        form.add_row("photo", CollectionFieldType::Image);
        form.set_value(0, Locale::En, "Villa");
        form.set_value(0, Locale::Ar, "فيلا");
        form.set_value(1, Locale::En, "/img/villa.jpg");
        form
    }

    #[test]
    fn test_save_duplicates_schema_into_both_branches() {
        let document = sample_form().save().unwrap();

        let expected_schema = json!([
            {"key": "title", "type": "text"},
            {"key": "photo", "type": "image"},
        ]);
        assert_eq!(document.en[SCHEMA_KEY], expected_schema);
        assert_eq!(document.ar[SCHEMA_KEY], expected_schema);
    }

    #[test]
    fn test_save_splits_values_per_locale() {
        let document = sample_form().save().unwrap();

        assert_eq!(document.en["title"], json!("Villa"));
        assert_eq!(document.ar["title"], json!("فيلا"));
        assert_eq!(document.en["photo"], json!("/img/villa.jpg"));
    }

    #[test]
    fn test_load_round_trip() {
        let saved = sample_form().save().unwrap();
        let form = CollectionItemForm::load(&saved.to_value());

        assert_eq!(form.rows().len(), 2);
        assert_eq!(form.rows()[0].value_en, "Villa");
        assert_eq!(form.rows()[0].value_ar, "فيلا");
        // Shared row mirrors its display value from English
        assert_eq!(form.rows()[1].value_ar, "/img/villa.jpg");
    }

    #[test]
    fn test_load_from_legacy_flat_document() {
        let stored = json!({
            "title": "Old",
            "_schema": [{"key": "title", "type": "text"}],
        });
        let form = CollectionItemForm::load(&stored);

        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].value_en, "Old");
        assert_eq!(form.rows()[0].value_ar, "Old");
    }

    #[test]
    fn test_shared_rows_gated_outside_english() {
        let form = sample_form();

        assert!(form.is_row_editable(0, Locale::Ar));
        assert!(form.is_row_editable(1, Locale::En));
        assert!(!form.is_row_editable(1, Locale::Ar));
    }

    #[test]
    fn test_validation_rejects_bad_keys() {
        let mut form = CollectionItemForm::new();
        form.add_row("", CollectionFieldType::Text);
        assert!(matches!(form.save(), Err(CmsError::Validation(_))));

        let mut form = CollectionItemForm::new();
        form.add_row("title", CollectionFieldType::Text);
        form.add_row("title", CollectionFieldType::Textarea);
        assert!(matches!(form.save(), Err(CmsError::Validation(_))));

        let mut form = CollectionItemForm::new();
        form.add_row(SCHEMA_KEY, CollectionFieldType::Text);
        assert!(form.save().is_err());
    }

    #[test]
    fn test_malformed_schema_entries_are_skipped() {
        let stored = json!({
            "en": {
                "title": "Ok",
                "_schema": [
                    {"key": "title", "type": "text"},
                    {"key": "bad", "type": "carousel"},
                    "garbage",
                ],
            },
            "ar": {},
        });
        let form = CollectionItemForm::load(&stored);

        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].spec.key, "title");
    }
}
