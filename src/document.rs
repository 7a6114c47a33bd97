// Content Document - the two-locale JSON blob behind one block or item
// Normalizes the legacy flat shape and malformed branches on read

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

/// Content locale. Editors have exactly one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

/// Persisted content for one block instance or collection item, held in the
/// locale-split shape. Writes always produce this shape; reads accept the
/// pre-migration flat shape as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub en: Map<String, Value>,
    pub ar: Map<String, Value>,
}

impl ContentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a stored blob into the split shape.
    ///
    /// - Locale-split input keeps its branches (non-object branches
    ///   coerced to empty).
    /// - Legacy flat input seeds both branches, so the first save after
    ///   migration produces a complete split document.
    /// - Anything else yields an empty document.
    pub fn from_value(stored: &Value) -> Self {
        match stored {
            Value::Object(map) if map.contains_key("en") || map.contains_key("ar") => Self {
                en: coerce_object(map.get("en")),
                ar: coerce_object(map.get("ar")),
            },
            Value::Object(map) => Self {
                en: map.clone(),
                ar: map.clone(),
            },
            _ => {
                debug!("Stored content is not an object, starting from empty document");
                Self::new()
            }
        }
    }

    pub fn branch(&self, locale: Locale) -> &Map<String, Value> {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }

    pub fn branch_mut(&mut self, locale: Locale) -> &mut Map<String, Value> {
        match locale {
            Locale::En => &mut self.en,
            Locale::Ar => &mut self.ar,
        }
    }

    pub fn get(&self, locale: Locale, field: &str) -> Option<&Value> {
        self.branch(locale).get(field)
    }

    /// The full persisted shape. Callers always store the whole document.
    pub fn to_value(&self) -> Value {
        json!({
            "en": Value::Object(self.en.clone()),
            "ar": Value::Object(self.ar.clone()),
        })
    }
}

fn coerce_object(value: Option<&Value>) -> Map<String, Value> {
    match value.and_then(Value::as_object) {
        Some(map) => map.clone(),
        None => {
            if value.is_some() {
                debug!("Locale branch is not an object, coercing to empty");
            }
            Map::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_document_keeps_branches() {
        let stored = json!({"en": {"title": "Hello"}, "ar": {"title": "مرحبا"}});
        let document = ContentDocument::from_value(&stored);

        assert_eq!(document.get(Locale::En, "title"), Some(&json!("Hello")));
        assert_eq!(document.get(Locale::Ar, "title"), Some(&json!("مرحبا")));
    }

    #[test]
    fn test_legacy_flat_document_seeds_both_branches() {
        let stored = json!({"title": "Hello", "image": "/img/a.jpg"});
        let document = ContentDocument::from_value(&stored);

        assert_eq!(document.get(Locale::En, "title"), Some(&json!("Hello")));
        assert_eq!(document.get(Locale::Ar, "title"), Some(&json!("Hello")));
        assert_eq!(document.get(Locale::Ar, "image"), Some(&json!("/img/a.jpg")));
    }

    #[test]
    fn test_malformed_branches_are_coerced() {
        let stored = json!({"en": "not an object", "ar": {"title": "ok"}});
        let document = ContentDocument::from_value(&stored);

        assert!(document.en.is_empty());
        assert_eq!(document.get(Locale::Ar, "title"), Some(&json!("ok")));

        let document = ContentDocument::from_value(&json!(42));
        assert!(document.en.is_empty());
        assert!(document.ar.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let stored = json!({"en": {"a": 1}, "ar": {"a": 2}});
        let document = ContentDocument::from_value(&stored);
        assert_eq!(document.to_value(), stored);
    }
}
