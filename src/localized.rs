// Localized Content Reads - branch selection for the public renderer

use serde_json::Value;

use crate::document::Locale;
use crate::schema::FieldDefinition;

/// Read one field from a stored content blob for a locale.
///
/// Arabic reads prefer the Arabic branch; shared fields fall back to the
/// English value when the Arabic one is empty (documents saved before the
/// mirroring guarantee existed). Documents with no locale split fall back
/// to the root-level value for either locale.
pub fn localized_value(document: &Value, locale: Locale, field: &str, shared: bool) -> Value {
    let en = document.get("en");
    let ar = document.get("ar");

    if en.is_none() && ar.is_none() {
        return document.get(field).cloned().unwrap_or(Value::Null);
    }

    match locale {
        Locale::Ar => {
            let value = ar.and_then(|branch| branch.get(field));
            if shared && is_empty(value) {
                en.and_then(|branch| branch.get(field))
                    .cloned()
                    .unwrap_or(Value::Null)
            } else {
                value.cloned().unwrap_or(Value::Null)
            }
        }
        Locale::En => en
            .and_then(|branch| branch.get(field))
            .cloned()
            .unwrap_or(Value::Null),
    }
}

/// Same read, with sharedness taken from the field definition
pub fn localized_field(document: &Value, locale: Locale, field: &FieldDefinition) -> Value {
    localized_value(document, locale, &field.name, field.kind.is_shared())
}

/// Convenience accessor for text-like fields
pub fn localized_text(document: &Value, locale: Locale, field: &str) -> String {
    match localized_value(document, locale, field, false) {
        Value::String(text) => text,
        _ => String::new(),
    }
}

fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn split_document() -> Value {
        json!({
            "en": {"title": "Hello", "image": "/img/a.jpg", "note": ""},
            "ar": {"title": "مرحبا", "image": "", "note": ""},
        })
    }

    #[test]
    fn test_english_reads_english_branch() {
        let document = split_document();
        assert_eq!(
            localized_value(&document, Locale::En, "title", false),
            json!("Hello")
        );
    }

    #[test]
    fn test_arabic_reads_arabic_branch() {
        let document = split_document();
        assert_eq!(
            localized_value(&document, Locale::Ar, "title", false),
            json!("مرحبا")
        );
    }

    #[test]
    fn test_empty_shared_arabic_falls_back_to_english() {
        let document = split_document();
        assert_eq!(
            localized_value(&document, Locale::Ar, "image", true),
            json!("/img/a.jpg")
        );
    }

    #[test]
    fn test_empty_text_field_does_not_fall_back() {
        let document = split_document();
        assert_eq!(localized_value(&document, Locale::Ar, "note", false), json!(""));
    }

    #[test]
    fn test_legacy_flat_document_reads_root() {
        let document = json!({"title": "Old school"});
        assert_eq!(
            localized_value(&document, Locale::Ar, "title", false),
            json!("Old school")
        );
        assert_eq!(
            localized_value(&document, Locale::En, "title", false),
            json!("Old school")
        );
    }

    #[test]
    fn test_missing_field_is_null() {
        let document = split_document();
        assert_eq!(localized_value(&document, Locale::En, "ghost", false), Value::Null);
    }

    #[test]
    fn test_localized_text_helper() {
        let document = split_document();
        assert_eq!(localized_text(&document, Locale::En, "title"), "Hello");
        assert_eq!(localized_text(&document, Locale::En, "ghost"), "");
    }
}
