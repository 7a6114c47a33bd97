// Default Value Resolver - resolves stored content against a variant schema
// Always produces a complete, schema-shaped content object; never fails

use serde_json::{Map, Value};

use crate::document::ContentDocument;
use crate::registry;
use crate::schema::{FieldDefinition, FieldKind, VariantSchema};

/// Fully defaulted content for a `(type, variant)` pair with no stored
/// content. Alias for the resolver with empty existing content.
pub fn variant_defaults(type_value: &str, variant_id: &str) -> Map<String, Value> {
    merge_variant_defaults(type_value, variant_id, &Value::Null)
}

/// Resolve one content branch against the schema for `(type, variant)`.
///
/// Unknown variants fall back to the type's default variant, unknown types
/// to the placeholder schema. Every schema field is present in the output;
/// keys not declared by the schema are dropped.
pub fn merge_variant_defaults(
    type_value: &str,
    variant_id: &str,
    existing: &Value,
) -> Map<String, Value> {
    let schema = registry::effective_variant_schema(type_value, variant_id);
    resolve_branch(schema, existing)
}

/// Resolve a branch against an already-resolved schema
pub fn resolve_branch(schema: &VariantSchema, existing: &Value) -> Map<String, Value> {
    resolve_fields(&schema.fields, existing.as_object())
}

/// One minimally-valid item for a list field. Used to pad an array up to
/// `min_items` and by the editor's add-item operation.
pub fn create_list_item_defaults(list_field: &FieldDefinition) -> Map<String, Value> {
    resolve_fields(&list_field.item_fields, None)
}

/// Resolve a stored blob into a complete two-branch document. Legacy flat
/// blobs seed both branches; shared fields are mirrored from English.
pub fn resolve_document(type_value: &str, variant_id: &str, stored: &Value) -> ContentDocument {
    let schema = registry::effective_variant_schema(type_value, variant_id);
    let raw = ContentDocument::from_value(stored);

    let mut document = ContentDocument {
        en: resolve_fields(&schema.fields, Some(&raw.en)),
        ar: resolve_fields(&schema.fields, Some(&raw.ar)),
    };
    sync_shared_fields(schema, &mut document);
    document
}

/// Copy every shared-kind field's current value from the English branch
/// into the Arabic branch. Shared fields are derived there, never authored.
pub fn sync_shared_fields(schema: &VariantSchema, document: &mut ContentDocument) {
    for field in &schema.fields {
        if field.kind.is_shared() {
            let value = document
                .en
                .get(&field.name)
                .cloned()
                .unwrap_or_else(|| field.kind.empty_value());
            document.ar.insert(field.name.clone(), value);
        }
    }
}

fn resolve_fields(
    fields: &[FieldDefinition],
    existing: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut resolved = Map::new();
    for field in fields {
        let current = existing.and_then(|map| map.get(&field.name));
        resolved.insert(field.name.clone(), resolve_field_value(field, current));
    }
    resolved
}

fn resolve_field_value(field: &FieldDefinition, current: Option<&Value>) -> Value {
    if field.kind == FieldKind::List {
        return resolve_list_value(field, current);
    }

    if let Some(value) = current {
        if value_compatible(field.kind, value) {
            return value.clone();
        }
    }

    if let Some(default) = &field.default_value {
        if value_compatible(field.kind, default) {
            return default.clone();
        }
    }

    field.kind.empty_value()
}

fn resolve_list_value(field: &FieldDefinition, current: Option<&Value>) -> Value {
    let source = current
        .and_then(Value::as_array)
        .or_else(|| field.default_value.as_ref().and_then(Value::as_array));

    let mut items: Vec<Value> = source
        .map(|array| {
            array
                .iter()
                .map(|item| Value::Object(resolve_fields(&field.item_fields, item.as_object())))
                .collect()
        })
        .unwrap_or_default();

    // Pad up to min_items; existing items above max_items are kept, the
    // editor enforces the upper bound on add operations
    let min = field.min_items.unwrap_or(0);
    while items.len() < min {
        items.push(Value::Object(create_list_item_defaults(field)));
    }

    Value::Array(items)
}

fn value_compatible(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Number => value.is_number(),
        FieldKind::Switch => value.is_boolean(),
        FieldKind::List => value.is_array(),
        _ => value.is_string(),
    }
}
