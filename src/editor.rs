// Locale-Aware Content Editor - merge engine for two-locale block content
// One locale is edited at a time. Shared media fields are authored in the
// English branch only and mirrored into Arabic after every write.

use serde_json::Value;
use tracing::debug;

use crate::document::{ContentDocument, Locale};
use crate::error::{CmsError, CmsResult};
use crate::registry;
use crate::resolver;
use crate::schema::{FieldKind, VariantSchema};

/// Editing state for one block instance: the resolved schema, the full
/// two-branch document, and the locale currently being edited.
pub struct ContentEditor {
    type_value: String,
    variant_id: String,
    schema: &'static VariantSchema,
    document: ContentDocument,
    active_locale: Locale,
    raw_error: Option<String>,
}

impl ContentEditor {
    /// Open an editor over stored content. The document is fully resolved
    /// up front, so every schema field is present from the first render.
    pub fn new(type_value: &str, variant_id: &str, stored: &Value) -> Self {
        let schema = registry::effective_variant_schema(type_value, variant_id);
        let document = resolver::resolve_document(type_value, &schema.id, stored);

        Self {
            type_value: type_value.to_string(),
            variant_id: schema.id.clone(),
            schema,
            document,
            active_locale: Locale::En,
            raw_error: None,
        }
    }

    pub fn block_type(&self) -> &str {
        &self.type_value
    }

    pub fn variant_id(&self) -> &str {
        &self.variant_id
    }

    pub fn schema(&self) -> &VariantSchema {
        self.schema
    }

    /// The full two-branch document. Callers persist this whole value on
    /// every save; there are no partial patches.
    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn active_locale(&self) -> Locale {
        self.active_locale
    }

    pub fn set_active_locale(&mut self, locale: Locale) {
        self.active_locale = locale;
    }

    /// The value set rendered for the active locale
    pub fn visible_values(&self) -> &serde_json::Map<String, Value> {
        self.document.branch(self.active_locale)
    }

    pub fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.schema.field(name).map(|f| f.kind)
    }

    /// Whether the field may be edited in the active locale. Shared fields
    /// are only editable from the English tab; the Arabic view renders them
    /// as a disabled notice instead of an input.
    pub fn is_field_editable(&self, name: &str) -> bool {
        match self.field_kind(name) {
            Some(kind) if kind.is_shared() => self.active_locale == Locale::En,
            Some(_) => true,
            None => false,
        }
    }

    /// Apply a single field edit. Shared fields always land in the English
    /// branch; everything else lands in the active locale's branch. Every
    /// write ends with a shared-field sync pass, so the Arabic branch can
    /// never drift from English on media fields.
    pub fn apply_field_change(&mut self, name: &str, value: Value) {
        let Some(kind) = self.field_kind(name) else {
            debug!("Ignoring change to '{}': not in schema '{}'", name, self.schema.id);
            return;
        };

        if kind.is_shared() {
            self.document.en.insert(name.to_string(), value);
        } else {
            self.document
                .branch_mut(self.active_locale)
                .insert(name.to_string(), value);
        }

        resolver::sync_shared_fields(self.schema, &mut self.document);
    }

    pub fn can_add_item(&self, name: &str) -> bool {
        let Some(field) = self.schema.field(name) else {
            return false;
        };
        let len = self.list_len(name);
        field.max_items.map(|max| len < max).unwrap_or(true)
    }

    pub fn can_remove_item(&self, name: &str) -> bool {
        let Some(field) = self.schema.field(name) else {
            return false;
        };
        self.list_len(name) > field.min_items.unwrap_or(0)
    }

    /// Append a default-filled item to a list field in the active locale's
    /// branch. Returns the new item's index.
    pub fn add_list_item(&mut self, name: &str) -> CmsResult<usize> {
        let field = self
            .schema
            .field(name)
            .filter(|f| f.kind == FieldKind::List)
            .ok_or_else(|| {
                CmsError::Validation(format!("'{}' is not a list field", name))
            })?;

        let item = Value::Object(resolver::create_list_item_defaults(field));
        let max_items = field.max_items;

        let items = self.list_values_mut(name);
        if let Some(max) = max_items {
            if items.len() >= max {
                return Err(CmsError::ListBounds(format!(
                    "'{}' already has the maximum of {} items",
                    name, max
                )));
            }
        }

        items.push(item);
        let index = items.len() - 1;

        resolver::sync_shared_fields(self.schema, &mut self.document);
        Ok(index)
    }

    /// Remove one item from a list field in the active locale's branch
    pub fn remove_list_item(&mut self, name: &str, index: usize) -> CmsResult<()> {
        let field = self
            .schema
            .field(name)
            .filter(|f| f.kind == FieldKind::List)
            .ok_or_else(|| {
                CmsError::Validation(format!("'{}' is not a list field", name))
            })?;

        let min_items = field.min_items.unwrap_or(0);

        let items = self.list_values_mut(name);
        if items.len() <= min_items {
            return Err(CmsError::ListBounds(format!(
                "'{}' cannot go below {} items",
                name, min_items
            )));
        }
        if index >= items.len() {
            return Err(CmsError::Validation(format!(
                "'{}' has no item at index {}",
                name, index
            )));
        }

        items.remove(index);

        resolver::sync_shared_fields(self.schema, &mut self.document);
        Ok(())
    }

    /// Replace the active locale's branch from raw JSON text (the advanced
    /// editor escape hatch). The parsed object is re-resolved against the
    /// schema before committing; on a parse failure the document is left
    /// unchanged and the message is retained on the editor.
    pub fn apply_raw_json(&mut self, text: &str) -> CmsResult<()> {
        let parsed: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => {
                let message = err.to_string();
                self.raw_error = Some(message.clone());
                return Err(CmsError::InvalidJson(message));
            }
        };

        if !parsed.is_object() {
            let message = "expected a JSON object".to_string();
            self.raw_error = Some(message.clone());
            return Err(CmsError::InvalidJson(message));
        }

        *self.document.branch_mut(self.active_locale) =
            resolver::resolve_branch(self.schema, &parsed);
        resolver::sync_shared_fields(self.schema, &mut self.document);
        self.raw_error = None;
        Ok(())
    }

    /// The last raw-JSON parse error, until a successful apply clears it
    pub fn raw_error(&self) -> Option<&str> {
        self.raw_error.as_deref()
    }

    /// Switch the block to another variant, re-resolving the current
    /// content against the new schema. Fields with matching names carry
    /// over, new fields get defaults, old-only fields are discarded.
    pub fn switch_variant(&mut self, variant_id: &str) {
        let schema = registry::effective_variant_schema(&self.type_value, variant_id);
        let stored = self.document.to_value();

        self.schema = schema;
        self.variant_id = schema.id.clone();
        self.document = resolver::resolve_document(&self.type_value, &self.variant_id, &stored);
    }

    fn list_len(&self, name: &str) -> usize {
        self.document
            .get(self.active_locale, name)
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn list_values_mut(&mut self, name: &str) -> &mut Vec<Value> {
        let branch = self.document.branch_mut(self.active_locale);
        let entry = branch
            .entry(name.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !entry.is_array() {
            *entry = Value::Array(Vec::new());
        }
        match entry {
            Value::Array(items) => items,
            _ => unreachable!("coerced to array above"),
        }
    }
}
