// Block Schema Model - declarative field schemas for content blocks
// Each block type exposes named variants, each described by a field schema

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Block types supported by the page composer. Everything on a page is a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Hero,
    About,
    Features,
    Media,
    Form,
    Cta,
    /// Catch-all for stale stored type values; resolves to the placeholder
    /// definition instead of crashing the editor
    #[serde(other)]
    Unknown,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::About => "about",
            BlockType::Features => "features",
            BlockType::Media => "media",
            BlockType::Form => "form",
            BlockType::Cta => "cta",
            BlockType::Unknown => "unknown",
        }
    }

    /// Parse a stored type string. Returns `None` for unknown values so
    /// callers can fall back instead of failing on stale data.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hero" => Some(BlockType::Hero),
            "about" => Some(BlockType::About),
            "features" => Some(BlockType::Features),
            "media" => Some(BlockType::Media),
            "form" => Some(BlockType::Form),
            "cta" => Some(BlockType::Cta),
            _ => None,
        }
    }
}

/// Field kinds supported by the schema language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Color,
    Select,
    Switch,
    Image,
    Video,
    Media,
    Url,
    CollectionReference,
    List,
}

impl FieldKind {
    /// Shared fields hold locale-independent values (media assets, links).
    /// They are authored once in the English branch and mirrored into Arabic.
    pub fn is_shared(&self) -> bool {
        matches!(
            self,
            FieldKind::Image | FieldKind::Video | FieldKind::Media | FieldKind::Url
        )
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FieldKind::List)
    }

    /// Kind-appropriate empty value used when neither stored content nor a
    /// declared default exists.
    pub fn empty_value(&self) -> Value {
        match self {
            FieldKind::Number => Value::from(0),
            FieldKind::Switch => Value::Bool(false),
            FieldKind::List => Value::Array(Vec::new()),
            _ => Value::String(String::new()),
        }
    }
}

/// One choice in a select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Field definition - one editable slot in a block's content.
/// `name` is the stable JSON property key; everything else is presentation
/// or defaulting metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: FieldKind,
    pub label: String,
    pub placeholder: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub default_value: Option<Value>,
    /// Options for `select` fields
    pub options: Vec<SelectOption>,
    /// Display label for one item of a `list` field
    pub item_label: Option<String>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    /// Child schema for `list` fields (recursive)
    pub item_fields: Vec<FieldDefinition>,
}

impl FieldDefinition {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: name.to_string(),
            placeholder: None,
            description: None,
            required: false,
            default_value: None,
            options: Vec::new(),
            item_label: None,
            min_items: None,
            max_items: None,
            item_fields: Vec::new(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Mark field as required (enforced at save time by editors)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare the default value applied by the resolver
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    /// Add one select option
    pub fn option(mut self, label: &str, value: &str) -> Self {
        self.options.push(SelectOption::new(label, value));
        self
    }

    pub fn item_label(mut self, label: &str) -> Self {
        self.item_label = Some(label.to_string());
        self
    }

    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Child field definitions for a `list` field
    pub fn item_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.item_fields = fields;
        self
    }
}

/// One visual variant of a block type. `id` is globally unique across all
/// variants of all types so stored content survives variant reordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSchema {
    pub id: String,
    pub block_type: BlockType,
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

impl VariantSchema {
    pub fn new(id: &str, block_type: BlockType, name: &str) -> Self {
        Self {
            id: id.to_string(),
            block_type,
            name: name.to_string(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    /// Look up a top-level field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A block type plus its ordered variant catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockTypeDefinition {
    pub block_type: BlockType,
    pub label: String,
    pub description: Option<String>,
    /// Must equal the `id` of one entry in `variants`
    pub default_variant: String,
    pub variants: Vec<VariantSchema>,
}

impl BlockTypeDefinition {
    pub fn new(block_type: BlockType, label: &str, default_variant: &str) -> Self {
        Self {
            block_type,
            label: label.to_string(),
            description: None,
            default_variant: default_variant.to_string(),
            variants: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn variants(mut self, variants: Vec<VariantSchema>) -> Self {
        self.variants = variants;
        self
    }

    pub fn variant(&self, variant_id: &str) -> Option<&VariantSchema> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// The schema of the type's default variant. Registry validation
    /// guarantees the id resolves; an empty schema guards stale handles.
    pub fn default_variant_schema(&self) -> &VariantSchema {
        self.variant(&self.default_variant)
            .unwrap_or_else(|| &self.variants[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_kinds() {
        assert!(FieldKind::Image.is_shared());
        assert!(FieldKind::Video.is_shared());
        assert!(FieldKind::Media.is_shared());
        assert!(FieldKind::Url.is_shared());
        assert!(!FieldKind::Text.is_shared());
        assert!(!FieldKind::CollectionReference.is_shared());
        assert!(!FieldKind::List.is_shared());
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(FieldKind::Text.empty_value(), Value::String(String::new()));
        assert_eq!(FieldKind::Number.empty_value(), Value::from(0));
        assert_eq!(FieldKind::Switch.empty_value(), Value::Bool(false));
        assert_eq!(FieldKind::List.empty_value(), Value::Array(Vec::new()));
    }

    #[test]
    fn test_block_type_roundtrip() {
        assert_eq!(BlockType::parse("hero"), Some(BlockType::Hero));
        assert_eq!(BlockType::parse(BlockType::Cta.as_str()), Some(BlockType::Cta));
        assert_eq!(BlockType::parse("carousel"), None);
    }

    #[test]
    fn test_field_builder() {
        let field = FieldDefinition::new("textAlign", FieldKind::Select)
            .label("Text alignment")
            .default_value("center")
            .option("Left", "left")
            .option("Center", "center")
            .option("Right", "right");

        assert_eq!(field.name, "textAlign");
        assert_eq!(field.options.len(), 3);
        assert_eq!(field.default_value, Some(Value::from("center")));
    }
}
