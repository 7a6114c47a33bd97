// Variant Registry - static catalog mapping each block type to its variants
// Built once at process start; lookups fall back instead of failing so the
// editor never crashes on stale stored type or variant values

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use tracing::warn;

use crate::blocks;
use crate::schema::{BlockType, BlockTypeDefinition, FieldDefinition, FieldKind, VariantSchema};

/// Block schema definition trait - one impl per block family
pub trait BlockSchema {
    /// Block type this family defines
    fn block_type() -> BlockType
    where
        Self: Sized;

    /// The full definition: label, default variant, variant schemas
    fn definition() -> BlockTypeDefinition
    where
        Self: Sized;
}

/// Registry of block type definitions
#[derive(Default)]
pub struct VariantRegistry {
    definitions: HashMap<BlockType, BlockTypeDefinition>,
    /// Declaration order, for stable UI listings
    order: Vec<BlockType>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block family
    pub fn register<T: BlockSchema + 'static>(&mut self) {
        let block_type = T::block_type();
        let definition = T::definition();

        if self.definitions.insert(block_type, definition).is_none() {
            self.order.push(block_type);
        }
    }

    pub fn definition(&self, block_type: BlockType) -> Option<&BlockTypeDefinition> {
        self.definitions.get(&block_type)
    }

    /// All definitions in declaration order
    pub fn all(&self) -> Vec<&BlockTypeDefinition> {
        self.order
            .iter()
            .filter_map(|t| self.definitions.get(t))
            .collect()
    }

    /// Validate registry consistency
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let mut seen_variant_ids = HashSet::new();

        for block_type in &self.order {
            let definition = &self.definitions[block_type];

            if definition.variant(&definition.default_variant).is_none() {
                errors.push(format!(
                    "Block type '{}' default variant '{}' is not one of its variants",
                    block_type.as_str(),
                    definition.default_variant
                ));
            }

            for variant in &definition.variants {
                if variant.block_type != *block_type {
                    errors.push(format!(
                        "Variant '{}' declares type '{}' but is registered under '{}'",
                        variant.id,
                        variant.block_type.as_str(),
                        block_type.as_str()
                    ));
                }

                // Variant ids are the stable content lookup key, so they
                // must be unique across all types
                if !seen_variant_ids.insert(variant.id.clone()) {
                    errors.push(format!("Duplicate variant id '{}'", variant.id));
                }

                validate_fields(&variant.id, &variant.fields, &mut errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_fields(context: &str, fields: &[FieldDefinition], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.clone()) {
            errors.push(format!("Duplicate field name '{}' in '{}'", field.name, context));
        }

        if field.kind == FieldKind::List {
            if field.item_fields.is_empty() {
                errors.push(format!(
                    "List field '{}' in '{}' has no item fields",
                    field.name, context
                ));
            }
            if let (Some(min), Some(max)) = (field.min_items, field.max_items) {
                if min > max {
                    errors.push(format!(
                        "List field '{}' in '{}' has min_items > max_items",
                        field.name, context
                    ));
                }
            }
            let nested_context = format!("{}.{}", context, field.name);
            validate_fields(&nested_context, &field.item_fields, errors);
        }
    }
}

static REGISTRY: Lazy<VariantRegistry> = Lazy::new(blocks::create_registry);

/// Fallback definition used when a stored type value is no longer registered
static PLACEHOLDER: Lazy<BlockTypeDefinition> = Lazy::new(|| {
    BlockTypeDefinition::new(BlockType::Unknown, "Content", "generic-content")
        .description("Fallback for content whose stored type is no longer registered")
        .variants(vec![VariantSchema::new(
            "generic-content",
            BlockType::Unknown,
            "Generic content",
        )
        .fields(vec![
            FieldDefinition::new("title", FieldKind::Text).label("Title"),
            FieldDefinition::new("content", FieldKind::Textarea).label("Content"),
        ])])
});

/// The process-wide registry
pub fn registry() -> &'static VariantRegistry {
    &REGISTRY
}

/// All block type definitions, in declaration order
pub fn all_block_types() -> Vec<&'static BlockTypeDefinition> {
    registry().all()
}

/// Definition for a stored type value. Unknown values resolve to the
/// placeholder definition rather than an error.
pub fn block_type_definition(type_value: &str) -> &'static BlockTypeDefinition {
    let known = BlockType::parse(type_value).and_then(|t| registry().definition(t));
    match known {
        Some(definition) => definition,
        None => {
            warn!("Unknown block type '{}', using placeholder definition", type_value);
            &PLACEHOLDER
        }
    }
}

/// Ordered variant schemas for a stored type value
pub fn block_variants(type_value: &str) -> &'static [VariantSchema] {
    &block_type_definition(type_value).variants
}

/// Exact variant lookup. `None` when the variant id does not exist for the
/// type; callers fall back to the type's default variant.
pub fn variant_schema(type_value: &str, variant_id: &str) -> Option<&'static VariantSchema> {
    block_type_definition(type_value).variant(variant_id)
}

/// Variant lookup with the full fallback chain: exact variant, then the
/// type's default variant, then the placeholder schema.
pub fn effective_variant_schema(type_value: &str, variant_id: &str) -> &'static VariantSchema {
    let definition = block_type_definition(type_value);
    match definition.variant(variant_id) {
        Some(schema) => schema,
        None => {
            warn!(
                "Unknown variant '{}' for block type '{}', using default variant '{}'",
                variant_id, type_value, definition.default_variant
            );
            definition.default_variant_schema()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_validates() {
        assert!(registry().validate().is_ok());
    }

    #[test]
    fn test_listing_order_is_stable() {
        let types: Vec<BlockType> = all_block_types().iter().map(|d| d.block_type).collect();
        assert_eq!(
            types,
            vec![
                BlockType::Hero,
                BlockType::About,
                BlockType::Features,
                BlockType::Media,
                BlockType::Form,
                BlockType::Cta,
            ]
        );
    }

    #[test]
    fn test_unknown_type_gets_placeholder() {
        let definition = block_type_definition("testimonial");
        assert_eq!(definition.block_type, BlockType::Unknown);
        assert_eq!(definition.default_variant, "generic-content");
        assert!(definition.variant("generic-content").is_some());
    }

    #[test]
    fn test_unknown_variant_falls_back_to_default() {
        assert!(variant_schema("hero", "hero-fullscreen").is_none());

        let schema = effective_variant_schema("hero", "hero-fullscreen");
        assert_eq!(schema.id, "hero-minimal-text");
    }

    #[test]
    fn test_exact_variant_lookup() {
        let schema = variant_schema("about", "about-team").expect("about-team registered");
        assert_eq!(schema.block_type, BlockType::About);
        assert!(schema.field("members").is_some());
    }

    #[test]
    fn test_default_variants_resolve() {
        for definition in all_block_types() {
            assert!(
                definition.variant(&definition.default_variant).is_some(),
                "default variant missing for {}",
                definition.label
            );
        }
    }
}
