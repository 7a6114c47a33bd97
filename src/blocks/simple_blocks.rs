// Simple Block Schemas - features, media, form, and CTA families
// Lighter definitions kept together, one struct per family

use crate::registry::BlockSchema;
use crate::schema::{BlockType, BlockTypeDefinition, FieldDefinition, FieldKind, VariantSchema};

pub struct FeaturesBlocks;

impl BlockSchema for FeaturesBlocks {
    fn block_type() -> BlockType {
        BlockType::Features
    }

    fn definition() -> BlockTypeDefinition {
        BlockTypeDefinition::new(BlockType::Features, "Features", "features-grid").variants(vec![
            VariantSchema::new("features-grid", BlockType::Features, "Grid").fields(vec![
                FieldDefinition::new("sectionTitle", FieldKind::Text)
                    .label("Section title")
                    .default_value("Features"),
                FieldDefinition::new("subtitle", FieldKind::Text).label("Subtitle"),
                FieldDefinition::new("columns", FieldKind::Number)
                    .label("Columns")
                    .default_value(3),
                FieldDefinition::new("items", FieldKind::List)
                    .label("Features")
                    .item_label("Feature")
                    .min_items(1)
                    .max_items(12)
                    .item_fields(vec![
                        FieldDefinition::new("icon", FieldKind::Media).label("Icon"),
                        FieldDefinition::new("title", FieldKind::Text).label("Title").required(),
                        FieldDefinition::new("description", FieldKind::Textarea)
                            .label("Description"),
                    ]),
            ]),
            VariantSchema::new("features-tabs", BlockType::Features, "Tabs").fields(vec![
                FieldDefinition::new("sectionTitle", FieldKind::Text).label("Section title"),
                FieldDefinition::new("tabs", FieldKind::List)
                    .label("Tabs")
                    .item_label("Tab")
                    .min_items(1)
                    .max_items(6)
                    .item_fields(vec![
                        FieldDefinition::new("label", FieldKind::Text).label("Label").required(),
                        FieldDefinition::new("heading", FieldKind::Text).label("Heading"),
                        FieldDefinition::new("body", FieldKind::Textarea).label("Body"),
                        FieldDefinition::new("screenshot", FieldKind::Image).label("Screenshot"),
                    ]),
            ]),
        ])
    }
}

pub struct MediaBlocks;

impl BlockSchema for MediaBlocks {
    fn block_type() -> BlockType {
        BlockType::Media
    }

    fn definition() -> BlockTypeDefinition {
        BlockTypeDefinition::new(BlockType::Media, "Media", "media-cards").variants(vec![
            VariantSchema::new("media-cards", BlockType::Media, "Cards").fields(vec![
                FieldDefinition::new("sectionTitle", FieldKind::Text).label("Section title"),
                FieldDefinition::new("cards", FieldKind::List)
                    .label("Cards")
                    .item_label("Card")
                    .min_items(1)
                    .max_items(9)
                    .item_fields(vec![
                        FieldDefinition::new("image", FieldKind::Image).label("Image").required(),
                        FieldDefinition::new("title", FieldKind::Text).label("Title"),
                        FieldDefinition::new("subtitle", FieldKind::Text).label("Subtitle"),
                        FieldDefinition::new("linkUrl", FieldKind::Url).label("Link"),
                    ]),
            ]),
            VariantSchema::new("media-banner", BlockType::Media, "Banner").fields(vec![
                FieldDefinition::new("image", FieldKind::Image).label("Image").required(),
                FieldDefinition::new("caption", FieldKind::Text).label("Caption"),
                FieldDefinition::new("fullWidth", FieldKind::Switch)
                    .label("Full width")
                    .default_value(true),
            ]),
            // Pulls its cards from a user-defined collection instead of
            // inline content
            VariantSchema::new("media-collection", BlockType::Media, "Collection showcase")
                .fields(vec![
                    FieldDefinition::new("sectionTitle", FieldKind::Text).label("Section title"),
                    FieldDefinition::new("collection", FieldKind::CollectionReference)
                        .label("Collection")
                        .required(),
                    FieldDefinition::new("limit", FieldKind::Number)
                        .label("Max items")
                        .default_value(6),
                ]),
        ])
    }
}

pub struct FormBlocks;

impl BlockSchema for FormBlocks {
    fn block_type() -> BlockType {
        BlockType::Form
    }

    fn definition() -> BlockTypeDefinition {
        BlockTypeDefinition::new(BlockType::Form, "Form", "form-contact").variants(vec![
            VariantSchema::new("form-contact", BlockType::Form, "Contact").fields(vec![
                FieldDefinition::new("heading", FieldKind::Text)
                    .label("Heading")
                    .default_value("Get in touch"),
                FieldDefinition::new("description", FieldKind::Textarea).label("Description"),
                FieldDefinition::new("submitLabel", FieldKind::Text)
                    .label("Submit label")
                    .default_value("Send message"),
                FieldDefinition::new("successMessage", FieldKind::Text)
                    .label("Success message")
                    .default_value("Thanks, we'll be in touch."),
            ]),
            VariantSchema::new("form-newsletter", BlockType::Form, "Newsletter").fields(vec![
                FieldDefinition::new("heading", FieldKind::Text)
                    .label("Heading")
                    .default_value("Stay in the loop"),
                FieldDefinition::new("placeholder", FieldKind::Text)
                    .label("Input placeholder")
                    .default_value("Your email"),
                FieldDefinition::new("buttonLabel", FieldKind::Text)
                    .label("Button label")
                    .default_value("Subscribe"),
                FieldDefinition::new("consentText", FieldKind::Textarea).label("Consent text"),
            ]),
        ])
    }
}

pub struct CtaBlocks;

impl BlockSchema for CtaBlocks {
    fn block_type() -> BlockType {
        BlockType::Cta
    }

    fn definition() -> BlockTypeDefinition {
        BlockTypeDefinition::new(BlockType::Cta, "Call to action", "cta-banner").variants(vec![
            VariantSchema::new("cta-banner", BlockType::Cta, "Banner").fields(vec![
                FieldDefinition::new("heading", FieldKind::Text).label("Heading").required(),
                FieldDefinition::new("subheading", FieldKind::Text).label("Subheading"),
                FieldDefinition::new("buttonLabel", FieldKind::Text)
                    .label("Button label")
                    .default_value("Get started"),
                FieldDefinition::new("buttonUrl", FieldKind::Url).label("Button link"),
                FieldDefinition::new("backgroundImage", FieldKind::Image).label("Background image"),
                FieldDefinition::new("align", FieldKind::Select)
                    .label("Alignment")
                    .default_value("center")
                    .option("Left", "left")
                    .option("Center", "center")
                    .option("Right", "right"),
            ]),
            VariantSchema::new("cta-split", BlockType::Cta, "Split").fields(vec![
                FieldDefinition::new("heading", FieldKind::Text).label("Heading"),
                FieldDefinition::new("body", FieldKind::Textarea).label("Body"),
                FieldDefinition::new("image", FieldKind::Image).label("Image"),
                FieldDefinition::new("primaryLabel", FieldKind::Text)
                    .label("Primary label")
                    .default_value("Get started"),
                FieldDefinition::new("primaryUrl", FieldKind::Url).label("Primary link"),
                FieldDefinition::new("secondaryLabel", FieldKind::Text).label("Secondary label"),
                FieldDefinition::new("secondaryUrl", FieldKind::Url).label("Secondary link"),
            ]),
        ])
    }
}
