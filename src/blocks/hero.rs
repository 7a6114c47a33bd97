// Hero Block Schemas - full-width page openers
// Three variants: minimal text, image gallery, and project case-study hero

use crate::registry::BlockSchema;
use crate::schema::{BlockType, BlockTypeDefinition, FieldDefinition, FieldKind, VariantSchema};

/// Hero block family with its variant catalog
pub struct HeroBlocks;

impl BlockSchema for HeroBlocks {
    fn block_type() -> BlockType {
        BlockType::Hero
    }

    fn definition() -> BlockTypeDefinition {
        BlockTypeDefinition::new(BlockType::Hero, "Hero", "hero-minimal-text")
            .description("Full-width opening section at the top of a page")
            .variants(vec![minimal_text(), gallery(), project_hero()])
    }
}

fn minimal_text() -> VariantSchema {
    VariantSchema::new("hero-minimal-text", BlockType::Hero, "Minimal text")
        .description("Headline over a solid background, no imagery")
        .fields(vec![
            FieldDefinition::new("title", FieldKind::Text)
                .label("Title")
                .default_value("Simple. Powerful. Effective."),
            FieldDefinition::new("subtitle", FieldKind::Text)
                .label("Subtitle")
                .placeholder("Optional supporting line"),
            FieldDefinition::new("backgroundColor", FieldKind::Color)
                .label("Background color")
                .default_value("#000000"),
            FieldDefinition::new("textColor", FieldKind::Color)
                .label("Text color")
                .default_value("#ffffff"),
            FieldDefinition::new("textAlign", FieldKind::Select)
                .label("Text alignment")
                .default_value("center")
                .option("Left", "left")
                .option("Center", "center")
                .option("Right", "right"),
        ])
}

fn gallery() -> VariantSchema {
    VariantSchema::new("hero-gallery", BlockType::Hero, "Gallery")
        .description("Rotating image slides with an overlaid heading")
        .fields(vec![
            FieldDefinition::new("heading", FieldKind::Text).label("Heading"),
            FieldDefinition::new("tagline", FieldKind::Text).label("Tagline"),
            FieldDefinition::new("images", FieldKind::List)
                .label("Slides")
                .item_label("Slide")
                .min_items(1)
                .max_items(8)
                .item_fields(vec![
                    FieldDefinition::new("image", FieldKind::Image)
                        .label("Image")
                        .required(),
                    FieldDefinition::new("caption", FieldKind::Text).label("Caption"),
                ]),
            FieldDefinition::new("autoplay", FieldKind::Switch)
                .label("Autoplay")
                .default_value(true),
            FieldDefinition::new("overlayColor", FieldKind::Color)
                .label("Overlay color")
                .default_value("#000000"),
        ])
}

fn project_hero() -> VariantSchema {
    VariantSchema::new("project-hero", BlockType::Hero, "Project hero")
        .description("Case-study opener with cover media and call to action")
        .fields(vec![
            FieldDefinition::new("title", FieldKind::Text).label("Title").required(),
            FieldDefinition::new("client", FieldKind::Text).label("Client"),
            FieldDefinition::new("coverImage", FieldKind::Image).label("Cover image"),
            FieldDefinition::new("videoUrl", FieldKind::Video).label("Video"),
            FieldDefinition::new("summary", FieldKind::Textarea).label("Summary"),
            FieldDefinition::new("ctaLabel", FieldKind::Text)
                .label("CTA label")
                .default_value("View project"),
            FieldDefinition::new("ctaUrl", FieldKind::Url).label("CTA link"),
        ])
}
