// About Block Schemas - company story and team sections

use crate::registry::BlockSchema;
use crate::schema::{BlockType, BlockTypeDefinition, FieldDefinition, FieldKind, VariantSchema};

pub struct AboutBlocks;

impl BlockSchema for AboutBlocks {
    fn block_type() -> BlockType {
        BlockType::About
    }

    fn definition() -> BlockTypeDefinition {
        BlockTypeDefinition::new(BlockType::About, "About", "about-story")
            .description("Who-we-are sections")
            .variants(vec![story(), team()])
    }
}

fn story() -> VariantSchema {
    VariantSchema::new("about-story", BlockType::About, "Story")
        .fields(vec![
            FieldDefinition::new("sectionTitle", FieldKind::Text)
                .label("Section title")
                .default_value("About us"),
            FieldDefinition::new("body", FieldKind::Textarea).label("Body"),
            FieldDefinition::new("portrait", FieldKind::Image).label("Portrait"),
            FieldDefinition::new("yearsExperience", FieldKind::Number).label("Years of experience"),
            FieldDefinition::new("highlights", FieldKind::List)
                .label("Highlights")
                .item_label("Highlight")
                .max_items(6)
                .item_fields(vec![
                    FieldDefinition::new("label", FieldKind::Text).label("Label")
                ]),
        ])
}

fn team() -> VariantSchema {
    VariantSchema::new("about-team", BlockType::About, "Team")
        .description("Grid of team members with photos")
        .fields(vec![
            FieldDefinition::new("sectionTitle", FieldKind::Text)
                .label("Section title")
                .default_value("Our Team"),
            FieldDefinition::new("subtitle", FieldKind::Text)
                .label("Subtitle")
                .default_value("Meet the experts"),
            FieldDefinition::new("members", FieldKind::List)
                .label("Members")
                .item_label("Member")
                .min_items(1)
                .max_items(12)
                .item_fields(vec![
                    FieldDefinition::new("name", FieldKind::Text).label("Name").required(),
                    FieldDefinition::new("role", FieldKind::Text).label("Role"),
                    FieldDefinition::new("photo", FieldKind::Image).label("Photo"),
                    FieldDefinition::new("bio", FieldKind::Textarea).label("Bio"),
                ]),
        ])
}
