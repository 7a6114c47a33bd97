// Content Records - the shapes handed to the storage collaborator
// Persistence itself lives outside this crate; content blobs are opaque
// JSON to the storage layer and only this crate's resolver validates them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::registry;
use crate::resolver;
use crate::schema::BlockType;

/// A routable page assembled from ordered blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub slug: String,
    pub blocks: Vec<PageBlock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(slug: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            blocks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a block at the end of the page
    pub fn add_block(&mut self, mut block: PageBlock) {
        block.position = self.blocks.len() as i32;
        self.blocks.push(block);
        self.updated_at = Utc::now();
    }
}

/// One block instance on a page. `block_type` and `variant` are stored as
/// strings so records referencing retired schemas stay loadable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBlock {
    pub id: Uuid,
    pub block_type: String,
    pub variant: String,
    /// The full two-branch content document
    pub content: Value,
    pub position: i32,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageBlock {
    /// New block instance with resolver-produced default content
    pub fn new(block_type: BlockType, variant_id: &str) -> Self {
        let type_value = block_type.as_str();
        let schema = registry::effective_variant_schema(type_value, variant_id);
        let content = resolver::resolve_document(type_value, &schema.id, &Value::Null).to_value();

        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            block_type: type_value.to_string(),
            variant: schema.id.clone(),
            content,
            position: 0,
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content document after an editing session
    pub fn set_content(&mut self, content: Value) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// A user-defined collection (projects, testimonials, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// One item inside a collection; its field schema lives in the content's
/// `_schema` metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItemRecord {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CollectionItemRecord {
    pub fn new(collection_id: Uuid, content: Value) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            collection_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_block_has_complete_default_content() {
        let block = PageBlock::new(BlockType::Hero, "hero-minimal-text");

        assert_eq!(block.block_type, "hero");
        assert_eq!(block.variant, "hero-minimal-text");
        assert_eq!(
            block.content["en"]["title"],
            json!("Simple. Powerful. Effective.")
        );
        assert_eq!(block.content["ar"]["textAlign"], json!("center"));
    }

    #[test]
    fn test_new_block_snaps_unknown_variant_to_default() {
        let block = PageBlock::new(BlockType::Cta, "cta-retired");
        assert_eq!(block.variant, "cta-banner");
    }

    #[test]
    fn test_page_positions_blocks_in_order() {
        let mut page = Page::new("home");
        page.add_block(PageBlock::new(BlockType::Hero, "hero-minimal-text"));
        page.add_block(PageBlock::new(BlockType::Cta, "cta-banner"));

        assert_eq!(page.blocks[0].position, 0);
        assert_eq!(page.blocks[1].position, 1);
    }
}
