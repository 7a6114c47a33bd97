// External Collaborator Seams - collection lookups and media uploads
// Implementations live outside this crate (database, object storage)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CmsResult;

/// One selectable entry for a collection-reference field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceOption {
    pub id: String,
    pub name: String,
}

/// Supplies the selection list behind collection-reference fields.
/// Content stores only the chosen id.
#[async_trait]
pub trait CollectionProvider: Send + Sync {
    async fn list_options(&self, collection_id: &str) -> CmsResult<Vec<ReferenceOption>>;
}

/// Uploads a media asset and returns its public URL. Content stores only
/// the URL string; no validation beyond non-empty happens here.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file_name: &str, content_type: &str, bytes: Vec<u8>)
        -> CmsResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    #[async_trait]
    impl CollectionProvider for FixedProvider {
        async fn list_options(&self, _collection_id: &str) -> CmsResult<Vec<ReferenceOption>> {
            Ok(vec![ReferenceOption {
                id: "projects".to_string(),
                name: "Projects".to_string(),
            }])
        }
    }

    struct FixedUploader;

    #[async_trait]
    impl MediaUploader for FixedUploader {
        async fn upload(
            &self,
            file_name: &str,
            _content_type: &str,
            _bytes: Vec<u8>,
        ) -> CmsResult<String> {
            Ok(format!("/uploads/{}", file_name))
        }
    }

    #[tokio::test]
    async fn test_provider_contract() {
        let provider = FixedProvider;
        let options = provider.list_options("any").await.unwrap();
        assert_eq!(options[0].id, "projects");
    }

    #[tokio::test]
    async fn test_uploader_returns_public_url() {
        let uploader = FixedUploader;
        let url = uploader.upload("a.jpg", "image/jpeg", vec![1, 2, 3]).await.unwrap();
        assert_eq!(url, "/uploads/a.jpg");
    }
}
