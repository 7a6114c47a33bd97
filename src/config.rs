use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub content: ContentConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Locale used when a request carries no locale hint.
    pub default_locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    pub base_url: String,
    pub max_upload_mb: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            content: ContentConfig {
                default_locale: env::var("CMS_DEFAULT_LOCALE")
                    .unwrap_or_else(|_| "en".to_string()),
            },
            media: MediaConfig {
                base_url: env::var("CMS_MEDIA_BASE_URL")
                    .unwrap_or_else(|_| "/uploads".to_string()),
                max_upload_mb: env::var("CMS_MEDIA_MAX_UPLOAD_MB")
                    .unwrap_or_else(|_| "25".to_string())
                    .parse()
                    .unwrap_or(25),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        let config = Config::from_env().unwrap();

        assert_eq!(config.content.default_locale, "en");
        assert_eq!(config.media.base_url, "/uploads");
        assert_eq!(config.media.max_upload_mb, 25);
    }
}
