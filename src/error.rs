use std::fmt;

#[derive(Debug)]
pub enum CmsError {
    InvalidJson(String),
    ListBounds(String),
    Validation(String),
    Serialization(String),
    Configuration(String),
    Provider(anyhow::Error),
}

impl fmt::Display for CmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmsError::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
            CmsError::ListBounds(msg) => write!(f, "List bounds violation: {}", msg),
            CmsError::Validation(msg) => write!(f, "Validation error: {}", msg),
            CmsError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            CmsError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            CmsError::Provider(err) => write!(f, "Provider error: {}", err),
        }
    }
}

impl std::error::Error for CmsError {}

impl From<anyhow::Error> for CmsError {
    fn from(err: anyhow::Error) -> Self {
        CmsError::Provider(err)
    }
}

impl From<serde_json::Error> for CmsError {
    fn from(err: serde_json::Error) -> Self {
        CmsError::Serialization(err.to_string())
    }
}

pub type CmsResult<T> = Result<T, CmsError>;
