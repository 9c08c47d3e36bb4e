//! Error types for content loading and validation

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::Issues;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Raw content could not be obtained or parsed as JSON
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{name} is not part of the embedded content store")]
    NotEmbedded { name: String },
}

/// Content parsed but violated its schema
#[derive(Error, Debug, Clone)]
#[error("{domain} failed validation with {} issue(s):\n{issues}", .issues.len())]
pub struct SchemaValidationError {
    pub domain: String,
    pub issues: Issues,
}

/// Content errors
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Could not load content: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] SchemaValidationError),

    #[error("{domain} passed validation but could not be decoded: {source}")]
    Decode {
        domain: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Refusing to start: {domain} content is not usable. {source}")]
    FatalStartup {
        domain: String,
        #[source]
        source: Box<ContentError>,
    },

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Issues behind a validation failure, unwrapping startup failures
    pub fn issues(&self) -> Option<&Issues> {
        match self {
            ContentError::Validation(e) => Some(&e.issues),
            ContentError::FatalStartup { source, .. } => source.issues(),
            _ => None,
        }
    }

    pub fn is_load_error(&self) -> bool {
        match self {
            ContentError::Load(_) => true,
            ContentError::FatalStartup { source, .. } => source.is_load_error(),
            _ => false,
        }
    }
}
