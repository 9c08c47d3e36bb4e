//! Content Loading
//!
//! Reads raw JSON documents from the content store. Nothing here knows about
//! schemas: a document that parses is handed back as an untyped
//! [`serde_json::Value`], one that cannot be read or parsed is a [`LoadError`].

use include_dir::{include_dir, Dir};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::domains::Domain;
use crate::error::LoadError;

/// The `content/` directory as it was when the crate was built
static EMBEDDED: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/content");

/// Where content documents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A directory of `<domain>.json` files
    Directory(PathBuf),
    /// The content store compiled into the binary
    Embedded,
}

#[derive(Debug, Clone)]
pub struct ContentLoader {
    source: ContentSource,
}

impl ContentLoader {
    pub fn new(source: ContentSource) -> Self {
        Self { source }
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(ContentSource::Directory(dir.as_ref().to_path_buf()))
    }

    pub fn embedded() -> Self {
        Self::new(ContentSource::Embedded)
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Load one named document
    pub fn load(&self, file_name: &str) -> Result<Value, LoadError> {
        match &self.source {
            ContentSource::Directory(dir) => {
                let path = dir.join(file_name);
                debug!(path = %path.display(), "Loading content file");
                let content = fs::read_to_string(&path).map_err(|source| LoadError::Unreadable {
                    path: path.clone(),
                    source,
                })?;
                parse(&content, path)
            }
            ContentSource::Embedded => {
                debug!(file = file_name, "Loading embedded content");
                let file = EMBEDDED.get_file(file_name).ok_or_else(|| LoadError::NotEmbedded {
                    name: file_name.to_string(),
                })?;
                let path = PathBuf::from(file_name);
                let content = decode(file.contents(), &path)?;
                parse(content, path)
            }
        }
    }

    pub fn load_domain(&self, domain: Domain) -> Result<Value, LoadError> {
        self.load(&domain.file_name())
    }

    /// JSON files in the store that belong to no content domain, usually a
    /// misspelt file name that would otherwise be silently ignored
    pub fn unrecognized_files(&self) -> Vec<PathBuf> {
        let names: Vec<PathBuf> = match &self.source {
            ContentSource::Directory(dir) => WalkDir::new(dir)
                .max_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.path().to_path_buf())
                .collect(),
            ContentSource::Embedded => EMBEDDED
                .files()
                .map(|f| f.path().to_path_buf())
                .collect(),
        };

        names
            .into_iter()
            .filter(|p| p.extension().map(|x| x == "json").unwrap_or(false))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .and_then(Domain::from_name)
                    .is_none()
            })
            .collect()
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Embedded bytes must be UTF-8, failing the way `fs::read_to_string` does
fn decode<'a>(bytes: &'a [u8], path: &Path) -> Result<&'a str, LoadError> {
    std::str::from_utf8(bytes).map_err(|e| LoadError::Unreadable {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

fn parse(content: &str, path: PathBuf) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Malformed { path, source })
}
