//! Repository implementations for catalog and story data
//!
//! The filesystem variants re-read from disk on every call; nothing is
//! cached between loads, so edits to the data directory show up on the
//! next command.

use crate::types::catalog::{Catalog, story_filename};
use crate::types::story::{StoryDocument, StoryFormatError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Errors shared by both repositories. A malformed document and a missing
/// file are reported distinctly but handled identically upstream.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("file not found: {name}")]
    NotFound { name: String },
    #[error("io error reading {name}: {message}")]
    Io { name: String, message: String },
    #[error("invalid format in {name}: {message}")]
    InvalidFormat { name: String, message: String },
}

impl RepositoryError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn invalid_format(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Source of the library catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn load_catalog(&self) -> Result<Catalog, RepositoryError>;
}

/// Source of story documents, keyed by story id
#[async_trait]
pub trait StoryRepository: Send + Sync {
    async fn load_story(&self, id: &str) -> Result<StoryDocument, RepositoryError>;
}

/// Filesystem implementation reading from a data directory
pub struct FileSystemRepository {
    base_path: PathBuf,
}

impl FileSystemRepository {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    async fn read_json(&self, name: &str) -> Result<serde_json::Value, RepositoryError> {
        let path = self.base_path.join(name);
        if !path.exists() {
            return Err(RepositoryError::not_found(name));
        }
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RepositoryError::Io {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        serde_json::from_str(&content)
            .map_err(|e| RepositoryError::invalid_format(name, e.to_string()))
    }
}

#[async_trait]
impl CatalogRepository for FileSystemRepository {
    async fn load_catalog(&self) -> Result<Catalog, RepositoryError> {
        let value = self.read_json("library.json").await?;
        serde_json::from_value(value)
            .map_err(|e| RepositoryError::invalid_format("library.json", e.to_string()))
    }
}

#[async_trait]
impl StoryRepository for FileSystemRepository {
    async fn load_story(&self, id: &str) -> Result<StoryDocument, RepositoryError> {
        let filename = story_filename(id);
        log::debug!("loading story {id} from {filename}");
        let value = self.read_json(&filename).await?;
        StoryDocument::from_json(value).map_err(|e| match e {
            StoryFormatError::MissingMarker => {
                RepositoryError::invalid_format(&filename, "missing ProjectEngine marker")
            }
            StoryFormatError::Malformed(e) => {
                RepositoryError::invalid_format(&filename, e.to_string())
            }
        })
    }
}

/// In-memory implementation for tests; records every filename requested
pub struct InMemoryRepository {
    catalog: Catalog,
    stories: HashMap<String, serde_json::Value>,
    requested: Mutex<Vec<String>>,
}

impl InMemoryRepository {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            stories: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Register a story document under the filename its id resolves to
    pub fn add_story(&mut self, id: &str, document: serde_json::Value) {
        self.stories.insert(story_filename(id), document);
    }

    /// Filenames requested so far, in order
    pub fn requested_filenames(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn load_catalog(&self) -> Result<Catalog, RepositoryError> {
        Ok(self.catalog.clone())
    }
}

#[async_trait]
impl StoryRepository for InMemoryRepository {
    async fn load_story(&self, id: &str) -> Result<StoryDocument, RepositoryError> {
        let filename = story_filename(id);
        self.requested.lock().unwrap().push(filename.clone());
        let value = self
            .stories
            .get(&filename)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(&filename))?;
        StoryDocument::from_json(value)
            .map_err(|e| RepositoryError::invalid_format(&filename, e.to_string()))
    }
}
