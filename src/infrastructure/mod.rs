//! Infrastructure layer: data access behind async repository traits

pub mod repositories;

pub use repositories::{
    CatalogRepository, FileSystemRepository, InMemoryRepository, RepositoryError, StoryRepository,
};
