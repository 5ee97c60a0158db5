use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::links::link::{Link, Subject};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Access to a directory of markdown link collections, addressed by base
/// filename. Implementations validate names before touching storage and
/// serialize mutations of the same file.
#[async_trait]
pub trait LinkStore: Send + Sync {
    async fn list_files(&self) -> StoreResult<Vec<String>>;

    async fn get_links(&self, filename: &str) -> StoreResult<Vec<Subject>>;

    // Creates the file when absent
    async fn add_bulk_links(&self, filename: &str, subject: &str, links: &[Link])
    -> StoreResult<()>;

    async fn delete_links(&self, filename: &str, links: &[Link]) -> StoreResult<()>;

    async fn delete_line(&self, filename: &str, line_index: usize) -> StoreResult<()>;

    // No-op when the file already exists
    async fn create_file(&self, filename: &str) -> StoreResult<()>;

    async fn delete_file(&self, filename: &str) -> StoreResult<()>;

    /// Cheap readiness probe for health checks.
    async fn is_available(&self) -> bool;
}
