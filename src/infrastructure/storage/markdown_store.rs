use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::link_store::{LinkStore, StoreError, StoreResult};
use crate::application::services::markdown;
use crate::domain::links::link::{Link, Subject};
use crate::infrastructure::storage::{FileLocks, is_markdown_name, validate_filename, write_atomic};

/// Link collections stored as `*.md` files directly under `root`.
pub struct MarkdownLinkStore {
    root: PathBuf,
    locks: FileLocks,
}

impl MarkdownLinkStore {
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::NotFound(format!(
                "markdown directory does not exist: {}",
                root.display()
            )));
        }
        Ok(Self {
            root,
            locks: FileLocks::new(),
        })
    }

    fn resolve(&self, filename: &str) -> StoreResult<PathBuf> {
        let name = validate_filename(filename)?;
        Ok(self.root.join(name))
    }

    async fn read_existing(&self, filename: &str, path: &Path) -> StoreResult<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(filename.to_string())
            } else {
                StoreError::io(path, e)
            }
        })
    }
}

#[async_trait]
impl LinkStore for MarkdownLinkStore {
    async fn list_files(&self) -> StoreResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| StoreError::io(&self.root, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(&self.root, e))?
        {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !is_markdown_name(&name) {
                continue;
            }
            // Follows symlinks, like a glob would
            match tokio::fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_file() => names.push(name),
                Ok(_) => {}
                Err(e) => tracing::warn!(file = %name, error = ?e, "list_files_stat_failed"),
            }
        }
        names.sort();
        Ok(names)
    }

    async fn get_links(&self, filename: &str) -> StoreResult<Vec<Subject>> {
        let path = self.resolve(filename)?;
        let text = self.read_existing(filename, &path).await?;
        Ok(markdown::parse(&text))
    }

    async fn add_bulk_links(
        &self,
        filename: &str,
        subject: &str,
        links: &[Link],
    ) -> StoreResult<()> {
        let path = self.resolve(filename)?;
        let _guard = self.locks.acquire(filename).await;

        let current = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(StoreError::io(&path, e)),
        };
        let updated = markdown::append(&current, subject, links);
        write_atomic(path, updated).await
    }

    async fn delete_links(&self, filename: &str, links: &[Link]) -> StoreResult<()> {
        let path = self.resolve(filename)?;
        let _guard = self.locks.acquire(filename).await;

        let current = self.read_existing(filename, &path).await?;
        let updated = markdown::delete_links(&current, links);
        if updated == current {
            tracing::debug!(filename = %filename, "delete_links_nothing_matched");
            return Ok(());
        }
        write_atomic(path, updated).await
    }

    async fn delete_line(&self, filename: &str, line_index: usize) -> StoreResult<()> {
        let path = self.resolve(filename)?;
        let _guard = self.locks.acquire(filename).await;

        let current = self.read_existing(filename, &path).await?;
        let updated = markdown::delete_line(&current, line_index).ok_or_else(|| {
            StoreError::NotFound(format!("line {} in {}", line_index, filename))
        })?;
        write_atomic(path, updated).await
    }

    async fn create_file(&self, filename: &str) -> StoreResult<()> {
        let path = self.resolve(filename)?;
        let _guard = self.locks.acquire(filename).await;

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::io(&path, e))?;
        if exists {
            return Ok(());
        }
        write_atomic(path, String::new()).await
    }

    async fn delete_file(&self, filename: &str) -> StoreResult<()> {
        let path = self.resolve(filename)?;
        let _guard = self.locks.acquire(filename).await;

        tokio::fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(filename.to_string())
            } else {
                StoreError::io(&path, e)
            }
        })
    }

    async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
