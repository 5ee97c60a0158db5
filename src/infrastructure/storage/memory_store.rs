use async_trait::async_trait;
use std::collections::BTreeMap;

use tokio::sync::Mutex;

use crate::application::ports::link_store::{LinkStore, StoreError, StoreResult};
use crate::application::services::markdown;
use crate::domain::links::link::{Link, Subject};
use crate::infrastructure::storage::validate_filename;

/// Keeps documents in memory. Same naming rules and text semantics as the
/// filesystem store; one mutex serializes every mutation.
#[derive(Default)]
pub struct InMemoryLinkStore {
    docs: Mutex<BTreeMap<String, String>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, filename: &str, text: &str) -> Self {
        self.docs
            .get_mut()
            .insert(filename.to_string(), text.to_string());
        self
    }

    pub async fn document(&self, filename: &str) -> Option<String> {
        self.docs.lock().await.get(filename).cloned()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn list_files(&self) -> StoreResult<Vec<String>> {
        Ok(self.docs.lock().await.keys().cloned().collect())
    }

    async fn get_links(&self, filename: &str) -> StoreResult<Vec<Subject>> {
        let name = validate_filename(filename)?;
        let docs = self.docs.lock().await;
        let text = docs
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(markdown::parse(text))
    }

    async fn add_bulk_links(
        &self,
        filename: &str,
        subject: &str,
        links: &[Link],
    ) -> StoreResult<()> {
        let name = validate_filename(filename)?;
        let mut docs = self.docs.lock().await;
        let text = docs.entry(name.to_string()).or_default();
        *text = markdown::append(text, subject, links);
        Ok(())
    }

    async fn delete_links(&self, filename: &str, links: &[Link]) -> StoreResult<()> {
        let name = validate_filename(filename)?;
        let mut docs = self.docs.lock().await;
        let text = docs
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        *text = markdown::delete_links(text, links);
        Ok(())
    }

    async fn delete_line(&self, filename: &str, line_index: usize) -> StoreResult<()> {
        let name = validate_filename(filename)?;
        let mut docs = self.docs.lock().await;
        let text = docs
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        *text = markdown::delete_line(text, line_index)
            .ok_or_else(|| StoreError::NotFound(format!("line {} in {}", line_index, name)))?;
        Ok(())
    }

    async fn create_file(&self, filename: &str) -> StoreResult<()> {
        let name = validate_filename(filename)?;
        self.docs.lock().await.entry(name.to_string()).or_default();
        Ok(())
    }

    async fn delete_file(&self, filename: &str) -> StoreResult<()> {
        let name = validate_filename(filename)?;
        self.docs
            .lock()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn behaves_like_a_document_directory() {
        let store = InMemoryLinkStore::new().with_document("d.md", "- [A](http://a)\n- [B](http://b)\n");

        store.create_file("e.md").await.unwrap();
        assert_eq!(store.list_files().await.unwrap(), vec!["d.md", "e.md"]);

        store
            .delete_links("d.md", &[Link::new("A", "http://a")])
            .await
            .unwrap();
        assert_eq!(store.document("d.md").await.unwrap(), "- [B](http://b)\n");

        let subjects = store.get_links("d.md").await.unwrap();
        assert_eq!(subjects[0].name, "Others");

        store.delete_file("e.md").await.unwrap();
        assert!(matches!(
            store.get_links("e.md").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn validates_names_like_the_filesystem_store() {
        let store = InMemoryLinkStore::new();
        assert!(matches!(
            store.create_file("../x.md").await,
            Err(StoreError::Validation(_))
        ));
    }
}
