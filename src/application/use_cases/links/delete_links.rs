use crate::application::ports::link_store::{LinkStore, StoreResult};
use crate::domain::links::link::Link;

pub struct DeleteLinks<'a, S: LinkStore + ?Sized> {
    pub store: &'a S,
}

impl<'a, S: LinkStore + ?Sized> DeleteLinks<'a, S> {
    pub async fn execute(&self, filename: &str, links: &[Link]) -> StoreResult<()> {
        self.store.delete_links(filename, links).await?;
        tracing::debug!(filename = %filename, requested = links.len(), "links_deleted");
        Ok(())
    }
}
