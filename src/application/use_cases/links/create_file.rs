use crate::application::ports::link_store::{LinkStore, StoreResult};

pub struct CreateFile<'a, S: LinkStore + ?Sized> {
    pub store: &'a S,
}

impl<'a, S: LinkStore + ?Sized> CreateFile<'a, S> {
    pub async fn execute(&self, filename: &str) -> StoreResult<()> {
        self.store.create_file(filename).await?;
        tracing::info!(filename = %filename, "link_file_created");
        Ok(())
    }
}
