use crate::application::ports::link_store::{LinkStore, StoreResult};

pub struct DeleteFile<'a, S: LinkStore + ?Sized> {
    pub store: &'a S,
}

impl<'a, S: LinkStore + ?Sized> DeleteFile<'a, S> {
    pub async fn execute(&self, filename: &str) -> StoreResult<()> {
        self.store.delete_file(filename).await?;
        tracing::info!(filename = %filename, "link_file_deleted");
        Ok(())
    }
}
