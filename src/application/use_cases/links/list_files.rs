use crate::application::ports::link_store::{LinkStore, StoreResult};

pub struct ListFiles<'a, S: LinkStore + ?Sized> {
    pub store: &'a S,
}

impl<'a, S: LinkStore + ?Sized> ListFiles<'a, S> {
    pub async fn execute(&self) -> StoreResult<Vec<String>> {
        self.store.list_files().await
    }
}
