use crate::application::ports::link_store::{LinkStore, StoreResult};
use crate::domain::links::link::Subject;

pub struct GetLinks<'a, S: LinkStore + ?Sized> {
    pub store: &'a S,
}

impl<'a, S: LinkStore + ?Sized> GetLinks<'a, S> {
    pub async fn execute(&self, filename: &str) -> StoreResult<Vec<Subject>> {
        self.store.get_links(filename).await
    }
}
