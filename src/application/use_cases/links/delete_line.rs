use crate::application::ports::link_store::{LinkStore, StoreError, StoreResult};

pub struct DeleteLine<'a, S: LinkStore + ?Sized> {
    pub store: &'a S,
}

impl<'a, S: LinkStore + ?Sized> DeleteLine<'a, S> {
    // Index arrives signed from clients; negative values never reach the store
    pub async fn execute(&self, filename: &str, line_index: i64) -> StoreResult<()> {
        let index = usize::try_from(line_index)
            .map_err(|_| StoreError::Validation(format!("invalid line index {}", line_index)))?;
        self.store.delete_line(filename, index).await
    }
}
