use crate::application::ports::link_store::{LinkStore, StoreError, StoreResult};
use crate::domain::links::link::Link;

pub struct AddBulkLinks<'a, S: LinkStore + ?Sized> {
    pub store: &'a S,
}

impl<'a, S: LinkStore + ?Sized> AddBulkLinks<'a, S> {
    /// Appends `subject` with `links` to `filename`, creating the file when
    /// needed. Values are written verbatim, so a line break inside any of them
    /// would split the section and is rejected.
    pub async fn execute(&self, filename: &str, subject: &str, links: &[Link]) -> StoreResult<()> {
        if filename.trim().is_empty() {
            return Err(StoreError::Validation("filename is required".into()));
        }
        if has_line_break(subject) {
            return Err(StoreError::Validation(
                "subject must be a single line".into(),
            ));
        }
        if let Some(bad) = links
            .iter()
            .find(|l| has_line_break(&l.title) || has_line_break(&l.url))
        {
            return Err(StoreError::Validation(format!(
                "link '{}' must be a single line",
                bad.title.lines().next().unwrap_or_default()
            )));
        }

        self.store.add_bulk_links(filename, subject, links).await?;
        tracing::debug!(filename = %filename, subject = %subject, count = links.len(), "bulk_links_added");
        Ok(())
    }
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}
