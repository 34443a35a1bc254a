//! Deletion bookkeeping for multi-element delete scenarios.
//!
//! When a scenario deletes a batch of elements, the names go through the
//! page driver one at a time and are recorded here, so a later step can
//! re-check that none of them reappeared, optionally after a reload.

use tracing::info;

use crate::error::WebUiResult;
use crate::page::FilesPage;

/// Ordered record of the element names a scenario has deleted.
///
/// Append-only for the lifetime of a scenario; names are kept in deletion
/// order and duplicates are preserved. Owned by the scenario world, so
/// every scenario starts with an empty tracker.
#[derive(Debug, Clone, Default)]
pub struct DeletionTracker {
    names: Vec<String>,
}

impl DeletionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name as deleted. Duplicates are kept, not collapsed.
    pub fn record(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// The recorded names, in deletion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of recorded deletions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been deleted yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Delete each named element through the driver, recording it on the way.
    ///
    /// Deletions are issued one at a time in input order; row positions in
    /// the UI shift after every deletion, so there is no batching.
    pub async fn delete_all<I, S>(&mut self, page: &mut dyn FilesPage, names: I) -> WebUiResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            page.delete_element(&name).await?;
            info!(element = %name, "deleted and recorded");
            self.record(name);
        }
        Ok(())
    }

    /// Check that none of the recorded names is listed, in recorded order.
    ///
    /// Fails fast: the first name still listed aborts the check.
    pub async fn assert_none_listed(&self, page: &mut dyn FilesPage) -> WebUiResult<()> {
        for name in &self.names {
            page.assert_not_listed(name).await?;
        }
        Ok(())
    }

    /// Reload the current view once, then run [`Self::assert_none_listed`].
    pub async fn assert_none_listed_after_reload(
        &self,
        page: &mut dyn FilesPage,
    ) -> WebUiResult<()> {
        page.reload_page().await?;
        self.assert_none_listed(page).await
    }
}
