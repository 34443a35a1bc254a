//! Per-scenario state for the acceptance suite.

use cucumber::World;

use crate::error::WebUiResult;
use crate::page::{FakeFilesPage, FilesPage};
use crate::tracker::DeletionTracker;

/// Everything a scenario step can touch.
///
/// Constructed fresh for every scenario, so deletion bookkeeping never
/// leaks from one scenario into the next.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct FilesWorld {
    /// Driver for the files page.
    pub page: Box<dyn FilesPage>,
    /// Elements this scenario has deleted through the multi-delete step.
    pub deleted: DeletionTracker,
}

impl FilesWorld {
    async fn new() -> WebUiResult<Self> {
        Ok(Self::with_page(Box::new(FakeFilesPage::with_fixtures())))
    }

    /// Build a world around a specific page driver.
    pub fn with_page(page: Box<dyn FilesPage>) -> Self {
        Self {
            page,
            deleted: DeletionTracker::new(),
        }
    }
}
