//! Acceptance test suite for the files app web UI.
//!
//! Binds Gherkin scenario phrases to operations on a files page driver:
//! browsing, folder creation, deletion, renaming, and listing assertions.
//! The driver is a trait, so scenarios run unchanged against the bundled
//! in-memory fake or a future browser-backed implementation.
//!
//! # Architecture
//!
//! ```text
//! tests/features/*.feature
//!         │  (cucumber)
//!         ▼
//! steps::files ── thin phrase-to-call bindings
//!         │
//!         ▼
//! FilesWorld ── per-scenario: Box<dyn FilesPage> + DeletionTracker
//!         │
//!         ▼
//! page::FilesPage ── navigate / create / delete / rename / list / assert
//! ```
//!
//! # Example
//!
//! ```
//! use webui_e2e_tests::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> WebUiResult<()> {
//! let mut page = FakeFilesPage::with_fixtures();
//! page.navigate_to_files_page().await?;
//!
//! let mut deleted = DeletionTracker::new();
//! deleted.delete_all(&mut page, ["lorem.txt", "simple-folder"]).await?;
//! deleted.assert_none_listed_after_reload(&mut page).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod page;
pub mod steps;
pub mod tracker;
pub mod world;

pub mod prelude {
    //! Re-exports commonly used types for convenience.
    pub use crate::error::{WebUiError, WebUiResult};
    pub use crate::page::{ElementKind, FakeFilesPage, FileRow, FilesPage, PageCall, PageKind};
    pub use crate::tracker::DeletionTracker;
    pub use crate::world::FilesWorld;
}
