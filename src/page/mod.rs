//! Page driver abstraction for the files web UI.
//!
//! Provides a trait-based abstraction over the live files page:
//! - Fake: in-memory page model for driver-independent testing
//! - WebDriver: real browser control (future)

mod fake;

pub use fake::{FakeFilesPage, PageCall};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::WebUiResult;

/// Kinds of page drivers that can back a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    /// In-memory fake of the files page.
    Fake,
    /// Real browser session via a WebDriver endpoint.
    WebDriver,
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageKind::Fake => write!(f, "fake"),
            PageKind::WebDriver => write!(f, "webdriver"),
        }
    }
}

/// Whether a row represents a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// A plain file.
    File,
    /// A folder that can be opened.
    Folder,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::File => write!(f, "file"),
            ElementKind::Folder => write!(f, "folder"),
        }
    }
}

/// A single row of the files table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    /// Name as displayed in the UI.
    pub name: String,
    /// File or folder.
    pub kind: ElementKind,
    /// Hidden entries are listed only when the show-hidden setting is on.
    pub hidden: bool,
}

impl FileRow {
    /// Create a file row. Dot-prefixed names are marked hidden.
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        let hidden = name.starts_with('.');
        Self {
            name,
            kind: ElementKind::File,
            hidden,
        }
    }

    /// Create a folder row. Dot-prefixed names are marked hidden.
    pub fn folder(name: impl Into<String>) -> Self {
        let name = name.into();
        let hidden = name.starts_with('.');
        Self {
            name,
            kind: ElementKind::Folder,
            hidden,
        }
    }
}

/// Trait for drivers of the files page.
///
/// One method per UI operation the scenarios need. Drivers are responsible
/// for any waiting or polling: every method returns only once the UI has
/// settled, so callers never sleep or retry.
#[async_trait]
pub trait FilesPage: Send + Sync + std::fmt::Debug {
    /// Get the driver kind.
    fn kind(&self) -> PageKind;

    // === Navigation ===

    /// Load the files view.
    async fn navigate_to_files_page(&mut self) -> WebUiResult<()>;

    /// Block until the files table is visible.
    async fn wait_for_files_table(&mut self) -> WebUiResult<()>;

    /// Enter the named folder.
    async fn navigate_to_folder(&mut self, name: &str) -> WebUiResult<()>;

    /// Force a reload of the current view; returns once the view is ready.
    async fn reload_page(&mut self) -> WebUiResult<()>;

    // === Settings ===

    /// Turn on listing of hidden files and folders.
    async fn enable_show_hidden_files(&mut self) -> WebUiResult<()>;

    // === Mutation ===

    /// Request folder creation.
    ///
    /// With `expect_valid` set, the name must pass validation and the
    /// folder must appear. Without it, the UI must reject the name.
    async fn create_folder(&mut self, name: &str, expect_valid: bool) -> WebUiResult<()>;

    /// Request deletion of the named file or folder.
    async fn delete_element(&mut self, name: &str) -> WebUiResult<()>;

    /// Request a rename of the named file or folder.
    async fn rename_element(&mut self, from: &str, to: &str) -> WebUiResult<()>;

    // === Queries ===

    /// Return the currently visible rows.
    async fn list_all_rows(&mut self) -> WebUiResult<Vec<FileRow>>;

    /// Block until the named element is visible, or fail with a timeout.
    async fn wait_for_visible(&mut self, name: &str) -> WebUiResult<()>;

    /// Fail the scenario if the named element is listed.
    async fn assert_not_listed(&mut self, name: &str) -> WebUiResult<()>;
}
