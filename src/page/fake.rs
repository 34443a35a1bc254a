//! In-memory fake of the files page.
//!
//! Models just enough of the files app to run the acceptance scenarios
//! without a browser: a folder tree of rows, a current-folder cursor, the
//! show-hidden setting, and an ordered log of every driver call so tests
//! can verify call sequencing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use super::{ElementKind, FileRow, FilesPage, PageKind};
use crate::error::{WebUiError, WebUiResult};

/// Path of the root folder in the fake tree.
const ROOT: &str = "";

/// One driver call, as issued by a scenario step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCall {
    NavigateToFilesPage,
    WaitForFilesTable,
    NavigateToFolder(String),
    ReloadPage,
    EnableShowHiddenFiles,
    CreateFolder { name: String, expect_valid: bool },
    DeleteElement(String),
    RenameElement { from: String, to: String },
    ListAllRows,
    WaitForVisible(String),
    AssertNotListed(String),
}

/// An in-memory files page.
#[derive(Debug, Clone, Default)]
pub struct FakeFilesPage {
    /// Folder path -> rows. `""` is the root folder.
    folders: BTreeMap<String, Vec<FileRow>>,
    /// Path of the folder currently shown.
    current: String,
    /// Whether hidden entries are listed.
    show_hidden: bool,
    /// Whether the files page has been opened.
    on_files_page: bool,
    /// Ordered log of every call issued against this driver.
    calls: Vec<PageCall>,
}

impl FakeFilesPage {
    /// Create an empty fake page with only a root folder.
    pub fn new() -> Self {
        let mut folders = BTreeMap::new();
        folders.insert(ROOT.to_string(), Vec::new());
        Self {
            folders,
            current: ROOT.to_string(),
            show_hidden: false,
            on_files_page: false,
            calls: Vec::new(),
        }
    }

    /// Create a fake page seeded with the standard acceptance skeleton.
    pub fn with_fixtures() -> Self {
        let mut page = Self::new();
        page.seed_file(ROOT, "lorem.txt");
        page.seed_file(ROOT, "data.zip");
        page.seed_file(ROOT, ".hidden-file");
        page.seed_folder(ROOT, "simple-folder");
        page.seed_folder(ROOT, "simple-empty-folder");
        page.seed_folder(ROOT, ".hidden-folder");
        page.seed_file("simple-folder", "lorem.txt");
        page.seed_file("simple-folder", "inside.txt");
        page
    }

    /// Seed a file row into the folder at `folder_path` (`""` for root).
    pub fn seed_file(&mut self, folder_path: &str, name: impl Into<String>) {
        let row = FileRow::file(name);
        self.folders.entry(folder_path.to_string()).or_default().push(row);
    }

    /// Seed a folder row (and its empty contents) into `folder_path`.
    pub fn seed_folder(&mut self, folder_path: &str, name: impl Into<String>) {
        let name = name.into();
        let child = child_path(folder_path, &name);
        self.folders
            .entry(folder_path.to_string())
            .or_default()
            .push(FileRow::folder(name));
        self.folders.entry(child).or_default();
    }

    /// Every call issued so far, in order.
    pub fn calls(&self) -> &[PageCall] {
        &self.calls
    }

    /// Path of the folder currently shown.
    pub fn current_folder(&self) -> &str {
        &self.current
    }

    /// Whether hidden entries are currently listed.
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Whether the files page has been opened.
    pub fn is_on_files_page(&self) -> bool {
        self.on_files_page
    }

    fn require_files_page(&self) -> WebUiResult<()> {
        if self.on_files_page {
            Ok(())
        } else {
            Err(WebUiError::navigation("the files page has not been opened"))
        }
    }

    fn current_rows(&self) -> &[FileRow] {
        self.folders.get(&self.current).map(Vec::as_slice).unwrap_or(&[])
    }

    fn visible_row(&self, name: &str) -> Option<&FileRow> {
        self.current_rows()
            .iter()
            .find(|row| row.name == name && (self.show_hidden || !row.hidden))
    }

    /// Remove a folder's contents, including nested folders.
    fn remove_subtree(&mut self, path: &str) {
        let prefix = format!("{path}/");
        self.folders
            .retain(|key, _| key != path && !key.starts_with(&prefix));
    }

    /// Move a folder's contents (and nested folders) to a new path.
    fn move_subtree(&mut self, from: &str, to: &str) {
        let prefix = format!("{from}/");
        let moved: Vec<(String, Vec<FileRow>)> = self
            .folders
            .iter()
            .filter(|(key, _)| key.as_str() == from || key.starts_with(&prefix))
            .map(|(key, rows)| {
                let suffix = &key[from.len()..];
                (format!("{to}{suffix}"), rows.clone())
            })
            .collect();
        self.remove_subtree(from);
        self.folders.extend(moved);
    }
}

/// Folder-name validity rule enforced by the UI.
fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name != "." && name != ".." && !name.contains('/')
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

#[async_trait]
impl FilesPage for FakeFilesPage {
    fn kind(&self) -> PageKind {
        PageKind::Fake
    }

    async fn navigate_to_files_page(&mut self) -> WebUiResult<()> {
        self.calls.push(PageCall::NavigateToFilesPage);
        debug!("navigating to the files page");
        self.on_files_page = true;
        self.current = ROOT.to_string();
        Ok(())
    }

    async fn wait_for_files_table(&mut self) -> WebUiResult<()> {
        self.calls.push(PageCall::WaitForFilesTable);
        if self.on_files_page {
            Ok(())
        } else {
            Err(WebUiError::timeout("files table did not become visible"))
        }
    }

    async fn navigate_to_folder(&mut self, name: &str) -> WebUiResult<()> {
        self.calls.push(PageCall::NavigateToFolder(name.to_string()));
        self.require_files_page()?;
        match self.visible_row(name) {
            Some(row) if row.kind == ElementKind::Folder => {
                self.current = child_path(&self.current, name);
                debug!(folder = %self.current, "entered folder");
                Ok(())
            }
            Some(_) => Err(WebUiError::navigation(format!(
                "'{name}' is a file, not a folder"
            ))),
            None => Err(WebUiError::element_not_found(name)),
        }
    }

    async fn reload_page(&mut self) -> WebUiResult<()> {
        self.calls.push(PageCall::ReloadPage);
        self.require_files_page()?;
        debug!("reloaded the current page");
        Ok(())
    }

    async fn enable_show_hidden_files(&mut self) -> WebUiResult<()> {
        self.calls.push(PageCall::EnableShowHiddenFiles);
        self.require_files_page()?;
        self.show_hidden = true;
        Ok(())
    }

    async fn create_folder(&mut self, name: &str, expect_valid: bool) -> WebUiResult<()> {
        self.calls.push(PageCall::CreateFolder {
            name: name.to_string(),
            expect_valid,
        });
        self.require_files_page()?;

        let valid = is_valid_name(name);
        match (valid, expect_valid) {
            (true, true) => {
                if self.visible_row(name).is_some() {
                    return Err(WebUiError::validation(format!(
                        "an element named '{name}' already exists"
                    )));
                }
                let current = self.current.clone();
                self.seed_folder(&current, name);
                debug!(folder = name, "created folder");
                Ok(())
            }
            (false, true) => Err(WebUiError::validation(format!(
                "folder name '{name}' was rejected by the UI"
            ))),
            (true, false) => Err(WebUiError::validation(format!(
                "expected folder name '{name}' to be rejected, but it is valid"
            ))),
            (false, false) => Ok(()),
        }
    }

    async fn delete_element(&mut self, name: &str) -> WebUiResult<()> {
        self.calls.push(PageCall::DeleteElement(name.to_string()));
        self.require_files_page()?;

        let row = self
            .visible_row(name)
            .cloned()
            .ok_or_else(|| WebUiError::element_not_found(name))?;

        let current = self.current.clone();
        if let Some(rows) = self.folders.get_mut(&current) {
            rows.retain(|r| r.name != name);
        }
        if row.kind == ElementKind::Folder {
            let child = child_path(&current, name);
            self.remove_subtree(&child);
        }
        debug!(element = name, "deleted element");
        Ok(())
    }

    async fn rename_element(&mut self, from: &str, to: &str) -> WebUiResult<()> {
        self.calls.push(PageCall::RenameElement {
            from: from.to_string(),
            to: to.to_string(),
        });
        self.require_files_page()?;

        if !is_valid_name(to) {
            return Err(WebUiError::validation(format!(
                "name '{to}' was rejected by the UI"
            )));
        }
        let row = self
            .visible_row(from)
            .cloned()
            .ok_or_else(|| WebUiError::element_not_found(from))?;
        if self.visible_row(to).is_some() {
            return Err(WebUiError::validation(format!(
                "an element named '{to}' already exists"
            )));
        }

        let current = self.current.clone();
        if let Some(rows) = self.folders.get_mut(&current) {
            if let Some(r) = rows.iter_mut().find(|r| r.name == from) {
                r.name = to.to_string();
                r.hidden = to.starts_with('.');
            }
        }
        if row.kind == ElementKind::Folder {
            let old = child_path(&current, from);
            let new = child_path(&current, to);
            self.move_subtree(&old, &new);
        }
        debug!(from, to, "renamed element");
        Ok(())
    }

    async fn list_all_rows(&mut self) -> WebUiResult<Vec<FileRow>> {
        self.calls.push(PageCall::ListAllRows);
        self.require_files_page()?;
        let show_hidden = self.show_hidden;
        Ok(self
            .current_rows()
            .iter()
            .filter(|row| show_hidden || !row.hidden)
            .cloned()
            .collect())
    }

    async fn wait_for_visible(&mut self, name: &str) -> WebUiResult<()> {
        self.calls.push(PageCall::WaitForVisible(name.to_string()));
        self.require_files_page()?;
        if self.visible_row(name).is_some() {
            Ok(())
        } else {
            Err(WebUiError::timeout(format!(
                "timed out waiting for '{name}' to become visible"
            )))
        }
    }

    async fn assert_not_listed(&mut self, name: &str) -> WebUiResult<()> {
        self.calls.push(PageCall::AssertNotListed(name.to_string()));
        self.require_files_page()?;
        if self.visible_row(name).is_some() {
            Err(WebUiError::assertion(format!("'{name}' is still listed")))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn operations_require_the_files_page() {
        let mut page = FakeFilesPage::with_fixtures();
        assert!(page.wait_for_files_table().await.is_err());
        assert!(page.list_all_rows().await.is_err());

        page.navigate_to_files_page().await.unwrap();
        page.wait_for_files_table().await.unwrap();
        assert!(page.list_all_rows().await.is_ok());
    }

    #[tokio::test]
    async fn hidden_entries_are_listed_only_with_the_setting_on() {
        let mut page = FakeFilesPage::with_fixtures();
        page.navigate_to_files_page().await.unwrap();

        let rows = page.list_all_rows().await.unwrap();
        assert!(rows.iter().all(|row| !row.name.starts_with('.')));
        assert!(page.wait_for_visible(".hidden-file").await.is_err());
        page.assert_not_listed(".hidden-file").await.unwrap();

        page.enable_show_hidden_files().await.unwrap();
        page.wait_for_visible(".hidden-file").await.unwrap();
        page.wait_for_visible(".hidden-folder").await.unwrap();
        assert!(page.assert_not_listed(".hidden-file").await.is_err());
    }

    #[tokio::test]
    async fn create_folder_honors_the_validity_flag() {
        let mut page = FakeFilesPage::new();
        page.navigate_to_files_page().await.unwrap();

        page.create_folder("docs", true).await.unwrap();
        page.wait_for_visible("docs").await.unwrap();

        // invalid names never create a row
        assert!(page.create_folder("sub/dir", true).await.is_err());
        page.create_folder("sub/dir", false).await.unwrap();
        page.assert_not_listed("sub/dir").await.unwrap();

        // a valid name with the invalid flag is a test-expectation failure
        assert!(page.create_folder("plans", false).await.is_err());
        page.assert_not_listed("plans").await.unwrap();

        // duplicate creation is rejected
        assert!(page.create_folder("docs", true).await.is_err());
    }

    #[tokio::test]
    async fn navigating_into_a_folder_shows_its_contents() {
        let mut page = FakeFilesPage::with_fixtures();
        page.navigate_to_files_page().await.unwrap();

        page.navigate_to_folder("simple-folder").await.unwrap();
        assert_eq!(page.current_folder(), "simple-folder");
        page.wait_for_visible("inside.txt").await.unwrap();

        page.navigate_to_files_page().await.unwrap();
        assert_eq!(page.current_folder(), "");
        assert!(page.navigate_to_folder("lorem.txt").await.is_err());
        assert!(page.navigate_to_folder("no-such-folder").await.is_err());
    }

    #[tokio::test]
    async fn empty_folders_list_no_rows() {
        let mut page = FakeFilesPage::with_fixtures();
        page.navigate_to_files_page().await.unwrap();
        page.navigate_to_folder("simple-empty-folder").await.unwrap();

        let rows = page.list_all_rows().await.unwrap();
        assert_eq!(rows, Vec::<FileRow>::new());
    }

    #[tokio::test]
    async fn deleting_a_folder_removes_its_contents() {
        let mut page = FakeFilesPage::with_fixtures();
        page.navigate_to_files_page().await.unwrap();

        page.delete_element("simple-folder").await.unwrap();
        page.assert_not_listed("simple-folder").await.unwrap();
        assert!(page.navigate_to_folder("simple-folder").await.is_err());

        // deleting again fails: the row is gone
        assert!(page.delete_element("simple-folder").await.is_err());
    }

    #[tokio::test]
    async fn deleting_a_hidden_element_requires_the_setting() {
        let mut page = FakeFilesPage::with_fixtures();
        page.navigate_to_files_page().await.unwrap();

        assert!(page.delete_element(".hidden-file").await.is_err());
        page.enable_show_hidden_files().await.unwrap();
        page.delete_element(".hidden-file").await.unwrap();
    }

    #[tokio::test]
    async fn renaming_keeps_folder_contents() {
        let mut page = FakeFilesPage::with_fixtures();
        page.navigate_to_files_page().await.unwrap();

        page.rename_element("simple-folder", "projects").await.unwrap();
        page.assert_not_listed("simple-folder").await.unwrap();
        page.navigate_to_folder("projects").await.unwrap();
        page.wait_for_visible("inside.txt").await.unwrap();
    }

    #[tokio::test]
    async fn rename_rejects_collisions_and_invalid_names() {
        let mut page = FakeFilesPage::with_fixtures();
        page.navigate_to_files_page().await.unwrap();

        assert!(page.rename_element("lorem.txt", "data.zip").await.is_err());
        assert!(page.rename_element("lorem.txt", "a/b.txt").await.is_err());
        assert!(page.rename_element("missing.txt", "found.txt").await.is_err());

        page.rename_element("lorem.txt", "ipsum.txt").await.unwrap();
        page.wait_for_visible("ipsum.txt").await.unwrap();
        page.assert_not_listed("lorem.txt").await.unwrap();
    }

    #[tokio::test]
    async fn every_call_is_logged_in_order() {
        let mut page = FakeFilesPage::new();
        page.navigate_to_files_page().await.unwrap();
        page.create_folder("docs", true).await.unwrap();
        page.delete_element("docs").await.unwrap();

        assert_eq!(
            page.calls(),
            &[
                PageCall::NavigateToFilesPage,
                PageCall::CreateFolder {
                    name: "docs".to_string(),
                    expect_valid: true,
                },
                PageCall::DeleteElement("docs".to_string()),
            ]
        );
    }
}
