//! Deleted-elements flow against the in-memory page driver.
//!
//! Covers the scenario:
//! 1. Browse to the files page
//! 2. Delete a batch of elements
//! 3. Verify none of them is listed
//! 4. Reload and verify again

use webui_e2e_tests::prelude::*;

#[tokio::test]
async fn deleted_elements_are_absent_after_reload() {
    let mut page = FakeFilesPage::with_fixtures();
    page.navigate_to_files_page().await.expect("Failed to open files page");

    let mut deleted = DeletionTracker::new();
    deleted
        .delete_all(&mut page, ["lorem.txt", "data.zip", "simple-folder"])
        .await
        .expect("Failed to delete elements");

    assert_eq!(deleted.names(), &["lorem.txt", "data.zip", "simple-folder"]);

    deleted
        .assert_none_listed(&mut page)
        .await
        .expect("Deleted elements reappeared");
    deleted
        .assert_none_listed_after_reload(&mut page)
        .await
        .expect("Deleted elements reappeared after reload");

    // the remaining fixture rows are untouched
    let rows = page.list_all_rows().await.expect("Failed to list rows");
    assert!(rows.iter().any(|row| row.name == "simple-empty-folder"));
}

#[tokio::test]
async fn the_tracker_is_scoped_to_one_world() {
    let mut world = FilesWorld::with_page(Box::new(FakeFilesPage::with_fixtures()));
    world.page.navigate_to_files_page().await.unwrap();
    world
        .deleted
        .delete_all(world.page.as_mut(), ["lorem.txt"])
        .await
        .unwrap();
    assert_eq!(world.deleted.len(), 1);

    // a fresh world carries no deletion state over
    let next = FilesWorld::with_page(Box::new(FakeFilesPage::with_fixtures()));
    assert!(next.deleted.is_empty());
}

#[tokio::test]
async fn a_full_scenario_drives_only_the_page_trait() {
    let mut world = FilesWorld::with_page(Box::new(FakeFilesPage::new()));
    let page = &mut world.page;

    page.navigate_to_files_page().await.unwrap();
    page.wait_for_files_table().await.unwrap();
    page.create_folder("docs", true).await.unwrap();
    page.wait_for_visible("docs").await.unwrap();

    world
        .deleted
        .delete_all(world.page.as_mut(), ["docs"])
        .await
        .unwrap();
    world
        .deleted
        .assert_none_listed(world.page.as_mut())
        .await
        .unwrap();

    let rows = world.page.list_all_rows().await.unwrap();
    assert!(rows.is_empty());
}
