//! Steps for the files page: navigation, folder management, deletion,
//! renaming, and listing assertions.

use anyhow::{ensure, Result};
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use crate::error::WebUiError;
use crate::world::FilesWorld;

#[given("the user has browsed to the files page")]
#[when("the user browses to the files page")]
async fn the_user_browses_to_the_files_page(world: &mut FilesWorld) -> Result<()> {
    world.page.navigate_to_files_page().await?;
    Ok(())
}

#[then("the files table should be displayed")]
async fn the_files_table_should_be_displayed(world: &mut FilesWorld) -> Result<()> {
    world.page.wait_for_files_table().await?;
    Ok(())
}

#[when(regex = r#"^the user creates a folder with the name "(.*)" using the webUI$"#)]
async fn the_user_creates_a_folder(world: &mut FilesWorld, name: String) -> Result<()> {
    world.page.create_folder(&name, true).await?;
    Ok(())
}

#[when(regex = r#"^the user creates a folder with the invalid name "(.*)" using the webUI$"#)]
async fn the_user_creates_a_folder_with_an_invalid_name(
    world: &mut FilesWorld,
    name: String,
) -> Result<()> {
    world.page.create_folder(&name, false).await?;
    Ok(())
}

#[when(regex = r#"^the user opens folder "(.*)" using the webUI$"#)]
async fn the_user_opens_folder(world: &mut FilesWorld, name: String) -> Result<()> {
    world.page.navigate_to_folder(&name).await?;
    Ok(())
}

#[when("the user enables the setting to view hidden folders on the webUI")]
async fn the_user_enables_viewing_hidden_folders(world: &mut FilesWorld) -> Result<()> {
    world.page.enable_show_hidden_files().await?;
    Ok(())
}

#[when(regex = r#"^the user deletes file/folder "(.*)" using the webUI$"#)]
async fn the_user_deletes_an_element(world: &mut FilesWorld, name: String) -> Result<()> {
    world.page.delete_element(&name).await?;
    Ok(())
}

#[when("the user deletes the following elements using the webUI")]
async fn the_user_deletes_the_following_elements(
    world: &mut FilesWorld,
    step: &Step,
) -> Result<()> {
    let table = step
        .table
        .as_ref()
        .ok_or_else(|| WebUiError::scenario("step requires a data table"))?;
    let names: Vec<String> = table
        .rows
        .iter()
        .filter_map(|row| row.first().cloned())
        .collect();

    let FilesWorld { page, deleted } = world;
    deleted.delete_all(page.as_mut(), names).await?;
    Ok(())
}

#[when(regex = r#"^the user renames file/folder "(.*)" to "(.*)" using the webUI$"#)]
async fn the_user_renames_an_element(
    world: &mut FilesWorld,
    from: String,
    to: String,
) -> Result<()> {
    world.page.rename_element(&from, &to).await?;
    Ok(())
}

#[when("the user reloads the current page of the webUI")]
async fn the_user_reloads_the_current_page(world: &mut FilesWorld) -> Result<()> {
    world.page.reload_page().await?;
    Ok(())
}

#[then("there should be no files/folders listed on the webUI")]
async fn there_should_be_no_elements_listed(world: &mut FilesWorld) -> Result<()> {
    let rows = world.page.list_all_rows().await?;
    ensure!(
        rows.is_empty(),
        "expected an empty file list, found {} row(s)",
        rows.len()
    );
    Ok(())
}

#[then(regex = r#"^file/folder "(.*)" should be listed on the webUI$"#)]
async fn an_element_should_be_listed(world: &mut FilesWorld, name: String) -> Result<()> {
    world.page.wait_for_visible(&name).await?;
    Ok(())
}

#[then(regex = r#"^file/folder "(.*)" should not be listed on the webUI$"#)]
async fn an_element_should_not_be_listed(world: &mut FilesWorld, name: String) -> Result<()> {
    world.page.assert_not_listed(&name).await?;
    Ok(())
}

#[then("the deleted elements should not be listed on the webUI")]
async fn the_deleted_elements_should_not_be_listed(world: &mut FilesWorld) -> Result<()> {
    let FilesWorld { page, deleted } = world;
    deleted.assert_none_listed(page.as_mut()).await?;
    Ok(())
}

#[then("the deleted elements should not be listed on the webUI after a page reload")]
async fn the_deleted_elements_should_not_be_listed_after_reload(
    world: &mut FilesWorld,
) -> Result<()> {
    let FilesWorld { page, deleted } = world;
    deleted.assert_none_listed_after_reload(page.as_mut()).await?;
    Ok(())
}
