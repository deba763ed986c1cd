//! Given steps for dashboard and session BDD scenarios.

use super::world::DeckWorld;
use rstest_bdd_macros::given;
use taskdeck::{
    session::adapters::InMemoryNavigator,
    storage::{KeyValueStore, StorageKey},
};

#[given("a signed-in session with nothing stored")]
fn signed_in_with_nothing_stored(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    world.slot.set(StorageKey::Token, "demo-token")?;
    Ok(())
}

#[given("a signed-in session with an empty task list")]
fn signed_in_with_empty_list(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    world.slot.set(StorageKey::Token, "demo-token")?;
    world.slot.set(StorageKey::Tasks, "[]")?;
    Ok(())
}

#[given("a signed-in session whose stored tasks are corrupt")]
fn signed_in_with_corrupt_tasks(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    world.slot.set(StorageKey::Token, "demo-token")?;
    world.slot.set(StorageKey::Tasks, "{not json")?;
    Ok(())
}

#[given("a stored session token")]
fn stored_session_token(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    world.slot.set(StorageKey::Token, "demo-token")?;
    Ok(())
}

#[given(r#"the last route "{path}""#)]
fn last_route(world: &mut DeckWorld, path: String) -> Result<(), eyre::Report> {
    world.slot.set(StorageKey::LastRoute, &path)?;
    Ok(())
}

#[given(r#"the browser is at "{path}""#)]
fn browser_is_at(world: &mut DeckWorld, path: String) {
    world.navigator = InMemoryNavigator::starting_at(path);
}
