//! Then steps for dashboard and session BDD scenarios.

use super::world::DeckWorld;
use rstest_bdd_macros::then;
use taskdeck::{
    notification::Notification,
    session::domain::{Route, RouteDecision, View},
    storage::{KeyValueStore, StorageKey},
    task::{
        adapters::KeyValueTaskRepository,
        domain::{Task, TaskId},
        ports::TaskRepository,
    },
};
use std::sync::Arc;

fn ids(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| task.id().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn expect_list(label: &str, actual: &[Task], expected: &str) -> Result<(), eyre::Report> {
    let found = ids(actual);
    if found != expected {
        return Err(eyre::eyre!(
            "expected {label} list \"{expected}\", found \"{found}\""
        ));
    }
    Ok(())
}

#[then(r#"the pending list shows "{expected}""#)]
fn pending_list_shows(world: &DeckWorld, expected: String) -> Result<(), eyre::Report> {
    let snapshot = world.deck()?.snapshot();
    expect_list("pending", snapshot.tasks.pending(), &expected)
}

#[then("the pending list is empty")]
fn pending_list_is_empty(world: &DeckWorld) -> Result<(), eyre::Report> {
    let snapshot = world.deck()?.snapshot();
    expect_list("pending", snapshot.tasks.pending(), "")
}

#[then(r#"the completed list shows "{expected}""#)]
fn completed_list_shows(world: &DeckWorld, expected: String) -> Result<(), eyre::Report> {
    let snapshot = world.deck()?.snapshot();
    expect_list("completed", snapshot.tasks.completed(), &expected)
}

#[then("task {id:u64} is flagged overdue")]
fn task_is_overdue(world: &DeckWorld, id: u64) -> Result<(), eyre::Report> {
    let snapshot = world.deck()?.snapshot();
    if !snapshot.overdue.contains(&TaskId::new(id)) {
        return Err(eyre::eyre!(
            "expected task {id} to be overdue, overdue set is {:?}",
            snapshot.overdue
        ));
    }
    Ok(())
}

#[then("the collection holds {count:usize} tasks")]
fn collection_holds(world: &DeckWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.deck()?.tasks().len();
    if held != count {
        return Err(eyre::eyre!("expected {count} tasks, found {held}"));
    }
    Ok(())
}

#[then("the stored collection holds {count:usize} tasks")]
fn stored_collection_holds(world: &DeckWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = KeyValueTaskRepository::new(Arc::clone(&world.slot))
        .load()?
        .ok_or_else(|| eyre::eyre!("no tasks have been stored"))?;
    if stored.len() != count {
        return Err(eyre::eyre!(
            "expected {count} stored tasks, found {}",
            stored.len()
        ));
    }
    Ok(())
}

#[then("nothing has been stored")]
fn nothing_stored(world: &DeckWorld) -> Result<(), eyre::Report> {
    if let Some(stored) = world.slot.get(StorageKey::Tasks)? {
        return Err(eyre::eyre!("expected no stored tasks, found {stored}"));
    }
    Ok(())
}

#[then(r#"the latest notification is "{message}""#)]
fn latest_notification(world: &DeckWorld, message: String) -> Result<(), eyre::Report> {
    let latest = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("expected a notification, none shown"))?;
    if latest.message() != message {
        return Err(eyre::eyre!("expected notification \"{message}\", found {latest}"));
    }
    Ok(())
}

#[then("no notification is shown")]
fn no_notification(world: &DeckWorld) -> Result<(), eyre::Report> {
    let shown: Vec<Notification> = world.notifier.snapshot();
    if !shown.is_empty() {
        return Err(eyre::eyre!("expected no notifications, found {shown:?}"));
    }
    Ok(())
}

#[then(r#"the form reports "{message}""#)]
fn form_reports(world: &DeckWorld, message: String) -> Result<(), eyre::Report> {
    let error = world
        .last_form_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the form to be rejected"))?;
    if error.to_string() != message {
        return Err(eyre::eyre!("expected \"{message}\", found \"{error}\""));
    }
    Ok(())
}

#[then(r#"the confirmation prompt names "{title}""#)]
fn prompt_names(world: &DeckWorld, title: String) -> Result<(), eyre::Report> {
    match world.last_prompt.as_deref() {
        Some(shown) if shown == title => Ok(()),
        other => Err(eyre::eyre!("expected prompt for \"{title}\", found {other:?}")),
    }
}

#[then(r#"the location is "{path}""#)]
fn location_is(world: &DeckWorld, path: String) -> Result<(), eyre::Report> {
    let current = world.deck()?.current_route();
    if current != Route::new(path.as_str()) {
        return Err(eyre::eyre!("expected location {path}, found {current}"));
    }
    Ok(())
}

#[then("the session is authenticated")]
fn session_authenticated(world: &DeckWorld) -> Result<(), eyre::Report> {
    if !world.deck()?.is_authenticated() {
        return Err(eyre::eyre!("expected an authenticated session"));
    }
    Ok(())
}

#[then("the session is anonymous")]
fn session_anonymous(world: &DeckWorld) -> Result<(), eyre::Report> {
    if world.deck()?.is_authenticated() {
        return Err(eyre::eyre!("expected an anonymous session"));
    }
    Ok(())
}

#[then("a session token is stored")]
fn token_stored(world: &DeckWorld) -> Result<(), eyre::Report> {
    if world.slot.get(StorageKey::Token)?.is_none() {
        return Err(eyre::eyre!("expected a stored session token"));
    }
    Ok(())
}

#[then("no session token is stored")]
fn no_token_stored(world: &DeckWorld) -> Result<(), eyre::Report> {
    if let Some(token) = world.slot.get(StorageKey::Token)? {
        return Err(eyre::eyre!("expected no session token, found {token}"));
    }
    Ok(())
}

#[then(r#"the login form reports "{message}""#)]
fn login_form_reports(world: &DeckWorld, message: String) -> Result<(), eyre::Report> {
    let error = world
        .last_login_error
        .ok_or_else(|| eyre::eyre!("expected the login form to be rejected"))?;
    if error.to_string() != message {
        return Err(eyre::eyre!("expected \"{message}\", found \"{error}\""));
    }
    Ok(())
}

#[then("the not-found view is rendered")]
fn not_found_rendered(world: &DeckWorld) -> Result<(), eyre::Report> {
    match &world.last_decision {
        Some(RouteDecision::Render(View::NotFound)) => Ok(()),
        other => Err(eyre::eyre!("expected the not-found view, found {other:?}")),
    }
}
