//! When steps for dashboard and session BDD scenarios.

use super::world::DeckWorld;
use rstest_bdd_macros::when;
use taskdeck::{
    session::domain::LoginForm,
    task::domain::{TaskFields, TaskId},
};

#[when("the dashboard opens")]
fn dashboard_opens(world: &mut DeckWorld) {
    world.open();
}

fn submit(world: &mut DeckWorld, fields: &TaskFields) -> Result<(), eyre::Report> {
    let deck = world.deck_mut()?;
    let _blank = deck
        .begin_create()
        .ok_or_else(|| eyre::eyre!("task form did not open"))?;
    let result = deck.save_task(fields);
    world.last_form_error = result.err();
    Ok(())
}

#[when(r#"a task titled "{title}" with priority "{priority}" due "{due}" is saved"#)]
fn task_is_saved(
    world: &mut DeckWorld,
    title: String,
    priority: String,
    due: String,
) -> Result<(), eyre::Report> {
    let fields = TaskFields::new(title)
        .with_priority(priority)
        .with_due_date(due);
    submit(world, &fields)
}

#[when(r#"a task with the title "{title}" is submitted"#)]
fn task_is_submitted(world: &mut DeckWorld, title: String) -> Result<(), eyre::Report> {
    submit(world, &TaskFields::new(title))
}

#[when(r#"task {id:u64} is edited to priority "{priority}""#)]
fn task_is_edited(world: &mut DeckWorld, id: u64, priority: String) -> Result<(), eyre::Report> {
    let deck = world.deck_mut()?;
    let fields = deck
        .begin_edit(TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} cannot be edited"))?
        .with_priority(priority);
    deck.save_task(&fields)
        .map_err(|err| eyre::eyre!("edit rejected: {err}"))?;
    Ok(())
}

#[when("task {id:u64} is toggled")]
fn task_is_toggled(world: &mut DeckWorld, id: u64) -> Result<(), eyre::Report> {
    let _toggled = world.deck_mut()?.toggle_complete(TaskId::new(id));
    Ok(())
}

#[when("task {id:u64} is deleted")]
fn task_is_deleted(world: &mut DeckWorld, id: u64) -> Result<(), eyre::Report> {
    let _removed = world.deck_mut()?.delete_task(TaskId::new(id));
    Ok(())
}

#[when("deletion of task {id:u64} is requested")]
fn deletion_requested(world: &mut DeckWorld, id: u64) -> Result<(), eyre::Report> {
    world.last_prompt = world.deck_mut()?.request_delete(TaskId::new(id));
    Ok(())
}

#[when("the deletion is confirmed")]
fn deletion_confirmed(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    let _removed = world.deck_mut()?.confirm_delete();
    Ok(())
}

#[when("the deletion is cancelled")]
fn deletion_cancelled(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    world.deck_mut()?.cancel_delete();
    Ok(())
}

#[when(r#"the search term is "{term}""#)]
fn search_term_is(world: &mut DeckWorld, term: String) -> Result<(), eyre::Report> {
    world.deck_mut()?.set_search_term(&term);
    Ok(())
}

#[when("the search is cleared")]
fn search_is_cleared(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    world.deck_mut()?.set_search_term("");
    Ok(())
}

#[when(r#"the user logs in as "{email}" with "{password}""#)]
fn user_logs_in(world: &mut DeckWorld, email: String, password: String) -> Result<(), eyre::Report> {
    let outcome = world.deck_mut()?.login(&LoginForm::new(email, password));
    world.last_login_error = outcome.err();
    Ok(())
}

#[when("the user logs out")]
fn user_logs_out(world: &mut DeckWorld) -> Result<(), eyre::Report> {
    world.deck_mut()?.logout();
    Ok(())
}

#[when(r#"the user navigates to "{path}""#)]
fn user_navigates(world: &mut DeckWorld, path: String) -> Result<(), eyre::Report> {
    let decision = world.deck()?.navigate(&path);
    world.last_decision = Some(decision);
    Ok(())
}
