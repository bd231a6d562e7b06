use jiraflow_core::{
    git::GitProvider,
    jira::TicketLookup,
    state::{AppState, Mode, TextInput},
};
use std::{sync::Arc, time::Instant};

use super::spawn::{spawn_branch_creation, spawn_title_fetch};
use super::{EventSender, WizardExit};

/// How the wizard ends when the user leaves it from the current screen
fn exit_for(state: &AppState) -> WizardExit {
    match &state.mode {
        Mode::Complete(outcome) => WizardExit::Completed(outcome.clone()),
        _ => WizardExit::Cancelled,
    }
}

/// Quit, unless a branch is being created: its outcome must reach the completion screen.
pub(super) fn handle_quit(state: &AppState) -> Option<WizardExit> {
    if state.is_creating() {
        log::info!("quit ignored while the branch is being created");
        return None;
    }
    Some(exit_for(state))
}

pub(super) fn handle_go_back(state: &mut AppState) -> Option<WizardExit> {
    if state.go_back() {
        None
    } else {
        Some(exit_for(state))
    }
}

pub(super) fn handle_confirm(
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    sender: &EventSender,
) -> Option<WizardExit> {
    match &mut state.mode {
        Mode::TypeSelection(selector) => {
            if let Some(key) = selector.selection() {
                state.select_type(key);
            }
        }
        Mode::BranchSelection(picker) => {
            picker.exit_search();
            if let Some(name) = picker.selection() {
                state.select_base(name);
            }
        }
        Mode::TicketInput(form) => match form.submit() {
            Ok((ticket_id, title)) => state.submit_ticket(ticket_id, title),
            Err(e) => log::debug!("ticket rejected: {e}"),
        },
        Mode::Confirmation(_) => match state.begin_creation() {
            Some(Ok((name, base))) => {
                log::info!("creating branch {name} from {base}");
                spawn_branch_creation(git, sender, name, base);
            }
            Some(Err(e)) => log::warn!("refusing to create branch: {e}"),
            None => {}
        },
        Mode::Complete(_) => return Some(exit_for(state)),
    }
    None
}

pub(super) fn handle_start_search(state: &mut AppState) {
    if let Mode::BranchSelection(picker) = &mut state.mode {
        picker.start_search();
    }
}

pub(super) fn handle_exit_search(state: &mut AppState) {
    if let Mode::BranchSelection(picker) = &mut state.mode {
        picker.exit_search();
    }
}

pub(super) fn handle_clear_search(state: &mut AppState) {
    if let Mode::BranchSelection(picker) = &mut state.mode {
        picker.clear_search();
    }
}

pub(super) fn handle_next_field(state: &mut AppState) {
    if let Mode::TicketInput(form) = &mut state.mode {
        form.next_field();
    }
}

pub(super) fn handle_previous_field(state: &mut AppState) {
    if let Mode::TicketInput(form) = &mut state.mode {
        form.previous_field();
    }
}

/// Route an edit to whichever text input has focus. The closure reports whether the
/// text changed.
pub(super) fn handle_text_edit(state: &mut AppState, edit: impl FnOnce(&mut TextInput) -> bool) {
    match &mut state.mode {
        Mode::BranchSelection(picker) if picker.searching => picker.edit_query(edit),
        Mode::TicketInput(form) => form.edit(edit),
        _ => {}
    }
}

/// Start the title lookup once the ticket field has been quiet long enough.
pub(super) fn dispatch_due_lookup(
    state: &mut AppState,
    lookup: &Arc<dyn TicketLookup>,
    sender: &EventSender,
    now: Instant,
) {
    if let Mode::TicketInput(form) = &mut state.mode
        && let Some(ticket_id) = form.take_due_lookup(now)
    {
        spawn_title_fetch(lookup, sender, ticket_id);
    }
}
