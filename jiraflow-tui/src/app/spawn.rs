use jiraflow_core::{event::AppEvent, git::GitProvider, jira::TicketLookup};
use std::{
    sync::{Arc, atomic::Ordering},
    thread,
};

use super::EventSender;

pub(super) fn spawn_branch_loading(git: &Arc<dyn GitProvider>, sender: &EventSender) {
    let git = Arc::clone(git);
    let sender = sender.clone();
    thread::spawn(move || {
        if sender.cancel.load(Ordering::Relaxed) {
            return;
        }
        let result = git.list_local_branches();
        sender.send(AppEvent::BranchesLoaded(result));
    });
}

pub(super) fn spawn_title_fetch(
    lookup: &Arc<dyn TicketLookup>,
    sender: &EventSender,
    ticket_id: String,
) {
    let lookup = Arc::clone(lookup);
    let sender = sender.clone();
    log::debug!("fetching title for {ticket_id}");
    thread::spawn(move || {
        if sender.cancel.load(Ordering::Relaxed) {
            return;
        }
        let result = lookup.fetch_title(&ticket_id);
        sender.send(AppEvent::TitleFetched { ticket_id, result });
    });
}

pub(super) fn spawn_branch_creation(
    git: &Arc<dyn GitProvider>,
    sender: &EventSender,
    name: String,
    base: String,
) {
    let git = Arc::clone(git);
    let sender = sender.clone();
    thread::spawn(move || {
        if sender.cancel.load(Ordering::Relaxed) {
            return;
        }
        match git.create_and_switch_branch(&name, &base) {
            Ok(()) => sender.send(AppEvent::BranchCreated { name, base }),
            Err(error) => sender.send(AppEvent::BranchCreateFailed { name, error }),
        }
    });
}
