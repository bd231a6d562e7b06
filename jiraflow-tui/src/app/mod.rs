mod actions;
mod spawn;

use crate::{components, keymap, theme::Theme};
use actions::{
    dispatch_due_lookup, handle_clear_search, handle_confirm, handle_exit_search, handle_go_back,
    handle_next_field, handle_previous_field, handle_quit, handle_start_search, handle_text_edit,
};
use crossterm::event::{self, Event, KeyEventKind};
use jiraflow_core::{
    action::Action,
    config::KeysConfig,
    error::FlowError,
    event::AppEvent,
    git::GitProvider,
    jira::TicketLookup,
    state::{AppState, Mode, Outcome, TextInput},
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
};
use spawn::spawn_branch_loading;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    time::{Duration, Instant},
};

/// How the wizard ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardExit {
    /// The user backed out or quit before a branch was created
    Cancelled,
    /// The user left the completion screen
    Completed(Outcome),
}

/// Handle for dispatching background work
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::Sender<AppEvent>,
    cancel: Arc<AtomicBool>,
}

impl EventSender {
    /// Send an event from a background thread to the main loop
    pub fn send(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    lookup: &Arc<dyn TicketLookup>,
    theme: &Theme,
    keys: &KeysConfig,
) -> anyhow::Result<WizardExit> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let cancel = Arc::new(AtomicBool::new(false));
    let event_sender = EventSender {
        tx,
        cancel: Arc::clone(&cancel),
    };
    let spinner_start = Instant::now();

    if state.loading_branches {
        spawn_branch_loading(git, &event_sender);
    }

    loop {
        terminal.draw(|f| draw(f, state, theme, keys, &spinner_start))?;

        dispatch_due_lookup(state, lookup, &event_sender, Instant::now());

        // Check background channel (non-blocking)
        if let Ok(app_event) = rx.try_recv() {
            process_app_event(app_event, state);
            continue;
        }

        // Poll with a timeout so the spinner animates and the channel is rechecked.
        // Resize events need no handling: the next draw lays out for the new size.
        if event::poll(Duration::from_millis(80))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Clear error on any keypress
            state.error = None;

            if let Some(action) = keymap::resolve_action(key, state, keys)
                && let Some(exit) = process_action(action, state, git, &event_sender)
            {
                // Signal cancellation to background threads
                cancel.store(true, Ordering::Relaxed);
                log::info!("wizard exited: {exit:?}");
                return Ok(exit);
            }
        }
    }
}

fn spinner_frame(start: &Instant) -> &'static str {
    let elapsed = start.elapsed().as_millis();
    let frame_idx = (elapsed / 80) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[frame_idx]
}

fn draw(f: &mut Frame, state: &mut AppState, theme: &Theme, keys: &KeysConfig, start: &Instant) {
    let (main_area, error_area) = if state.error.is_some() {
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(f.area());
        (chunks[0], Some(chunks[1]))
    } else {
        (f.area(), None)
    };

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(main_area);

    let page_rows = active_list_page_rows(body_area, &state.mode);
    state.set_active_list_page_rows(page_rows);
    if let Some(list) = state.active_list_mut() {
        list.update_scroll_offset(page_rows);
    }

    let spinner = spinner_frame(start);
    components::header::draw(f, header_area, state, theme);
    match &state.mode {
        Mode::TypeSelection(_) => components::type_selector::draw(f, body_area, state, theme),
        Mode::BranchSelection(_) => {
            components::branch_picker::draw(f, body_area, state, theme, spinner);
        }
        Mode::TicketInput(_) => components::ticket_form::draw(f, body_area, state, theme, spinner),
        Mode::Confirmation(_) => {
            components::confirmation::draw(f, body_area, state, theme, spinner);
        }
        Mode::Complete(_) => components::completion::draw(f, body_area, state, theme),
    }
    components::footer::draw(f, footer_area, state, theme, keys);

    if let Some(area) = error_area {
        components::error_bar::draw(f, area, state, theme);
    }
}

fn list_rows_from_list_area(list_area: Rect) -> usize {
    usize::from(list_area.height.saturating_sub(2)).max(1)
}

fn active_list_page_rows(body_area: Rect, mode: &Mode) -> usize {
    match mode {
        Mode::TypeSelection(_) => list_rows_from_list_area(body_area),
        Mode::BranchSelection(_) => {
            let [_, list_area] =
                Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(body_area);
            list_rows_from_list_area(list_area)
        }
        _ => 1,
    }
}

/// Handle events from background tasks
fn process_app_event(event: AppEvent, state: &mut AppState) {
    match event {
        AppEvent::BranchesLoaded(Ok(branches)) => {
            log::debug!("loaded {} local branches", branches.len());
            state.set_branches(branches);
        }
        AppEvent::BranchesLoaded(Err(e)) => {
            log::warn!("failed to list branches: {e}");
            state.set_branches(Vec::new());
            state.error = Some(FlowError::from(e).user_message());
        }
        AppEvent::TitleFetched { ticket_id, result } => {
            if let Mode::TicketInput(form) = &mut state.mode {
                form.apply_fetched_title(&ticket_id, result);
            } else {
                log::debug!("dropping title for {ticket_id}: form no longer shown");
            }
        }
        AppEvent::BranchCreated { name, base } => {
            state.finish(Outcome::Created { branch: name, base });
        }
        AppEvent::BranchCreateFailed { name, error } => {
            log::error!("failed to create branch {name}: {error}");
            state.finish(Outcome::failed(&name, &FlowError::from(error)));
        }
    }
}

fn handle_movement_actions(action: &Action, state: &mut AppState) -> bool {
    let page_rows: i32 = state.active_list_page_rows().try_into().unwrap_or(i32::MAX);

    let Some(list) = state.active_list_mut() else {
        return false;
    };
    let list_len: i32 = list.len.try_into().unwrap_or(i32::MAX);
    let page_step = page_rows.max(1).min(list_len.max(1));
    match action {
        Action::MoveSelection(delta) => list.move_selection(*delta),
        Action::PageUp => list.move_selection(-page_step),
        Action::PageDown => list.move_selection(page_step),
        Action::MoveTop => list.move_to_top(),
        Action::MoveBottom => list.move_to_bottom(),
        _ => return false,
    }
    true
}

#[allow(clippy::needless_pass_by_value)]
fn process_action(
    action: Action,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    sender: &EventSender,
) -> Option<WizardExit> {
    if handle_movement_actions(&action, state) {
        return None;
    }

    match action {
        Action::Quit => return handle_quit(state),
        Action::GoBack => return handle_go_back(state),
        Action::Confirm => return handle_confirm(state, git, sender),

        Action::StartSearch => handle_start_search(state),
        Action::ExitSearch => handle_exit_search(state),
        Action::ClearSearch => handle_clear_search(state),

        Action::NextField => handle_next_field(state),
        Action::PreviousField => handle_previous_field(state),

        Action::InsertChar(c) => handle_text_edit(state, |input| {
            input.insert_char(c);
            true
        }),
        Action::DeleteBackwardChar => handle_text_edit(state, TextInput::backspace),
        Action::DeleteBackwardWord => handle_text_edit(state, TextInput::delete_word),
        Action::DeleteForwardChar => handle_text_edit(state, TextInput::delete_forward_char),
        Action::CursorLeft => handle_text_edit(state, |input| {
            input.cursor_left();
            false
        }),
        Action::CursorRight => handle_text_edit(state, |input| {
            input.cursor_right();
            false
        }),
        Action::CursorStart => handle_text_edit(state, |input| {
            input.cursor_start();
            false
        }),
        Action::CursorEnd => handle_text_edit(state, |input| {
            input.cursor_end();
            false
        }),

        // Movement on a screen without a list
        Action::MoveSelection(_)
        | Action::PageUp
        | Action::PageDown
        | Action::MoveTop
        | Action::MoveBottom => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiraflow_core::{
        branch::GeneratorConfig,
        git::{BranchCandidate, GitError, mock::MockGitProvider},
        jira::{LookupError, mock::MockTicketLookup},
        state::{BranchTypeItem, FormField, LOOKUP_DEBOUNCE, TitleFetchStatus},
    };

    fn make_sender() -> (EventSender, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let sender = EventSender {
            tx,
            cancel: Arc::new(AtomicBool::new(false)),
        };
        (sender, rx)
    }

    fn make_state(lookup_available: bool) -> AppState {
        let mut state = AppState::new(
            vec![
                BranchTypeItem::new("feature", "feature", true),
                BranchTypeItem::new("hotfix", "hotfix", false),
            ],
            GeneratorConfig::default(),
            lookup_available,
        );
        state.set_branches(vec![
            BranchCandidate::new("develop", false),
            BranchCandidate::new("feature/user-auth", false),
            BranchCandidate::new("main", true),
        ]);
        state
    }

    fn outcome(state: &AppState) -> Option<&Outcome> {
        match &state.mode {
            Mode::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    struct Harness {
        state: AppState,
        git: Arc<dyn GitProvider>,
        lookup: Arc<dyn TicketLookup>,
        sender: EventSender,
        rx: mpsc::Receiver<AppEvent>,
    }

    impl Harness {
        fn new(git: Arc<dyn GitProvider>, lookup: MockTicketLookup) -> Self {
            let (sender, rx) = make_sender();
            Self {
                state: make_state(lookup.available),
                git,
                lookup: Arc::new(lookup),
                sender,
                rx,
            }
        }

        fn offline() -> Self {
            let lookup = MockTicketLookup {
                available: false,
                ..Default::default()
            };
            Self::new(Arc::new(MockGitProvider::default()), lookup)
        }

        fn act(&mut self, action: Action) -> Option<WizardExit> {
            process_action(action, &mut self.state, &self.git, &self.sender)
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.act(Action::InsertChar(c));
            }
        }

        /// Run the loop's lookup dispatch as if typing stopped a while ago
        fn settle_lookup(&mut self) {
            dispatch_due_lookup(
                &mut self.state,
                &self.lookup,
                &self.sender,
                Instant::now() + LOOKUP_DEBOUNCE,
            );
        }

        fn next_event(&mut self) {
            self.settle_lookup();
            let event = self.rx.recv_timeout(Duration::from_secs(2)).unwrap();
            process_app_event(event, &mut self.state);
        }

        fn advance_to_confirmation(&mut self) {
            self.act(Action::Confirm);
            self.act(Action::Confirm);
            self.type_text("PROJ-1");
            self.act(Action::NextField);
            self.type_text("Add login");
            self.act(Action::Confirm);
        }
    }

    #[test]
    fn test_search_main_and_enter_reaches_ticket_input() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        assert!(matches!(h.state.mode, Mode::BranchSelection(_)));
        assert_eq!(h.state.selections.branch_type, "feature");

        h.act(Action::StartSearch);
        h.type_text("main");
        h.act(Action::Confirm);

        assert!(matches!(h.state.mode, Mode::TicketInput(_)));
        assert_eq!(h.state.selections.base_branch, "main");
    }

    #[test]
    fn test_search_with_no_matches_does_not_advance() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        h.act(Action::StartSearch);
        h.type_text("zzz");
        h.act(Action::Confirm);

        let Mode::BranchSelection(picker) = &h.state.mode else {
            panic!("expected branch selection, got {:?}", h.state.mode);
        };
        assert!(!picker.searching);
        assert_eq!(picker.query.text, "zzz");
        assert!(h.state.selections.base_branch.is_empty());
    }

    #[test]
    fn test_clear_search_restores_list() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        h.act(Action::StartSearch);
        h.type_text("ftr");
        if let Mode::BranchSelection(picker) = &h.state.mode {
            assert_eq!(picker.visible_len(), 1);
        }
        h.act(Action::DeleteBackwardChar);
        h.act(Action::ClearSearch);
        let Mode::BranchSelection(picker) = &h.state.mode else {
            panic!("expected branch selection");
        };
        assert!(picker.query.is_empty());
        assert_eq!(picker.visible_len(), 3);
    }

    #[test]
    fn test_browse_keys_move_highlight() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        // "main" is current and highlighted first
        h.act(Action::MoveTop);
        h.act(Action::MoveSelection(1));
        h.act(Action::Confirm);
        assert_eq!(h.state.selections.base_branch, "feature/user-auth");
    }

    #[test]
    fn test_invalid_ticket_stays_on_form() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        h.act(Action::Confirm);
        h.type_text("proj-1");
        h.act(Action::Confirm);

        let Mode::TicketInput(form) = &h.state.mode else {
            panic!("expected ticket input");
        };
        assert!(!form.is_ticket_valid);
        assert!(form.visible_ticket_error().is_some());
    }

    #[test]
    fn test_back_from_confirmation_preserves_ticket_fields() {
        let mut h = Harness::offline();
        h.advance_to_confirmation();
        let Mode::Confirmation(confirmation) = &h.state.mode else {
            panic!("expected confirmation, got {:?}", h.state.mode);
        };
        assert_eq!(confirmation.branch_name, "feature/PROJ-1-add-login");

        assert_eq!(h.act(Action::GoBack), None);
        let Mode::TicketInput(form) = &h.state.mode else {
            panic!("expected ticket input");
        };
        assert_eq!(form.ticket.text, "PROJ-1");
        assert_eq!(form.title.text, "Add login");
        assert_eq!(form.focus, FormField::Ticket);
    }

    #[test]
    fn test_back_navigation_table() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        h.act(Action::Confirm);
        assert!(matches!(h.state.mode, Mode::TicketInput(_)));
        h.act(Action::GoBack);
        assert!(matches!(h.state.mode, Mode::BranchSelection(_)));
        h.act(Action::GoBack);
        assert!(matches!(h.state.mode, Mode::TypeSelection(_)));
        assert_eq!(h.act(Action::GoBack), Some(WizardExit::Cancelled));
    }

    #[test]
    fn test_quit_before_completion_is_cancellation() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        assert_eq!(h.act(Action::Quit), Some(WizardExit::Cancelled));
    }

    #[test]
    fn test_title_fetched_for_valid_ticket() {
        let git: Arc<dyn GitProvider> = Arc::new(MockGitProvider::default());
        let mut h = Harness::new(git, MockTicketLookup::with_titles(&[("PROJ-1", "Login page")]));
        h.act(Action::Confirm);
        h.act(Action::Confirm);
        h.type_text("PROJ-1");
        if let Mode::TicketInput(form) = &h.state.mode {
            assert_eq!(form.fetch_status, TitleFetchStatus::Fetching);
        }

        h.next_event();
        let Mode::TicketInput(form) = &h.state.mode else {
            panic!("expected ticket input");
        };
        assert_eq!(form.title.text, "Login page");
        assert_eq!(form.fetch_status, TitleFetchStatus::Fetched);
    }

    #[test]
    fn test_failed_fetch_degrades_to_manual_title() {
        let git: Arc<dyn GitProvider> = Arc::new(MockGitProvider::default());
        let lookup = MockTicketLookup::default();
        let mut h = Harness::new(git, lookup);
        h.act(Action::Confirm);
        h.act(Action::Confirm);
        h.type_text("PROJ-9");
        h.next_event();

        let Mode::TicketInput(form) = &h.state.mode else {
            panic!("expected ticket input");
        };
        assert!(matches!(form.fetch_status, TitleFetchStatus::Failed(_)));
        assert!(form.title.is_empty());

        h.act(Action::Confirm);
        let Mode::Confirmation(confirmation) = &h.state.mode else {
            panic!("expected confirmation");
        };
        assert_eq!(confirmation.branch_name, "feature/PROJ-9-proj-9");
    }

    #[test]
    fn test_stale_title_is_discarded() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        h.act(Action::Confirm);
        h.type_text("PROJ-12");

        process_app_event(
            AppEvent::TitleFetched {
                ticket_id: "PROJ-1".to_string(),
                result: Ok("Old title".to_string()),
            },
            &mut h.state,
        );
        let Mode::TicketInput(form) = &h.state.mode else {
            panic!("expected ticket input");
        };
        assert!(form.title.is_empty());
    }

    #[test]
    fn test_title_arriving_after_leaving_form_is_ignored() {
        let mut h = Harness::offline();
        h.advance_to_confirmation();
        process_app_event(
            AppEvent::TitleFetched {
                ticket_id: "PROJ-1".to_string(),
                result: Err(LookupError::NotFound("PROJ-1".to_string())),
            },
            &mut h.state,
        );
        assert!(matches!(h.state.mode, Mode::Confirmation(_)));
        assert_eq!(h.state.selections.ticket_title, "Add login");
    }

    #[test]
    fn test_confirm_creates_branch_and_completes() {
        let mock = Arc::new(MockGitProvider::with_branches(&["main"], "main"));
        let git: Arc<dyn GitProvider> = mock.clone();
        let mut h = Harness::new(
            git,
            MockTicketLookup {
                available: false,
                ..Default::default()
            },
        );
        h.advance_to_confirmation();
        assert_eq!(h.act(Action::Confirm), None);
        let Mode::Confirmation(confirmation) = &h.state.mode else {
            panic!("expected confirmation");
        };
        assert!(confirmation.creating);

        // A second confirm while creating does nothing
        h.act(Action::Confirm);
        // Back is ignored while creating
        h.act(Action::GoBack);
        assert!(matches!(h.state.mode, Mode::Confirmation(_)));

        h.next_event();
        let expected = Outcome::Created {
            branch: "feature/PROJ-1-add-login".to_string(),
            base: "main".to_string(),
        };
        assert_eq!(outcome(&h.state), Some(&expected));
        assert_eq!(
            mock.created.lock().unwrap().as_slice(),
            &[("feature/PROJ-1-add-login".to_string(), "main".to_string())]
        );

        assert_eq!(h.act(Action::Quit), Some(WizardExit::Completed(expected)));
    }

    #[test]
    fn test_quit_while_creating_waits_for_outcome() {
        let mock = Arc::new(MockGitProvider::with_branches(&["main"], "main"));
        let git: Arc<dyn GitProvider> = mock.clone();
        let mut h = Harness::new(
            git,
            MockTicketLookup {
                available: false,
                ..Default::default()
            },
        );
        h.advance_to_confirmation();
        h.act(Action::Confirm);

        assert_eq!(h.act(Action::Quit), None);
        assert!(h.state.is_creating());

        h.next_event();
        let expected = Outcome::Created {
            branch: "feature/PROJ-1-add-login".to_string(),
            base: "main".to_string(),
        };
        assert_eq!(outcome(&h.state), Some(&expected));
        assert_eq!(h.act(Action::Quit), Some(WizardExit::Completed(expected)));
    }

    #[test]
    fn test_title_lookup_runs_once_typing_settles() {
        let git: Arc<dyn GitProvider> = Arc::new(MockGitProvider::default());
        let mut h = Harness::new(git, MockTicketLookup::with_titles(&[("PROJ-12", "Login page")]));
        h.act(Action::Confirm);
        h.act(Action::Confirm);
        h.type_text("PROJ-123");
        h.act(Action::DeleteBackwardChar);

        // Nothing is dispatched until the ticket field has been quiet
        assert!(h.rx.try_recv().is_err());

        h.next_event();
        let Mode::TicketInput(form) = &h.state.mode else {
            panic!("expected ticket input");
        };
        assert_eq!(form.title.text, "Login page");
        assert!(h.rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_creation_failure_reaches_complete_with_suggestions() {
        let mock = MockGitProvider::default();
        *mock.create_branch_result.lock().unwrap() = Some(Err(GitError::BranchExists(
            "feature/PROJ-1-add-login".to_string(),
        )));
        let mut h = Harness::new(
            Arc::new(mock),
            MockTicketLookup {
                available: false,
                ..Default::default()
            },
        );
        h.advance_to_confirmation();
        h.act(Action::Confirm);
        h.next_event();

        let Some(Outcome::Failed {
            branch,
            message,
            suggestions,
            exit_code,
        }) = outcome(&h.state)
        else {
            panic!("expected failure outcome, got {:?}", h.state.mode);
        };
        assert_eq!(branch, "feature/PROJ-1-add-login");
        assert_eq!(message, "A branch with this name already exists");
        assert!(!suggestions.is_empty());
        assert_eq!(*exit_code, 3);

        let exit = h.act(Action::GoBack);
        assert!(matches!(
            exit,
            Some(WizardExit::Completed(Outcome::Failed { .. }))
        ));
    }

    #[test]
    fn test_branch_listing_failure_degrades_to_empty_list() {
        let mut state = AppState::new(
            vec![BranchTypeItem::new("feature", "feature", true)],
            GeneratorConfig::default(),
            false,
        );
        process_app_event(
            AppEvent::BranchesLoaded(Err(GitError::NotARepository)),
            &mut state,
        );
        assert!(!state.loading_branches);
        assert!(state.branches.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("This directory is not a Git repository")
        );
    }

    #[test]
    fn test_branches_loaded_in_background() {
        let (sender, rx) = make_sender();
        let git: Arc<dyn GitProvider> =
            Arc::new(MockGitProvider::with_branches(&["develop", "main"], "main"));
        let mut state = AppState::new(
            vec![BranchTypeItem::new("feature", "feature", true)],
            GeneratorConfig::default(),
            false,
        );
        assert!(state.loading_branches);

        spawn_branch_loading(&git, &sender);
        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        process_app_event(event, &mut state);
        assert!(!state.loading_branches);
        assert_eq!(state.branches.len(), 2);
    }

    #[test]
    fn test_cancelled_sender_skips_work() {
        let (sender, rx) = make_sender();
        sender.cancel.store(true, Ordering::Relaxed);
        let git: Arc<dyn GitProvider> = Arc::new(MockGitProvider::default());
        spawn_branch_loading(&git, &sender);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_page_down_moves_by_visible_rows() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        h.state.set_active_list_page_rows(2);
        h.act(Action::MoveTop);
        h.act(Action::PageDown);
        let Mode::BranchSelection(picker) = &h.state.mode else {
            panic!("expected branch selection");
        };
        assert_eq!(picker.list.selected, Some(2));
    }

    #[test]
    fn test_cursor_edits_in_ticket_field() {
        let mut h = Harness::offline();
        h.act(Action::Confirm);
        h.act(Action::Confirm);
        h.type_text("PRJ-1");
        h.act(Action::CursorStart);
        h.act(Action::CursorRight);
        h.act(Action::InsertChar('O'));
        h.act(Action::CursorEnd);
        h.act(Action::DeleteBackwardChar);
        h.type_text("2");
        let Mode::TicketInput(form) = &h.state.mode else {
            panic!("expected ticket input");
        };
        assert_eq!(form.ticket.text, "PORJ-2");
        assert!(form.is_ticket_valid);
    }
}
