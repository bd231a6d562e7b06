use super::input::TextInput;
use crate::{
    jira::LookupError,
    ticket::{TicketError, validate_ticket_id},
};
use std::time::{Duration, Instant};

/// Quiet time after the last ticket keystroke before a title lookup starts
pub const LOOKUP_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Ticket,
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleFetchStatus {
    Idle,
    Fetching,
    Fetched,
    Failed(String),
}

/// Ticket id + title form. The title may stay empty; the ticket must be valid to submit.
#[derive(Debug, Clone)]
pub struct TicketForm {
    pub ticket: TextInput,
    pub title: TextInput,
    pub focus: FormField,
    pub is_ticket_valid: bool,
    pub ticket_error: Option<TicketError>,
    pub fetch_status: TitleFetchStatus,
    /// Whether a title lookup collaborator can be used at all
    pub lookup_available: bool,
    /// Set once the user has tried to submit, so errors on an untouched field stay hidden until then
    show_errors: bool,
    /// Ticket id waiting for the debounce to pass, and when it was last edited
    pending_lookup: Option<(String, Instant)>,
}

impl TicketForm {
    pub fn new(lookup_available: bool) -> Self {
        Self {
            ticket: TextInput::default(),
            title: TextInput::default(),
            focus: FormField::Ticket,
            is_ticket_valid: false,
            ticket_error: None,
            fetch_status: TitleFetchStatus::Idle,
            lookup_available,
            show_errors: false,
            pending_lookup: None,
        }
    }

    /// Form prefilled with earlier answers, e.g. when coming back from confirmation.
    pub fn with_values(ticket: &str, title: &str, lookup_available: bool) -> Self {
        let mut form = Self::new(lookup_available);
        form.ticket.set(ticket);
        form.title.set(title);
        form.revalidate();
        form
    }

    pub fn focused_input(&self) -> &TextInput {
        match self.focus {
            FormField::Ticket => &self.ticket,
            FormField::Title => &self.title,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = FormField::Title;
    }

    pub fn previous_field(&mut self) {
        self.focus = FormField::Ticket;
    }

    /// Error text for the ticket field, if it should be shown.
    pub fn visible_ticket_error(&self) -> Option<String> {
        match &self.ticket_error {
            Some(TicketError::Missing) if !self.show_errors => None,
            other => other.as_ref().map(ToString::to_string),
        }
    }

    fn revalidate(&mut self) {
        match validate_ticket_id(&self.ticket.text) {
            Ok(()) => {
                self.is_ticket_valid = true;
                self.ticket_error = None;
            }
            Err(e) => {
                self.is_ticket_valid = false;
                self.ticket_error = Some(e);
            }
        }
    }

    /// Apply an edit to the focused field.
    ///
    /// A ticket edit that leaves the id valid, the title empty and a lookup possible
    /// schedules a lookup; see [`TicketForm::take_due_lookup`].
    pub fn edit(&mut self, edit: impl FnOnce(&mut TextInput) -> bool) {
        match self.focus {
            FormField::Title => {
                edit(&mut self.title);
            }
            FormField::Ticket => {
                let before = self.ticket.text.clone();
                edit(&mut self.ticket);
                if self.ticket.text == before {
                    return;
                }
                self.revalidate();
                // Any in-flight result is for the old id and will be dropped
                self.fetch_status = TitleFetchStatus::Idle;
                self.pending_lookup = None;
                if self.is_ticket_valid && self.title.is_empty() && self.lookup_available {
                    self.fetch_status = TitleFetchStatus::Fetching;
                    self.pending_lookup = Some((self.ticket.text.clone(), Instant::now()));
                }
            }
        }
    }

    /// The ticket id to look up, once [`LOOKUP_DEBOUNCE`] has passed since the last
    /// ticket edit. Each scheduled lookup is handed out once.
    pub fn take_due_lookup(&mut self, now: Instant) -> Option<String> {
        let (_, edited_at) = self.pending_lookup.as_ref()?;
        if now.saturating_duration_since(*edited_at) < LOOKUP_DEBOUNCE {
            return None;
        }
        let (ticket_id, _) = self.pending_lookup.take()?;
        if !self.title.is_empty() {
            self.fetch_status = TitleFetchStatus::Idle;
            return None;
        }
        Some(ticket_id)
    }

    /// Apply a lookup result. Results for a ticket id other than the current one are
    /// discarded; returns whether the result was applied.
    pub fn apply_fetched_title(
        &mut self,
        ticket_id: &str,
        result: Result<String, LookupError>,
    ) -> bool {
        if ticket_id != self.ticket.text {
            log::debug!(
                "discarding stale title for {ticket_id} (ticket is now {:?})",
                self.ticket.text
            );
            return false;
        }
        match result {
            Ok(title) => {
                if self.title.is_empty() {
                    self.title.set(title);
                }
                self.fetch_status = TitleFetchStatus::Fetched;
            }
            Err(e) => {
                log::warn!("title lookup failed: {e}");
                self.fetch_status = TitleFetchStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Validated `(ticket_id, title)`; marks errors visible on failure.
    pub fn submit(&mut self) -> Result<(String, String), TicketError> {
        self.show_errors = true;
        self.revalidate();
        if let Some(e) = &self.ticket_error {
            return Err(e.clone());
        }
        Ok((self.ticket.text.clone(), self.title.text.trim().to_string()))
    }
}
