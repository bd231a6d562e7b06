use super::{LookupError, TicketLookup};
use std::collections::HashMap;

pub struct MockTicketLookup {
    pub available: bool,
    pub titles: HashMap<String, String>,
    /// Returned for every lookup when set
    pub error: Option<String>,
}

impl Default for MockTicketLookup {
    fn default() -> Self {
        Self {
            available: true,
            titles: HashMap::new(),
            error: None,
        }
    }
}

impl MockTicketLookup {
    pub fn with_titles(titles: &[(&str, &str)]) -> Self {
        Self {
            titles: titles
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            ..Default::default()
        }
    }
}

impl TicketLookup for MockTicketLookup {
    fn fetch_title(&self, ticket_id: &str) -> Result<String, LookupError> {
        if !self.available {
            return Err(LookupError::Unavailable(ticket_id.to_string()));
        }
        if let Some(message) = &self.error {
            return Err(LookupError::Failed {
                ticket: ticket_id.to_string(),
                message: message.clone(),
            });
        }
        self.titles
            .get(ticket_id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(ticket_id.to_string()))
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
