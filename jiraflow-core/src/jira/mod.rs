//! Ticket title lookup through the issue tracker.

pub mod cli;
pub mod mock;

pub use cli::CliTicketLookup;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("jira error for ticket {0}: jira CLI is not available")]
    Unavailable(String),
    #[error("jira error for ticket {0}: ticket not found")]
    NotFound(String),
    #[error("jira error for ticket {ticket}: {message}")]
    Failed { ticket: String, message: String },
    #[error("jira error for ticket {0}: no summary in jira output")]
    Unparseable(String),
}

impl LookupError {
    pub fn ticket(&self) -> &str {
        match self {
            Self::Unavailable(ticket) | Self::NotFound(ticket) | Self::Unparseable(ticket) => {
                ticket
            }
            Self::Failed { ticket, .. } => ticket,
        }
    }
}

/// Fetches a ticket's title. Called from worker threads.
pub trait TicketLookup: Send + Sync {
    fn fetch_title(&self, ticket_id: &str) -> Result<String, LookupError>;
    fn is_available(&self) -> bool;
}

/// Pull the summary out of tracker CLI output: raw JSON (`fields.summary`), a
/// `Summary:` line, or a leading `# Title` heading.
pub fn parse_ticket_title(output: &str) -> Option<String> {
    let trimmed = output.trim();
    if trimmed.starts_with('{')
        && let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed)
    {
        return value
            .pointer("/fields/summary")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);
    }

    let lines = || trimmed.lines().map(str::trim);
    lines()
        .find_map(|line| line.strip_prefix("Summary:"))
        .or_else(|| lines().find_map(|line| line.strip_prefix("# ")))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_line() {
        let output = "Key: PROJ-1\nSummary: Add user authentication\nStatus: To Do\n";
        assert_eq!(
            parse_ticket_title(output).as_deref(),
            Some("Add user authentication")
        );
    }

    #[test]
    fn test_parse_heading() {
        let output = "🐞 Bug  ⌛ To Do\n\n# Login fails on Safari\n\nSome description";
        assert_eq!(
            parse_ticket_title(output).as_deref(),
            Some("Login fails on Safari")
        );
    }

    #[test]
    fn test_parse_json() {
        let output = r#"{"key":"PROJ-1","fields":{"summary":"  Fix crash  "}}"#;
        assert_eq!(parse_ticket_title(output).as_deref(), Some("Fix crash"));
    }

    #[test]
    fn test_parse_without_summary() {
        assert_eq!(parse_ticket_title(""), None);
        assert_eq!(parse_ticket_title("Summary:   "), None);
        assert_eq!(parse_ticket_title(r#"{"fields":{}}"#), None);
    }

    #[test]
    fn test_error_display_names_ticket() {
        let err = LookupError::Failed {
            ticket: "PROJ-9".to_string(),
            message: "authentication failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "jira error for ticket PROJ-9: authentication failed"
        );
        assert_eq!(err.ticket(), "PROJ-9");
        assert!(
            LookupError::NotFound("A-1".to_string())
                .to_string()
                .contains("not found")
        );
    }
}
