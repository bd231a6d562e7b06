use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static TICKET_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]*-[0-9]+$").expect("ticket pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Ticket number is required")]
    Missing,
    #[error("Invalid format. Use PROJECT-123 format (e.g., JIRA-123)")]
    InvalidFormat,
}

/// `PROJECT-123`: an uppercase letter, uppercase letters or digits, a hyphen, digits.
/// Only ASCII letters and digits count.
pub fn validate_ticket_id(ticket_id: &str) -> Result<(), TicketError> {
    if ticket_id.trim().is_empty() {
        return Err(TicketError::Missing);
    }
    if TICKET_ID.is_match(ticket_id) {
        Ok(())
    } else {
        Err(TicketError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ticket_ids() {
        for id in [
            "PROJ-123",
            "A-1",
            "AB12-345",
            "ABC123DEF-999",
            "PROJECT-0",
            "X-1234567890",
            "ABC123-789",
        ] {
            assert_eq!(validate_ticket_id(id), Ok(()), "{id}");
        }
    }

    #[test]
    fn test_invalid_ticket_ids() {
        for id in [
            "proj-123", "a-123", "PROJECT-", "PROJECT", "-123", "PROJECT-ABC", "JIRA123",
            "123-JIRA", "PRO JECT-1", " PROJ-1", "PROJ-١٢٣", "PROJ-１２３", "ＡB-1",
        ] {
            assert_eq!(validate_ticket_id(id), Err(TicketError::InvalidFormat), "{id}");
        }
    }

    #[test]
    fn test_empty_ticket_is_missing() {
        assert_eq!(validate_ticket_id(""), Err(TicketError::Missing));
        assert_eq!(validate_ticket_id("   "), Err(TicketError::Missing));
    }

    #[test]
    fn test_error_message_suggests_format() {
        assert_eq!(
            TicketError::InvalidFormat.to_string(),
            "Invalid format. Use PROJECT-123 format (e.g., JIRA-123)"
        );
    }
}
