use super::{LookupError, TicketLookup, parse_ticket_title};
use std::{io, process::Command};

/// Uses the `jira` command-line client (jira-cli), which handles auth itself.
pub struct CliTicketLookup {
    program: String,
}

impl Default for CliTicketLookup {
    fn default() -> Self {
        Self::new("jira")
    }
}

impl CliTicketLookup {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl TicketLookup for CliTicketLookup {
    fn fetch_title(&self, ticket_id: &str) -> Result<String, LookupError> {
        log::debug!("fetching title for {ticket_id}");
        let output = Command::new(&self.program)
            .args(["issue", "view", ticket_id, "--plain"])
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => LookupError::Unavailable(ticket_id.to_string()),
                _ => LookupError::Failed {
                    ticket: ticket_id.to_string(),
                    message: e.to_string(),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let lower = stderr.to_lowercase();
            if lower.contains("not found") || lower.contains("404") {
                return Err(LookupError::NotFound(ticket_id.to_string()));
            }
            return Err(LookupError::Failed {
                ticket: ticket_id.to_string(),
                message: stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_ticket_title(&stdout).ok_or_else(|| LookupError::Unparseable(ticket_id.to_string()))
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("version")
            .output()
            .is_ok_and(|output| output.status.success())
    }
}
