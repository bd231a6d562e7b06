pub mod action;
pub mod branch;
pub mod config;
pub mod error;
pub mod event;
pub mod fuzzy;
pub mod git;
pub mod jira;
pub mod keyboard;
pub mod state;
pub mod ticket;

// Re-export commonly used types at crate root
pub use action::Action;
pub use config::Config;
pub use error::FlowError;
pub use event::AppEvent;
pub use git::{BranchCandidate, GitProvider};
pub use jira::TicketLookup;
pub use keyboard::KeyEvent;
pub use state::{AppState, Mode};
