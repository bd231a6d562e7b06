use super::sanitizer::{SanitizationOptions, sanitize};
use thiserror::Error;

/// Title budget used when the type/ticket prefix alone exhausts `max_branch_length`.
/// The resulting name may then exceed the configured maximum.
pub const MIN_TITLE_BUDGET: usize = 10;

const RESERVED_REF_CHARS: &[char] = &['~', '^', ':', '?', '*', '['];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_branch_length: usize,
    pub separator: String,
    pub lowercase: bool,
    pub fold_diacritics: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_branch_length: 60,
            separator: "-".to_string(),
            lowercase: true,
            fold_diacritics: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefNameError {
    #[error("branch name is empty")]
    Empty,
    #[error("branch name cannot start or end with '.'")]
    DotAtEdge,
    #[error("branch name cannot contain '..'")]
    DoubleDot,
    #[error("branch name cannot start or end with '/'")]
    SlashAtEdge,
    #[error("branch name cannot contain '//'")]
    DoubleSlash,
    #[error("branch name cannot contain whitespace or control characters")]
    WhitespaceOrControl,
    #[error("branch name cannot contain '{0}'")]
    ReservedChar(char),
}

/// Check a candidate branch name against git's ref-name restrictions.
pub fn validate_ref_name(name: &str) -> Result<(), RefNameError> {
    if name.is_empty() {
        return Err(RefNameError::Empty);
    }
    if name.starts_with('.') || name.ends_with('.') {
        return Err(RefNameError::DotAtEdge);
    }
    if name.contains("..") {
        return Err(RefNameError::DoubleDot);
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Err(RefNameError::SlashAtEdge);
    }
    if name.contains("//") {
        return Err(RefNameError::DoubleSlash);
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(RefNameError::WhitespaceOrControl);
    }
    if let Some(c) = name.chars().find(|c| RESERVED_REF_CHARS.contains(c)) {
        return Err(RefNameError::ReservedChar(c));
    }
    Ok(())
}

/// Clean up a sanitized title so that appending it can never create an invalid ref.
fn ref_safe_suffix(title: &str, separator: &str) -> String {
    let mut out = title.to_string();
    while out.contains("..") {
        out = out.replace("..", ".");
    }
    loop {
        let before = out.len();
        out = out.trim_end_matches('.').to_string();
        if !separator.is_empty() {
            while let Some(rest) = out.strip_suffix(separator) {
                out = rest.to_string();
            }
        }
        if out.len() == before {
            return out;
        }
    }
}

/// Compose `type/TICKET<sep>title-slug`.
///
/// Returns an empty string when either `branch_type` or `ticket_id` is empty. An empty
/// title (or one that sanitizes to nothing) falls back to the ticket id as the slug source.
pub fn generate(
    branch_type: &str,
    ticket_id: &str,
    title: &str,
    config: &GeneratorConfig,
) -> String {
    if branch_type.is_empty() || ticket_id.is_empty() {
        return String::new();
    }
    let separator = config.separator.as_str();

    let prefix = format!("{branch_type}/{ticket_id}{separator}");
    let prefix_len = prefix.chars().count();
    let (budget, clamped) = match config.max_branch_length.checked_sub(prefix_len) {
        Some(budget) if budget >= 1 => (budget, false),
        _ => (MIN_TITLE_BUDGET, true),
    };

    let options = SanitizationOptions {
        separator: config.separator.clone(),
        lowercase: config.lowercase,
        fold_diacritics: config.fold_diacritics,
        max_length: budget,
    };

    let source = if title.trim().is_empty() { ticket_id } else { title };
    let mut slug = ref_safe_suffix(&sanitize(source, &options), separator);
    if slug.is_empty() {
        slug = ref_safe_suffix(&sanitize(ticket_id, &options), separator);
    }
    if slug.is_empty() {
        // Nothing descriptive survives; the bare ticket prefix is still a valid ref
        return format!("{branch_type}/{ticket_id}");
    }

    let mut name = format!("{prefix}{slug}");
    if !clamped && name.chars().count() > config.max_branch_length {
        let room = config.max_branch_length.saturating_sub(prefix_len);
        let cut: String = slug.chars().take(room).collect();
        let cut = ref_safe_suffix(&cut, separator);
        name = if cut.is_empty() {
            format!("{branch_type}/{ticket_id}")
        } else {
            format!("{prefix}{cut}")
        };
    }
    log::debug!("generated branch name {name:?} (title budget {budget}, clamped {clamped})");
    name
}
