use jiraflow_core::{
    Config,
    branch::{generate, validate_ref_name},
    error::{FlowError, ValidationError},
    git::{GitError, GitProvider},
    jira::TicketLookup,
    ticket::{TicketError, validate_ticket_id},
};
use std::fmt::Write as _;

pub type FlowResult<T> = Result<T, FlowError>;

/// Flags for creating a branch without the wizard
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub branch_type: Option<String>,
    pub base: Option<String>,
    pub ticket: Option<String>,
    pub title: Option<String>,
    pub dry_run: bool,
}

/// Everything resolved before touching the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPlan {
    pub branch_type: String,
    pub base: String,
    pub ticket_id: String,
    pub title: String,
    pub branch_name: String,
    /// Non-fatal problems met while resolving, e.g. a failed title lookup
    pub warnings: Vec<String>,
}

impl BranchPlan {
    pub fn preview(&self) -> String {
        let title = if self.title.is_empty() {
            "(none)"
        } else {
            self.title.as_str()
        };
        let mut out = String::from("Branch preview (dry run)\n");
        let _ = writeln!(out, "  type:   {}", self.branch_type);
        let _ = writeln!(out, "  base:   {}", self.base);
        let _ = writeln!(out, "  ticket: {}", self.ticket_id);
        let _ = writeln!(out, "  title:  {title}");
        let _ = write!(out, "  branch: {}", self.branch_name);
        out
    }
}

fn resolve_branch_type(config: &Config, requested: Option<&str>) -> FlowResult<String> {
    let branch_type = requested.unwrap_or(&config.default_branch_type);
    if config.branch_types.contains_key(branch_type) {
        Ok(branch_type.to_string())
    } else {
        Err(ValidationError::UnknownBranchType {
            given: branch_type.to_string(),
            valid: config
                .branch_type_keys()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
        .into())
    }
}

fn resolve_title(
    lookup: &dyn TicketLookup,
    ticket_id: &str,
    requested: Option<&str>,
    warnings: &mut Vec<String>,
) -> String {
    if let Some(title) = requested {
        return title.trim().to_string();
    }
    if !lookup.is_available() {
        log::info!("jira CLI not available, using ticket id in place of a title");
        return String::new();
    }
    match lookup.fetch_title(ticket_id) {
        Ok(title) => title,
        Err(e) => {
            log::warn!("title lookup failed: {e}");
            warnings.push(format!("{}; using the ticket id instead", FlowError::from(e).user_message()));
            String::new()
        }
    }
}

/// Validate the flags, check the repository, and generate the branch name.
pub fn plan_branch(
    config: &Config,
    git: &dyn GitProvider,
    lookup: &dyn TicketLookup,
    args: &CreateArgs,
) -> FlowResult<BranchPlan> {
    let branch_type = resolve_branch_type(config, args.branch_type.as_deref())?;
    let ticket_id = args.ticket.clone().ok_or(TicketError::Missing)?;
    validate_ticket_id(&ticket_id)?;

    if !git.is_repository() {
        return Err(GitError::NotARepository.into());
    }
    let base = match &args.base {
        Some(base) => base.clone(),
        None => git.current_branch()?,
    };
    if !git.branch_exists(&base) {
        return Err(GitError::BaseMissing(base).into());
    }

    let mut warnings = Vec::new();
    let title = resolve_title(lookup, &ticket_id, args.title.as_deref(), &mut warnings);

    let branch_name = generate(&branch_type, &ticket_id, &title, &config.generator_config());
    validate_ref_name(&branch_name).map_err(|source| ValidationError::RefName {
        name: branch_name.clone(),
        source,
    })?;

    Ok(BranchPlan {
        branch_type,
        base,
        ticket_id,
        title,
        branch_name,
        warnings,
    })
}

pub fn cmd_create(
    config: &Config,
    git: &dyn GitProvider,
    lookup: &dyn TicketLookup,
    args: &CreateArgs,
) -> FlowResult<()> {
    let plan = plan_branch(config, git, lookup, args)?;
    for warning in &plan.warnings {
        eprintln!("Warning: {warning}");
    }

    if args.dry_run {
        println!("{}", plan.preview());
        return Ok(());
    }

    if git.branch_exists(&plan.branch_name) {
        return Err(GitError::BranchExists(plan.branch_name).into());
    }
    git.create_and_switch_branch(&plan.branch_name, &plan.base)?;
    log::info!("created branch {} from {}", plan.branch_name, plan.base);
    println!(
        "✓ Created and switched to branch '{}' from '{}'",
        plan.branch_name, plan.base
    );
    Ok(())
}

/// Message and suggestions for a failed run, ready for stderr
pub fn render_error(error: &FlowError) -> String {
    let mut out = format!("Error: {}", error.user_message());
    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        out.push_str("\n\nSuggestions:");
        for suggestion in suggestions {
            let _ = write!(out, "\n  • {suggestion}");
        }
    }
    out
}
