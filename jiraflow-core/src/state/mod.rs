pub mod branch_picker;
pub mod input;
pub mod ticket_form;
pub mod type_selector;

pub use branch_picker::{BranchPicker, candidate_label};
pub use input::{ListSelection, TextInput};
pub use ticket_form::{FormField, LOOKUP_DEBOUNCE, TicketForm, TitleFetchStatus};
pub use type_selector::{BranchTypeItem, TypeSelector};

use crate::{
    branch::{GeneratorConfig, RefNameError, generate, validate_ref_name},
    config::keys::Command,
    error::FlowError,
    git::BranchCandidate,
};

/// Answers collected so far. Each field is written only by the screen that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardSelections {
    pub branch_type: String,
    pub base_branch: String,
    pub ticket_id: String,
    pub ticket_title: String,
    pub final_branch_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub branch_name: String,
    /// Inline validation error for the generated name
    pub error: Option<String>,
    /// Creation has been dispatched and not yet reported back
    pub creating: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created {
        branch: String,
        base: String,
    },
    Failed {
        branch: String,
        message: String,
        suggestions: Vec<String>,
        /// Process exit code for the failure kind
        exit_code: u8,
    },
}

impl Outcome {
    pub fn failed(branch: &str, error: &FlowError) -> Self {
        Self::Failed {
            branch: branch.to_string(),
            message: error.user_message(),
            suggestions: error.suggestions(),
            exit_code: error.exit_code(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Wizard screen, carrying the state of the component that owns it
#[derive(Debug, Clone)]
pub enum Mode {
    TypeSelection(TypeSelector),
    BranchSelection(BranchPicker),
    TicketInput(TicketForm),
    Confirmation(Confirmation),
    Complete(Outcome),
}

impl Mode {
    pub fn header(&self) -> &'static str {
        match self {
            Mode::TypeSelection(_) => "Step 1/4: Select Branch Type",
            Mode::BranchSelection(_) => "Step 2/4: Select Base Branch",
            Mode::TicketInput(_) => "Step 3/4: Enter Ticket Information",
            Mode::Confirmation(_) => "Step 4/4: Confirm Branch Creation",
            Mode::Complete(_) => "Complete!",
        }
    }

    /// Commands to show in the footer bar, in display order.
    pub fn footer_commands(&self) -> &'static [Command] {
        match self {
            Mode::TypeSelection(_) => &[Command::Confirm, Command::Quit],
            Mode::BranchSelection(picker) if picker.searching => &[
                Command::Confirm,
                Command::ExitSearch,
                Command::ClearSearch,
                Command::Quit,
            ],
            Mode::BranchSelection(_) => &[
                Command::Confirm,
                Command::StartSearch,
                Command::GoBack,
                Command::Quit,
            ],
            Mode::TicketInput(_) => &[
                Command::Confirm,
                Command::NextField,
                Command::PreviousField,
                Command::GoBack,
                Command::Quit,
            ],
            Mode::Confirmation(_) => &[Command::Confirm, Command::GoBack, Command::Quit],
            Mode::Complete(_) => &[Command::Quit],
        }
    }
}

/// Central application state. Components read from this, actions modify it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: Mode,
    pub selections: WizardSelections,
    pub branch_types: Vec<BranchTypeItem>,
    /// Local branches, fetched once per run
    pub branches: Vec<BranchCandidate>,
    pub loading_branches: bool,
    pub lookup_available: bool,
    pub generator: GeneratorConfig,
    pub error: Option<String>,
    active_list_page_rows: usize,
}

impl AppState {
    pub fn new(
        branch_types: Vec<BranchTypeItem>,
        generator: GeneratorConfig,
        lookup_available: bool,
    ) -> Self {
        Self {
            mode: Mode::TypeSelection(TypeSelector::new(branch_types.clone())),
            selections: WizardSelections::default(),
            branch_types,
            branches: Vec::new(),
            loading_branches: true,
            lookup_available,
            generator,
            error: None,
            active_list_page_rows: 10,
        }
    }

    pub fn set_active_list_page_rows(&mut self, rows: usize) {
        self.active_list_page_rows = rows.max(1);
    }

    pub fn active_list_page_rows(&self) -> usize {
        self.active_list_page_rows
    }

    pub fn active_list_mut(&mut self) -> Option<&mut ListSelection> {
        match &mut self.mode {
            Mode::TypeSelection(selector) => Some(&mut selector.list),
            Mode::BranchSelection(picker) => Some(&mut picker.list),
            _ => None,
        }
    }

    pub fn set_branches(&mut self, branches: Vec<BranchCandidate>) {
        self.loading_branches = false;
        self.branches = branches;
        if let Mode::BranchSelection(_) = self.mode {
            self.mode = Mode::BranchSelection(self.branch_picker());
        }
    }

    fn branch_picker(&self) -> BranchPicker {
        BranchPicker::with_highlighted(self.branches.clone(), &self.selections.base_branch)
    }

    fn ticket_form(&self) -> TicketForm {
        TicketForm::with_values(
            &self.selections.ticket_id,
            &self.selections.ticket_title,
            self.lookup_available,
        )
    }

    pub fn select_type(&mut self, key: String) {
        log::debug!("branch type selected: {key}");
        self.selections.branch_type = key;
        self.mode = Mode::BranchSelection(self.branch_picker());
    }

    pub fn select_base(&mut self, name: String) {
        log::debug!("base branch selected: {name}");
        self.selections.base_branch = name;
        self.mode = Mode::TicketInput(self.ticket_form());
    }

    /// Record the ticket answers and move to confirmation with the generated name.
    pub fn submit_ticket(&mut self, ticket_id: String, title: String) {
        let name = generate(
            &self.selections.branch_type,
            &ticket_id,
            &title,
            &self.generator,
        );
        log::debug!("ticket submitted: {ticket_id}, generated {name}");
        self.selections.ticket_id = ticket_id;
        self.selections.ticket_title = title;
        self.selections.final_branch_name.clone_from(&name);
        self.mode = Mode::Confirmation(Confirmation {
            branch_name: name,
            error: None,
            creating: false,
        });
    }

    /// Step back one screen. Returns `false` when backing out ends the wizard.
    pub fn go_back(&mut self) -> bool {
        let previous = match &self.mode {
            Mode::TypeSelection(_) | Mode::Complete(_) => return false,
            Mode::BranchSelection(_) => Mode::TypeSelection(TypeSelector::with_highlighted(
                self.branch_types.clone(),
                &self.selections.branch_type,
            )),
            Mode::TicketInput(form) => {
                self.selections.ticket_id.clone_from(&form.ticket.text);
                self.selections.ticket_title.clone_from(&form.title.text);
                Mode::BranchSelection(self.branch_picker())
            }
            Mode::Confirmation(confirmation) if confirmation.creating => return true,
            Mode::Confirmation(_) => Mode::TicketInput(self.ticket_form()),
        };
        self.mode = previous;
        true
    }

    /// Whether a branch is being created in the background right now
    pub fn is_creating(&self) -> bool {
        matches!(&self.mode, Mode::Confirmation(confirmation) if confirmation.creating)
    }

    /// Validate the generated name and mark creation as started.
    ///
    /// Returns `(name, base)` to hand to git, or `None` when there is nothing to do.
    pub fn begin_creation(&mut self) -> Option<Result<(String, String), RefNameError>> {
        let Mode::Confirmation(confirmation) = &mut self.mode else {
            return None;
        };
        if confirmation.creating {
            return None;
        }
        if let Err(e) = validate_ref_name(&confirmation.branch_name) {
            confirmation.error = Some(format!("Invalid branch name: {e}"));
            return Some(Err(e));
        }
        confirmation.error = None;
        confirmation.creating = true;
        Some(Ok((
            confirmation.branch_name.clone(),
            self.selections.base_branch.clone(),
        )))
    }

    pub fn finish(&mut self, outcome: Outcome) {
        log::info!("wizard finished: {outcome:?}");
        self.mode = Mode::Complete(outcome);
    }
}
