use super::input::{ListSelection, TextInput};
use crate::{
    fuzzy::{SearchState, match_candidates},
    git::BranchCandidate,
};

/// Base-branch list with a browse mode and a fuzzy search mode.
#[derive(Debug, Clone)]
pub struct BranchPicker {
    pub candidates: Vec<BranchCandidate>,
    names: Vec<String>,
    pub query: TextInput,
    pub search: SearchState,
    pub searching: bool,
    pub list: ListSelection,
}

impl BranchPicker {
    /// Highlights the current branch when there is one.
    pub fn new(candidates: Vec<BranchCandidate>) -> Self {
        let names = candidates.iter().map(|c| c.name.clone()).collect();
        let mut picker = Self {
            search: SearchState::all(candidates.len()),
            list: ListSelection::new(candidates.len()),
            candidates,
            names,
            query: TextInput::default(),
            searching: false,
        };
        if let Some(idx) = picker.candidates.iter().position(|c| c.is_current) {
            picker.list.select(idx);
        }
        picker
    }

    /// Re-enter the screen with `name` highlighted, e.g. after navigating back.
    pub fn with_highlighted(candidates: Vec<BranchCandidate>, name: &str) -> Self {
        let mut picker = Self::new(candidates);
        if let Some(idx) = picker.candidates.iter().position(|c| c.name == name) {
            picker.list.select(idx);
        }
        picker
    }

    /// Candidates currently shown, in display order
    pub fn visible(&self) -> impl Iterator<Item = &BranchCandidate> {
        self.search
            .matches
            .iter()
            .filter_map(|&i| self.candidates.get(i))
    }

    pub fn visible_len(&self) -> usize {
        self.search.matches.len()
    }

    pub fn highlighted(&self) -> Option<&BranchCandidate> {
        let idx = *self.search.matches.get(self.list.selected?)?;
        self.candidates.get(idx)
    }

    /// Name to commit; `None` when nothing is listed.
    pub fn selection(&self) -> Option<String> {
        self.highlighted().map(|c| c.name.clone())
    }

    pub fn start_search(&mut self) {
        self.searching = true;
        self.query.cursor_end();
    }

    /// Leaves search mode; the query and the filtered list stay.
    pub fn exit_search(&mut self) {
        self.searching = false;
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.refresh();
    }

    /// Apply an edit to the query and re-run the matcher.
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut TextInput) -> bool) {
        if edit(&mut self.query) {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let search = match_candidates(&self.names, &self.query.text);
        let changed = search.matches != self.search.matches;
        self.search = search;
        if changed {
            self.list.reset(self.search.matches.len());
        }
    }

    pub fn summary(&self) -> String {
        self.search.summary()
    }

    pub fn empty_message(&self) -> String {
        self.search.empty_message()
    }
}

/// `* name (current)` for the checked-out branch, `  name` otherwise.
pub fn candidate_label(candidate: &BranchCandidate) -> String {
    if candidate.is_current {
        format!("* {} (current)", candidate.name)
    } else {
        format!("  {}", candidate.name)
    }
}
