use super::input::ListSelection;

/// One configured branch type as offered on the first screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTypeItem {
    pub key: String,
    pub label: String,
    pub description: String,
    pub is_default: bool,
}

impl BranchTypeItem {
    pub fn new(key: &str, label: &str, is_default: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: describe_branch_type(key).to_string(),
            is_default,
        }
    }

    pub fn display_label(&self) -> String {
        if self.is_default {
            format!("{} (default)", self.label)
        } else {
            self.label.clone()
        }
    }
}

pub fn describe_branch_type(key: &str) -> &'static str {
    match key {
        "feature" => "New features and enhancements",
        "hotfix" => "Critical bug fixes for production",
        "refactor" => "Code improvements without changing functionality",
        "support" => "Supporting changes like documentation or tooling",
        _ => "Custom branch type",
    }
}

#[derive(Debug, Clone)]
pub struct TypeSelector {
    pub items: Vec<BranchTypeItem>,
    pub list: ListSelection,
}

impl TypeSelector {
    /// Highlights the default item.
    pub fn new(items: Vec<BranchTypeItem>) -> Self {
        let default_idx = items.iter().position(|item| item.is_default).unwrap_or(0);
        let mut list = ListSelection::new(items.len());
        list.select(default_idx);
        Self { items, list }
    }

    /// Re-enter the screen with `key` highlighted, e.g. after navigating back.
    pub fn with_highlighted(items: Vec<BranchTypeItem>, key: &str) -> Self {
        let mut selector = Self::new(items);
        if let Some(idx) = selector.items.iter().position(|item| item.key == key) {
            selector.list.select(idx);
        }
        selector
    }

    pub fn highlighted(&self) -> Option<&BranchTypeItem> {
        self.list.selected.and_then(|i| self.items.get(i))
    }

    /// The key to commit when the user confirms
    pub fn selection(&self) -> Option<String> {
        self.highlighted().map(|item| item.key.clone())
    }
}
