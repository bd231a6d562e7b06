/// Every user interaction produces an Action. UI never directly calls git or jira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Wizard flow
    Confirm,
    GoBack,
    Quit,

    // Movement
    MoveSelection(i32),
    PageUp,
    PageDown,
    MoveTop,
    MoveBottom,

    // Branch search
    StartSearch,
    ExitSearch,
    ClearSearch,

    // Ticket form
    NextField,
    PreviousField,

    // Text input
    InsertChar(char),
    DeleteBackwardChar,
    DeleteBackwardWord,
    DeleteForwardChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
}
