//! Intents and Effects
//!
//! The view emits `Intent`s; the controller answers with at most one
//! `Effect` the view must carry out after rendering.

use crate::domain::TodoId;

/// A user-originated request to run one controller operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Text from the new-todo input
    Add(String),
    Delete(TodoId),
    Toggle(TodoId),
    StartEdit(TodoId),
    /// Pending text from the edit field
    SaveEdit(String),
    CancelEdit,
    /// `data-filter` token of the clicked control
    SetFilter(String),
    ClearCompleted,
    Export,
}

/// Post-render side effect requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Empty the new-todo input
    ClearInput,
    /// Focus and select the edit field of this todo
    FocusEditor(TodoId),
    /// Offer `contents` as a file download
    Download { file_name: String, contents: String },
}
