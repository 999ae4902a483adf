//! Filter
//!
//! Named predicates selecting which todos are displayed.

use super::todo::Todo;

/// Display filter, `all` by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in control order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Token used in `data-filter` attributes and empty-state messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Parse a `data-filter` token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
