//! View Projection
//!
//! Everything the view shows, recomputed from controller state after each
//! mutation. Rendering a projection never feeds back into the controller.

use crate::domain::{Filter, Todo, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total: todos.len(),
            active: todos.len() - completed,
            completed,
        }
    }

    /// Count shown next to a filter control
    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }
}

/// One displayed todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub todo: Todo,
    /// Render as an edit field instead of a static row
    pub editing: bool,
}

/// Either the list of rows or the empty-state message, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Rows(Vec<Row>),
    Empty(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub counts: Counts,
    pub active_filter: Filter,
    pub show_clear_completed: bool,
    pub show_export: bool,
    pub show_footer: bool,
    pub body: ListBody,
}

impl Projection {
    pub fn build(todos: &[Todo], filter: Filter, editing: Option<TodoId>) -> Self {
        let counts = Counts::of(todos);
        let rows: Vec<Row> = todos
            .iter()
            .filter(|t| filter.matches(t))
            .map(|t| Row {
                todo: t.clone(),
                editing: editing == Some(t.id),
            })
            .collect();

        let body = if rows.is_empty() {
            ListBody::Empty(empty_message(filter))
        } else {
            ListBody::Rows(rows)
        };

        Self {
            counts,
            active_filter: filter,
            show_clear_completed: counts.completed > 0,
            show_export: counts.total > 0,
            show_footer: counts.total > 0,
            body,
        }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            ListBody::Empty(_) => &[],
        }
    }

    pub fn empty_message(&self) -> Option<&str> {
        match &self.body {
            ListBody::Rows(_) => None,
            ListBody::Empty(msg) => Some(msg),
        }
    }

    pub fn list_visible(&self) -> bool {
        matches!(self.body, ListBody::Rows(_))
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::build(&[], Filter::All, None)
    }
}

/// Empty-state text for a filter
pub fn empty_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No todos yet. Add one above!".to_string(),
        other => format!("No {} todos", other),
    }
}
