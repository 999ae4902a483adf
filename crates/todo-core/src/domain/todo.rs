//! Todo Entity
//!
//! A single list entry. Field names on the wire match the snapshots the
//! widget has always written: `{id, text, completed, createdAt}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso_millis;

/// Largest id that survives a round trip through a JS number
/// (`Number.MAX_SAFE_INTEGER`)
pub const MAX_TODO_ID: u64 = (1 << 53) - 1;

/// Unique todo identifier, a millisecond timestamp on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, never reused
    pub id: TodoId,
    /// Display text, never empty after trimming
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Set once at creation
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: TodoId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Whether the stored text satisfies the non-empty invariant
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(TodoId(1), "Buy milk", at(0));
        assert_eq!(todo.id, TodoId(1));
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_wire_format() {
        let todo = Todo::new(TodoId(1714555800000), "Walk", at(1_714_555_800));
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1714555800000u64);
        assert_eq!(json["text"], "Walk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2024-05-01T09:30:00.000Z");
    }

    #[test]
    fn test_parses_browser_timestamps() {
        let raw = r#"{"id":5,"text":"t","completed":true,"createdAt":"2024-05-01T09:30:00.250Z"}"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert!(todo.completed);
        assert_eq!(todo.created_at.timestamp_millis(), 1_714_555_800_250);
    }

    #[test]
    fn test_has_text() {
        assert!(!Todo::new(TodoId(1), "   ", at(0)).has_text());
        assert!(Todo::new(TodoId(1), " a ", at(0)).has_text());
    }
}
