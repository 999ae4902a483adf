//! Export Document
//!
//! The downloadable JSON file: the full collection plus summary counts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{iso_millis, Todo, TodoError, TodoResult};
use crate::projection::Counts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub todos: Vec<Todo>,
    #[serde(with = "iso_millis")]
    pub export_date: DateTime<Utc>,
    pub total_count: usize,
    pub completed_count: usize,
    pub active_count: usize,
}

impl ExportDocument {
    pub fn new(todos: &[Todo], export_date: DateTime<Utc>) -> Self {
        let counts = Counts::of(todos);
        Self {
            todos: todos.to_vec(),
            export_date,
            total_count: counts.total,
            completed_count: counts.completed,
            active_count: counts.active,
        }
    }

    /// `{prefix}-YYYY-MM-DD.json`, dated by the export date
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}-{}.json", prefix, self.export_date.format("%Y-%m-%d"))
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> TodoResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TodoError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoId;
    use chrono::TimeZone;

    #[test]
    fn test_counts_and_file_name() {
        let created = Utc.timestamp_opt(1_714_555_800, 0).unwrap();
        let mut done = Todo::new(TodoId(2), "done", created);
        done.completed = true;
        let todos = vec![Todo::new(TodoId(1), "open", created), done];

        let doc = ExportDocument::new(&todos, Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap());
        assert_eq!(doc.total_count, 2);
        assert_eq!(doc.completed_count, 1);
        assert_eq!(doc.active_count, 1);
        assert_eq!(doc.file_name("todos"), "todos-2024-12-31.json");
    }

    #[test]
    fn test_json_shape() {
        let doc = ExportDocument::new(&[], Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        let json = doc.to_json().unwrap();
        assert!(json.contains("\n  \"exportDate\": \"2024-01-02T03:04:05.000Z\""));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["todos"], serde_json::json!([]));
        assert_eq!(value["totalCount"], 0);
        assert_eq!(value["activeCount"], 0);
        assert_eq!(value["completedCount"], 0);
    }
}
