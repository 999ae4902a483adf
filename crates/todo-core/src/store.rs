//! Persistence Store
//!
//! The controller only needs `get`/`set` of a string blob under one key.
//! The browser supplies `localStorage`; `MemoryStore` serves tests and
//! native callers.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::domain::{Todo, TodoError, TodoResult, MAX_TODO_ID};

/// String key-value store contract
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> TodoResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Snapshot Codec
// ========================

/// Serialize the collection as a JSON array of todo records
pub fn encode_snapshot(todos: &[Todo]) -> TodoResult<String> {
    Ok(serde_json::to_string(todos)?)
}

/// Parse a JSON array of todo records
pub fn decode_snapshot(raw: &str) -> TodoResult<Vec<Todo>> {
    Ok(serde_json::from_str(raw)?)
}

/// Load the collection stored under `key`.
///
/// Never fails: a missing key, a store error or a snapshot that is not a
/// JSON array all yield an empty collection. Individual records that do
/// not parse, have blank text, carry an id above `MAX_TODO_ID` or repeat
/// an earlier id are dropped; the rest are kept.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<Todo> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("no snapshot under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            log::warn!("failed to read snapshot '{}': {}", key, e);
            return Vec::new();
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("discarding malformed snapshot '{}': {}", key, e);
            return Vec::new();
        }
    };

    let total = records.len();
    let mut seen = HashSet::new();
    let todos: Vec<Todo> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Todo>(record) {
            Ok(todo) => Some(todo),
            Err(e) => {
                log::debug!("skipping unreadable record in '{}': {}", key, e);
                None
            }
        })
        .filter(|todo| todo.has_text() && todo.id.0 <= MAX_TODO_ID && seen.insert(todo.id))
        .collect();
    if todos.len() != total {
        log::warn!("dropped {} invalid records from snapshot '{}'", total - todos.len(), key);
    }
    log::debug!("loaded {} todos from '{}'", todos.len(), key);
    todos
}

/// Write the whole collection under `key`
pub fn save_snapshot<S: KeyValueStore + ?Sized>(store: &S, key: &str, todos: &[Todo]) -> TodoResult<()> {
    let raw = encode_snapshot(todos)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoId;
    use chrono::{TimeZone, Utc};

    fn todo(id: u64, text: &str, completed: bool) -> Todo {
        let mut t = Todo::new(TodoId(id), text, Utc.timestamp_opt(1_700_000_000 + id as i64, 0).unwrap());
        t.completed = completed;
        t
    }

    #[test]
    fn test_missing_key_is_empty() {
        assert!(load_snapshot(&MemoryStore::new(), "todos").is_empty());
    }

    #[test]
    fn test_malformed_snapshot_is_empty() {
        for raw in ["{not json", "{\"id\":1}", "[{\"id\":1,\"text\":\"a\"}]", "null"] {
            let store = MemoryStore::with_entry("todos", raw);
            assert!(load_snapshot(&store, "todos").is_empty(), "input: {}", raw);
        }
    }

    #[test]
    fn test_round_trip() {
        let todos = vec![todo(1, "a", false), todo(2, "b", true)];
        let store = MemoryStore::new();
        save_snapshot(&store, "todos", &todos).unwrap();
        assert_eq!(load_snapshot(&store, "todos"), todos);
    }

    #[test]
    fn test_load_drops_blank_and_duplicate_records() {
        let raw = encode_snapshot(&[todo(1, "a", false), todo(2, "  ", false), todo(1, "dup", true)]).unwrap();
        let store = MemoryStore::with_entry("todos", &raw);
        let loaded = load_snapshot(&store, "todos");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "a");
    }

    #[test]
    fn test_unreadable_record_keeps_the_rest() {
        let raw = r#"[
            {"id":1,"text":"keep","completed":false,"createdAt":"2024-05-01T09:30:00.000Z"},
            {"id":2,"text":"bad date","completed":false,"createdAt":null},
            {"id":3,"text":"also kept","completed":true,"createdAt":"2024-05-01T09:31:00.000Z"}
        ]"#;
        let store = MemoryStore::with_entry("todos", raw);
        let loaded: Vec<String> = load_snapshot(&store, "todos").into_iter().map(|t| t.text).collect();
        assert_eq!(loaded, vec!["keep", "also kept"]);
    }

    #[test]
    fn test_load_drops_ids_beyond_js_safe_range() {
        let raw = format!(
            r#"[{{"id":{},"text":"huge","completed":false,"createdAt":"2024-05-01T09:30:00.000Z"}},
               {{"id":{},"text":"edge","completed":false,"createdAt":"2024-05-01T09:30:00.000Z"}}]"#,
            u64::MAX,
            MAX_TODO_ID
        );
        let store = MemoryStore::with_entry("todos", &raw);
        let loaded = load_snapshot(&store, "todos");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, TodoId(MAX_TODO_ID));
    }

    #[test]
    fn test_reads_original_widget_snapshot() {
        let raw = r#"[{"id":1714555800000,"text":"Buy milk","completed":false,"createdAt":"2024-05-01T09:30:00.000Z"}]"#;
        let store = MemoryStore::with_entry("todos", raw);
        let loaded = load_snapshot(&store, "todos");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, TodoId(1714555800000));
        assert_eq!(loaded[0].created_at, Utc.timestamp_opt(1_714_555_800, 0).unwrap());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.raw("k").as_deref(), Some("v"));
    }
}
