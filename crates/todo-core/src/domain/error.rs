//! Domain Errors
//!
//! None of these reach the user: callers log them and fall back.

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Failures at the persistence and export boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The key-value store refused a read or write
    Storage(String),
    /// A snapshot could not be encoded or decoded
    Snapshot(String),
    /// The export document could not be produced
    Export(String),
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::Storage(msg) => write!(f, "Storage error: {}", msg),
            TodoError::Snapshot(msg) => write!(f, "Snapshot error: {}", msg),
            TodoError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for TodoError {}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(TodoError::Storage("quota".into()).to_string(), "Storage error: quota");
        assert_eq!(TodoError::Export("x".into()).to_string(), "Export error: x");
    }

    #[test]
    fn test_json_error_maps_to_snapshot() {
        let err: TodoError = serde_json::from_str::<Vec<u32>>("not json").unwrap_err().into();
        assert!(matches!(err, TodoError::Snapshot(_)));
    }
}
