//! Controller configuration.

/// localStorage key holding the snapshot
pub const DEFAULT_STORAGE_KEY: &str = "todos";
/// Delay between a delete click and the item leaving the list
pub const DEFAULT_REMOVAL_DELAY_MS: u32 = 200;
/// Export files are named `{prefix}-YYYY-MM-DD.json`
pub const DEFAULT_EXPORT_PREFIX: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    pub storage_key: String,
    pub removal_delay_ms: u32,
    pub export_file_prefix: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            removal_delay_ms: DEFAULT_REMOVAL_DELAY_MS,
            export_file_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
        }
    }
}

impl TodoConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
