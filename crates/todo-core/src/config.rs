//! Persistence Configuration

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistConfig {
    /// Key of the storage slot holding the JSON snapshot
    pub storage_key: String,
}

impl PersistConfig {
    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }
}
