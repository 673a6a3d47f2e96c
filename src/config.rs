use std::path::PathBuf;

/// Key of the single persistence slot.
pub const SLOT_KEY: &str = "todos";

/// Overrides the platform data directory on desktop builds.
pub const DATA_DIR_ENV: &str = "DX_TASK_LIST_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means "resolve the platform default at open time".
    pub data_dir: Option<PathBuf>,
    pub slot_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { data_dir: None, slot_key: SLOT_KEY.to_string() }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { data_dir, ..Self::default() }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// File name used by file-backed slots.
    pub fn slot_file_name(&self) -> String {
        format!("{}.json", self.slot_key)
    }
}
