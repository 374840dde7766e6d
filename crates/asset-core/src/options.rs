//! Import session options.

use asset_ingest::ADVISORY_MAX_FILE_BYTES;

/// Options for an [`ImportSession`](crate::ImportSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Run the heuristic mapper as soon as a file is loaded.
    pub auto_map: bool,
    /// Size above which a loaded file is logged as oversized. Advisory
    /// only; larger files are still parsed.
    pub max_file_bytes: Option<u64>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            auto_map: true,
            max_file_bytes: Some(ADVISORY_MAX_FILE_BYTES),
        }
    }
}

impl ImportOptions {
    /// Leaves every column unmapped after loading.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            auto_map: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_auto_map(mut self, enable: bool) -> Self {
        self.auto_map = enable;
        self
    }

    #[must_use]
    pub fn with_max_file_bytes(mut self, limit: Option<u64>) -> Self {
        self.max_file_bytes = limit;
        self
    }
}
