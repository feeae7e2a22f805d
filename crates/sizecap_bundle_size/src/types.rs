use sizecap_core::human_bytes;

/// One file found over the configured threshold during an audit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub file_name: String,
    pub size: u64,
    pub max_size: u64,
}

impl Violation {
    /// Rendered message, used both for immediate warnings and for the
    /// combined failure in throw mode.
    pub fn message(&self) -> String {
        format!(
            "Bundle size exceeded: {} is {} (max: {})",
            self.file_name,
            human_bytes(self.size),
            human_bytes(self.max_size)
        )
    }
}

/// Summary of one completed audit pass. In throw mode a pass with any
/// violation fails instead of returning a result, so `violations` is only
/// ever populated in warn mode.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub violations: Vec<Violation>,
    pub files_checked: usize,
}
