use serde::{Deserialize, Serialize};

/// One launchable entry: a display name, a raw (unexpanded) directory token,
/// and the shell command to run inside the resolved directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    pub name: String,
    pub directory: String,
    pub command: String,
}

impl AppRecord {
    /// All three fields present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.directory.is_empty() && !self.command.is_empty()
    }
}
