use crate::MimeType;
use serde::{Deserialize, Serialize};

/// One shared file descriptor, in the shape the downstream consumer reads.
///
/// `path` is the empty string when no direct path could be determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    #[serde(rename = "type")]
    pub mime_type: Option<MimeType>,

    /// Canonical string form of the locator.
    pub uri: String,

    pub path: String,
}

impl ResolvedItem {
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Canonical result of normalizing one share event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedShare {
    pub action: String,

    #[serde(rename = "exit")]
    pub exit_after_handling: bool,

    pub items: Vec<ResolvedItem>,
}

impl NormalizedShare {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
