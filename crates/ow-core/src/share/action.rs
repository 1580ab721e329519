use std::collections::BTreeMap;

pub const ACTION_SEND: &str = "android.intent.action.SEND";
pub const ACTION_SEND_MULTIPLE: &str = "android.intent.action.SEND_MULTIPLE";
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Normalized action tag of a share event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShareAction {
    Send,
    View,
    /// Unrecognized action, passed through verbatim.
    Other(String),
}

impl ShareAction {
    /// Apply the built-in translation rows.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            ACTION_SEND | ACTION_SEND_MULTIPLE => ShareAction::Send,
            ACTION_VIEW => ShareAction::View,
            other => ShareAction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ShareAction::Send => "SEND",
            ShareAction::View => "VIEW",
            ShareAction::Other(raw) => raw,
        }
    }
}

/// Action translation table.
///
/// Built-in rows always win; `extra` rows only apply to actions the built-in
/// rows do not recognize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTable {
    extra: BTreeMap<String, String>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra(extra: BTreeMap<String, String>) -> Self {
        Self { extra }
    }

    /// Translate a raw action into its normalized tag. An absent action
    /// becomes the empty string.
    pub fn translate(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        match ShareAction::from_raw(raw) {
            ShareAction::Other(other) => self.extra.get(&other).cloned().unwrap_or(other),
            known => known.as_str().to_string(),
        }
    }
}
