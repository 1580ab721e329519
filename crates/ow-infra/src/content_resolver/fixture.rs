//! Table-driven content resolver.
//!
//! Rows are keyed by the locator's canonical string form:
//!
//! ```json
//! {
//!   "content://media/1": { "type": "image/png", "path": "/cache/1.png" },
//!   "content://media/2": { "type": "video/mp4" }
//! }
//! ```
//!
//! Locators without a row go to the fallback resolver when one is set,
//! otherwise they resolve to nothing.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use ow_core::ports::ContentResolverPort;
use ow_core::{MimeType, RawLocator};

#[derive(Debug, Clone, Default, Deserialize)]
struct FixtureRow {
    #[serde(rename = "type", default)]
    mime_type: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

#[derive(Default)]
pub struct FixtureContentResolver {
    rows: HashMap<String, FixtureRow>,
    fallback: Option<Arc<dyn ContentResolverPort>>,
}

impl std::fmt::Debug for FixtureContentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureContentResolver")
            .field("rows", &self.rows)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl FixtureContentResolver {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let rows: HashMap<String, FixtureRow> =
            serde_json::from_str(raw).context("Failed to parse resolver fixtures as JSON")?;
        Ok(Self {
            rows,
            fallback: None,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resolver fixtures: {}", path.display()))?;
        Self::from_json_str(&content)
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn ContentResolverPort>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row(&self, locator: &RawLocator) -> Result<Option<&FixtureRow>> {
        Ok(self.rows.get(&locator.canonical()?))
    }
}

impl ContentResolverPort for FixtureContentResolver {
    fn type_of(&self, locator: &RawLocator) -> Result<Option<MimeType>> {
        match (self.row(locator)?, &self.fallback) {
            (Some(row), _) => Ok(row.mime_type.as_deref().map(MimeType::from)),
            (None, Some(fallback)) => fallback.type_of(locator),
            (None, None) => Ok(None),
        }
    }

    fn real_path_of(&self, locator: &RawLocator) -> Result<Option<String>> {
        match (self.row(locator)?, &self.fallback) {
            (Some(row), _) => Ok(row.path.clone()),
            (None, Some(fallback)) => fallback.real_path_of(locator),
            (None, None) => Ok(None),
        }
    }
}
