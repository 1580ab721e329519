//! Opaque resource locators carried by share events.
//!
//! The core never interprets a locator beyond rendering it to its canonical
//! string form. Interpretation (MIME lookup, path resolution) belongs to the
//! [`ContentResolverPort`](crate::ports::ContentResolverPort).

use crate::ShareError;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// A resource identifier attached to a share event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawLocator {
    /// Any `scheme:rest` identifier (`content://...`, `file://...`, `https://...`).
    Uri(String),
    /// An absolute file-system path handed over directly.
    File(PathBuf),
}

impl RawLocator {
    /// Parse a locator from its wire form.
    ///
    /// Absolute paths become [`RawLocator::File`], everything else must carry
    /// a valid URI scheme.
    pub fn parse(raw: &str) -> Result<Self, ShareError> {
        if raw.is_empty() {
            return Err(ShareError::MalformedLocator("empty locator".to_string()));
        }

        if raw.starts_with('/') {
            return Ok(RawLocator::File(PathBuf::from(raw)));
        }

        Url::parse(raw)
            .map(|_| RawLocator::Uri(raw.to_string()))
            .map_err(|err| ShareError::MalformedLocator(format!("{raw}: {err}")))
    }

    pub fn uri(raw: impl Into<String>) -> Self {
        RawLocator::Uri(raw.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        RawLocator::File(path.into())
    }

    /// Render the locator to the canonical string form handed downstream.
    ///
    /// URIs are kept verbatim. Paths become percent-encoded `file://` URLs.
    pub fn canonical(&self) -> Result<String, ShareError> {
        match self {
            RawLocator::Uri(uri) => Ok(uri.clone()),
            RawLocator::File(path) => Url::from_file_path(path)
                .map(String::from)
                .map_err(|()| {
                    ShareError::MalformedLocator(format!("relative path: {}", path.display()))
                }),
        }
    }

    /// Scheme of the locator, `file` for direct paths.
    pub fn scheme(&self) -> Option<&str> {
        match self {
            RawLocator::Uri(uri) => uri.split_once(':').map(|(scheme, _)| scheme),
            RawLocator::File(_) => Some("file"),
        }
    }
}

impl fmt::Display for RawLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawLocator::Uri(uri) => f.write_str(uri),
            RawLocator::File(path) => write!(f, "{}", path.display()),
        }
    }
}
