//! Content resolver for locators that point straight at the local file system.
//!
//! Only [`RawLocator::File`] and `file://` URIs are understood. Opaque
//! locators (`content://...`) resolve to an unknown type and no path, which
//! the item resolver turns into an empty-path item.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use super::mime_for_extension;
use ow_core::ports::ContentResolverPort;
use ow_core::{MimeType, RawLocator};

#[derive(Debug, Clone, Default)]
pub struct FsContentResolver;

impl FsContentResolver {
    pub fn new() -> Self {
        Self
    }

    fn local_path(locator: &RawLocator) -> Option<PathBuf> {
        match locator {
            RawLocator::File(path) => Some(path.clone()),
            RawLocator::Uri(uri) if locator.scheme() == Some("file") => url::Url::parse(uri)
                .ok()
                .and_then(|url| url.to_file_path().ok()),
            RawLocator::Uri(_) => None,
        }
    }
}

impl ContentResolverPort for FsContentResolver {
    fn type_of(&self, locator: &RawLocator) -> Result<Option<MimeType>> {
        let Some(path) = Self::local_path(locator) else {
            return Ok(None);
        };

        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime_for_extension)
            .unwrap_or_else(MimeType::octet_stream);
        Ok(Some(mime))
    }

    fn real_path_of(&self, locator: &RawLocator) -> Result<Option<String>> {
        let Some(path) = Self::local_path(locator) else {
            debug!(locator = %locator, "Locator is not a local file");
            return Ok(None);
        };

        match std::fs::canonicalize(&path) {
            Ok(real) => Ok(Some(real.to_string_lossy().into_owned())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Shared file does not exist");
                Ok(None)
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to canonicalize {}", path.display())),
        }
    }
}
