use std::sync::Arc;
use tracing::{debug, warn};

use ow_core::ports::ContentResolverPort;
use ow_core::{RawLocator, ResolvedItem, ShareError};

/// Resolve one share locator into a file descriptor.
///
/// # Behavior
/// 1. An absent locator produces no item
/// 2. MIME type and direct path are looked up through the content resolver
/// 3. Lookup failures degrade to an unknown type / empty path, never an error
///
/// Only a locator that cannot be rendered to its canonical form is reported.
pub struct ResolveShareItemUseCase {
    resolver: Arc<dyn ContentResolverPort>,
}

impl ResolveShareItemUseCase {
    pub fn new(resolver: Arc<dyn ContentResolverPort>) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, locator: Option<&RawLocator>) -> Result<Option<ResolvedItem>, ShareError> {
        let Some(locator) = locator else {
            debug!("Skipping absent locator");
            return Ok(None);
        };

        let uri = locator.canonical()?;

        let mime_type = match self.resolver.type_of(locator) {
            Ok(mime_type) => mime_type,
            Err(err) => {
                warn!(uri = %uri, error = %err, "MIME type lookup failed, leaving type unknown");
                None
            }
        };

        // Legacy direct-path lookup only works for a narrow class of locators.
        let path = match self.resolver.real_path_of(locator) {
            Ok(Some(path)) => path,
            Ok(None) => String::new(),
            Err(err) => {
                debug!(uri = %uri, error = %err, "Direct path lookup failed");
                String::new()
            }
        };

        debug!(
            uri = %uri,
            mime_type = mime_type.as_ref().map(|m| m.as_str()).unwrap_or("<unknown>"),
            path = %path,
            "Resolved share item"
        );

        Ok(Some(ResolvedItem {
            mime_type,
            uri,
            path,
        }))
    }
}
