use crate::{MimeType, RawLocator};
use anyhow::Result;

/// Content resolution service.
///
/// Both lookups are best effort. Callers treat `Err` the same as `Ok(None)`:
/// an unknown MIME type, or an empty path.
pub trait ContentResolverPort: Send + Sync {
    /// Declared MIME type of the content behind `locator`.
    fn type_of(&self, locator: &RawLocator) -> Result<Option<MimeType>>;

    /// Direct file-system path reachable from `locator`, if any.
    fn real_path_of(&self, locator: &RawLocator) -> Result<Option<String>>;
}
