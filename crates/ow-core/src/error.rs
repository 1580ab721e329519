use thiserror::Error;

/// Errors reported by share normalization.
///
/// "No result" is not an error: it is `Ok(None)` from the normalizer.
/// Path resolution failures are never surfaced either, they degrade to an
/// item with an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The event could not be decoded into the expected shape, or a locator
    /// of the payload source it selects is malformed.
    #[error("malformed share event: {0}")]
    MalformedEvent(String),

    /// A locator could not be rendered to its canonical string form.
    #[error("malformed locator: {0}")]
    MalformedLocator(String),
}

impl From<serde_json::Error> for ShareError {
    fn from(err: serde_json::Error) -> Self {
        ShareError::MalformedEvent(err.to_string())
    }
}
