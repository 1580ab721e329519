use crate::NormalizedShare;
use anyhow::Result;

/// Downstream consumer of normalized shares.
pub trait ShareHandlerPort: Send + Sync {
    fn deliver(&self, share: NormalizedShare) -> Result<()>;
}
