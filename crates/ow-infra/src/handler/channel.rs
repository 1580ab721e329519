use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tracing::debug;

use ow_core::ports::ShareHandlerPort;
use ow_core::NormalizedShare;

/// Share handler that forwards every share into a tokio channel.
///
/// Delivery fails once the receiving side has been dropped.
pub struct ChannelShareHandler {
    sender: mpsc::UnboundedSender<NormalizedShare>,
}

impl ChannelShareHandler {
    pub fn new(sender: mpsc::UnboundedSender<NormalizedShare>) -> Self {
        Self { sender }
    }

    /// Create a handler together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NormalizedShare>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl ShareHandlerPort for ChannelShareHandler {
    fn deliver(&self, share: NormalizedShare) -> Result<()> {
        debug!(action = %share.action, items = share.item_count(), "Forwarding share");
        self.sender
            .send(share)
            .map_err(|_| anyhow!("share receiver dropped"))
    }
}
