//! Share intake: buffered delivery of normalized shares.
//!
//! Share events can arrive before anything downstream is ready to consume
//! them (the launch event, typically). The intake normalizes every event as
//! it arrives, keeps the results in a bounded [`PendingShareQueue`], and
//! flushes them in arrival order once a [`ShareHandlerPort`] is registered.
//!
//! Deliveries happen while the intake state is locked, so a handler must not
//! call back into the same intake from `deliver`.

use anyhow::{anyhow, Context, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, info_span, warn};

use super::normalize_share_event::NormalizeShareEventUseCase;
use super::pending_shares::PendingShareQueue;
use ow_core::ports::{ShareEventSource, ShareHandlerPort};

struct IntakeState {
    handler: Option<Arc<dyn ShareHandlerPort>>,
    pending: PendingShareQueue,
}

pub struct ShareIntake {
    normalizer: NormalizeShareEventUseCase,
    state: Mutex<IntakeState>,
}

impl ShareIntake {
    pub fn new(normalizer: NormalizeShareEventUseCase, queue_capacity: usize) -> Self {
        Self {
            normalizer,
            state: Mutex::new(IntakeState {
                handler: None,
                pending: PendingShareQueue::new(queue_capacity),
            }),
        }
    }

    /// Handle the event the app was launched with.
    pub fn init(&self, launch_event: &dyn ShareEventSource) -> Result<usize> {
        info!("Processing launch share event");
        self.on_new_event(launch_event)
    }

    /// Normalize an incoming event, queue its result and flush if a handler
    /// is registered.
    ///
    /// # Returns
    /// - number of shares delivered by this call
    ///
    /// # Errors
    /// - [`ow_core::ShareError::MalformedEvent`] when the event is malformed
    /// - delivery failures; undelivered shares stay queued
    pub fn on_new_event(&self, event: &dyn ShareEventSource) -> Result<usize> {
        let span = info_span!("usecase.share_intake.on_new_event");
        let _guard = span.enter();

        let normalized = self.normalizer.execute(event)?;

        let mut state = self.lock_state()?;
        match normalized {
            Some(share) => {
                if let Some(evicted) = state.pending.push(share) {
                    warn!(
                        action = %evicted.action,
                        capacity = state.pending.capacity(),
                        "Pending share queue full, dropped oldest share"
                    );
                }
            }
            None => debug!("Share event carried nothing to report"),
        }

        Self::flush(&mut state)
    }

    /// Register the downstream handler and flush everything pending.
    pub fn set_handler(&self, handler: Arc<dyn ShareHandlerPort>) -> Result<usize> {
        let mut state = self.lock_state()?;
        state.handler = Some(handler);
        info!(pending = state.pending.len(), "Share handler registered");
        Self::flush(&mut state)
    }

    /// Drop the handler and every pending share.
    pub fn reset(&self) -> Result<()> {
        let mut state = self.lock_state()?;
        state.handler = None;
        state.pending.clear();
        info!("Share intake reset");
        Ok(())
    }

    pub fn pending_len(&self) -> Result<usize> {
        Ok(self.lock_state()?.pending.len())
    }

    pub fn has_handler(&self) -> Result<bool> {
        Ok(self.lock_state()?.handler.is_some())
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, IntakeState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("share intake state lock poisoned"))
    }

    fn flush(state: &mut IntakeState) -> Result<usize> {
        let Some(handler) = state.handler.clone() else {
            debug!(pending = state.pending.len(), "No share handler yet, keeping shares queued");
            return Ok(0);
        };

        let mut delivered = 0;
        while let Some(share) = state.pending.pop_front() {
            if let Err(err) = handler.deliver(share.clone()) {
                state.pending.requeue_front(share);
                warn!(
                    error = %err,
                    pending = state.pending.len(),
                    "Share delivery failed, keeping remaining shares queued"
                );
                return Err(err).context("failed to deliver pending share");
            }
            delivered += 1;
        }

        if delivered > 0 {
            debug!(delivered, "Flushed pending shares");
        }
        Ok(delivered)
    }
}
