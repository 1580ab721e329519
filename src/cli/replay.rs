use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::bootstrap;
use ow_app::{IntakeSettings, ShareIntake};
use ow_core::ports::ContentResolverPort;
use ow_core::{ShareError, ShareEvent};
use ow_infra::ChannelShareHandler;

#[derive(Debug, Default, PartialEq, Eq)]
struct ReplaySummary {
    processed: usize,
    malformed: usize,
    delivered: usize,
}

pub async fn run(
    events_path: &Path,
    handler_after: usize,
    resolver: Arc<dyn ContentResolverPort>,
    settings: &IntakeSettings,
) -> Result<()> {
    let raw = std::fs::read_to_string(events_path)
        .with_context(|| format!("Failed to read share events: {}", events_path.display()))?;
    let events: Vec<Value> =
        serde_json::from_str(&raw).context("Share events file must hold a JSON array")?;

    let intake = bootstrap::build_intake(resolver, settings);
    let (handler, mut receiver) = ChannelShareHandler::channel();

    let feeder =
        tokio::task::spawn_blocking(move || feed(intake, events, handler, handler_after));

    while let Some(share) = receiver.recv().await {
        println!("{}", serde_json::to_string(&share)?);
    }

    let summary = feeder.await??;
    info!(
        processed = summary.processed,
        malformed = summary.malformed,
        delivered = summary.delivered,
        "Replay finished"
    );
    Ok(())
}

/// Push every event through the intake. The handler is registered before
/// the event at `handler_after`, or after the last event when out of range.
fn feed(
    intake: ShareIntake,
    events: Vec<Value>,
    handler: ChannelShareHandler,
    handler_after: usize,
) -> Result<ReplaySummary> {
    let mut handler = Some(Arc::new(handler));
    let mut summary = ReplaySummary::default();

    for (index, value) in events.into_iter().enumerate() {
        if index == handler_after {
            if let Some(handler) = handler.take() {
                summary.delivered += intake.set_handler(handler)?;
            }
        }

        let event = match ShareEvent::from_value(value) {
            Ok(event) => event,
            Err(err) => {
                warn!(index, error = %err, "Skipping undecodable share event");
                summary.malformed += 1;
                continue;
            }
        };

        match intake.on_new_event(&event) {
            Ok(delivered) => summary.delivered += delivered,
            Err(err) if err.downcast_ref::<ShareError>().is_some() => {
                warn!(index, error = %err, "Skipping malformed share event");
                summary.malformed += 1;
                continue;
            }
            Err(err) => return Err(err),
        }
        summary.processed += 1;
    }

    debug!(
        pending = intake.pending_len()?,
        handler = intake.has_handler()?,
        "Replay input exhausted"
    );
    if let Some(handler) = handler.take() {
        summary.delivered += intake.set_handler(handler)?;
    }

    Ok(summary)
}
