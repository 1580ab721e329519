use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::bootstrap;
use ow_app::IntakeSettings;
use ow_core::ports::ContentResolverPort;
use ow_core::ShareEvent;

pub async fn run(
    event_path: &Path,
    resolver: Arc<dyn ContentResolverPort>,
    settings: &IntakeSettings,
) -> Result<()> {
    let raw = std::fs::read_to_string(event_path)
        .with_context(|| format!("Failed to read share event: {}", event_path.display()))?;
    let event = ShareEvent::from_json(&raw)
        .with_context(|| format!("Invalid share event in {}", event_path.display()))?;

    let normalizer = bootstrap::build_normalizer(resolver, settings);

    // Resolver lookups may block; keep them off the async workers.
    let normalized = tokio::task::spawn_blocking(move || normalizer.execute(&event)).await??;

    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}
