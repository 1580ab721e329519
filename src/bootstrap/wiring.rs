//! Dependency wiring: connect adapters to use cases.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use ow_app::{
    IntakeSettings, NormalizeShareEventUseCase, ResolveShareItemUseCase, ShareIntake,
};
use ow_core::ports::ContentResolverPort;
use ow_infra::{FixtureContentResolver, FsContentResolver};

/// File-system resolver, optionally overlaid with a fixture table.
pub fn build_resolver(fixtures: Option<&Path>) -> Result<Arc<dyn ContentResolverPort>> {
    let fs_resolver = Arc::new(FsContentResolver::new());
    match fixtures {
        Some(path) => {
            let fixture = FixtureContentResolver::from_file(path)?.with_fallback(fs_resolver);
            info!(rows = fixture.len(), path = %path.display(), "Loaded resolver fixtures");
            Ok(Arc::new(fixture))
        }
        None => Ok(fs_resolver),
    }
}

pub fn build_normalizer(
    resolver: Arc<dyn ContentResolverPort>,
    settings: &IntakeSettings,
) -> NormalizeShareEventUseCase {
    NormalizeShareEventUseCase::new(
        ResolveShareItemUseCase::new(resolver),
        settings.normalizer.clone(),
    )
}

pub fn build_intake(
    resolver: Arc<dyn ContentResolverPort>,
    settings: &IntakeSettings,
) -> ShareIntake {
    ShareIntake::new(
        build_normalizer(resolver, settings),
        settings.queue_capacity,
    )
}
