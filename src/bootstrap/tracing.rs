//! Tracing configuration for openwith
//!
//! Installs the global `tracing-subscriber` registry:
//!
//! - **Environment filter**: `RUST_LOG` wins, otherwise the configured verbosity
//! - **stderr**: always, so stdout stays clean for JSON output
//! - **File**: additionally, when `OPENWITH_LOG_DIR` is set

use std::{fs, io, path::PathBuf, sync::OnceLock};

use ow_app::Verbosity;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

pub const LOG_DIR_ENV: &str = "OPENWITH_LOG_DIR";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Build the default filter directives for tracing
fn build_filter_directives(verbosity: Verbosity) -> Vec<String> {
    let level = verbosity.as_filter();
    vec![
        level.to_string(),
        format!("ow_core={level}"),
        format!("ow_app={level}"),
        format!("ow_infra={level}"),
        format!("openwith_lib={level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once, before any share event is processed.
///
/// ## Errors
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
pub fn init_tracing_subscriber(verbosity: Verbosity) -> anyhow::Result<()> {
    // Step 1: Build environment filter
    let filter_directives = build_filter_directives(verbosity);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Step 2: Create writers
    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match std::env::var_os(LOG_DIR_ENV) {
        Some(dir) => match build_file_writer(PathBuf::from(dir)) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        },
        None => None,
    };

    // Step 3: Create fmt layers
    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    // Step 4: Register the global subscriber
    let subscriber = registry().with(env_filter).with(stderr_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(logs_dir: PathBuf) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, "openwith.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
