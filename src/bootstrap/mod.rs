pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, load_settings};
pub use wiring::{build_intake, build_normalizer, build_resolver};
