//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No business logic, no validation, no default value calculation.**
//! Defaults are applied by `ow-app::IntakeSettings`.

mod app_config;

pub use app_config::AppConfig;
