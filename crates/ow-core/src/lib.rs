//! # ow-core
//!
//! Core domain models and ports for openwith share intake.
//!
//! This crate contains pure normalization types without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod error;
pub mod ports;
pub mod share;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use error::ShareError;
pub use share::{
    ActionTable, MimeType, NormalizedShare, PayloadSource, RawLocator, ResolvedItem, ShareAction,
    ShareEvent,
};
