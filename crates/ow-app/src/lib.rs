//! openwith Application Orchestration Layer
//!
//! This crate contains the share normalization use cases and the intake
//! that buffers normalized shares until a downstream handler registers.

pub mod settings;
pub mod usecases;

pub use settings::{IntakeSettings, Verbosity};
pub use usecases::{
    NormalizeShareEventUseCase, NormalizerSettings, PendingShareQueue, ResolveShareItemUseCase,
    ShareIntake,
};
