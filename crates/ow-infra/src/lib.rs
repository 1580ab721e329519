//! Infrastructure adapters for openwith: content resolvers and share handlers.

pub mod content_resolver;
pub mod handler;

pub use content_resolver::{FixtureContentResolver, FsContentResolver};
pub use handler::ChannelShareHandler;
