//! Port interfaces for the application layer
//!
//! Ports define the contract between the share normalization use cases
//! and the platform pieces around them: the content resolver that knows
//! about locators, the event source the OS hands over, and the downstream
//! consumer that receives normalized shares.
//!
//! All ports are synchronous. Normalization has no suspension points and
//! callers decide which thread it runs on.

mod content_resolver;
mod share_event_source;
mod share_handler;

pub use content_resolver::ContentResolverPort;
pub use share_event_source::ShareEventSource;
pub use share_handler::ShareHandlerPort;
