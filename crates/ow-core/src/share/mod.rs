//! Share intake domain models.
mod action;
mod event;
mod item;
mod locator;
mod mime;
pub mod extra_keys;

pub use action::{ActionTable, ShareAction};
pub use event::{PayloadSource, ShareEvent};
pub use item::{NormalizedShare, ResolvedItem};
pub use locator::RawLocator;
pub use mime::MimeType;
