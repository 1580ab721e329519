pub mod normalize_share_event;
pub mod pending_shares;
pub mod resolve_share_item;
pub mod share_intake;

#[cfg(test)]
pub(crate) mod test_support;

pub use normalize_share_event::{NormalizeShareEventUseCase, NormalizerSettings};
pub use pending_shares::PendingShareQueue;
pub use resolve_share_item::ResolveShareItemUseCase;
pub use share_intake::ShareIntake;
