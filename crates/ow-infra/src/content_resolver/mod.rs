mod fixture;
mod fs;
mod mime_table;

pub use fixture::FixtureContentResolver;
pub use fs::FsContentResolver;
pub(crate) use mime_table::mime_for_extension;
