//! openwith: normalize OS share/open events into a uniform list of file
//! descriptors.
//!
//! The domain lives in the `ow-*` workspace crates; this crate wires them
//! together and provides the `openwith` command line.

pub mod bootstrap;
pub mod cli;
