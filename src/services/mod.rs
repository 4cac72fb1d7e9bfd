//! Service layer
//!
//! Business logic shared by every caller of the crate.

pub mod link_engine;
#[cfg(feature = "reaper")]
pub mod reaper;

pub use link_engine::{EditOutcome, LinkEngine, OpenOutcome};
#[cfg(feature = "reaper")]
pub use reaper::Reaper;
