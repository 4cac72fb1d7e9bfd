//! System-level modules
//!
//! This module contains the capabilities the engine is built on:
//! - Time source (`clock`)
//! - Owner id and short token generation (`id`)
//! - Logging initialization (`logging`)

pub mod clock;
pub mod id;
pub mod logging;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::{IdGenerator, RandomIdGenerator, SeededIdGenerator};
