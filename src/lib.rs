//! Quicklink - an in-process link shortening engine
//!
//! Maps long URLs to short tokens, enforces per-link click quotas and TTL
//! expiry, and scopes edits to the owner id minted at creation.
//!
//! # Features
//! - **reaper**: background tokio task that periodically removes expired
//!   links (default)
//!
//! # Architecture
//! - `storage`: link records and the concurrent keyed store
//! - `services`: the link lifecycle engine and the reaper
//! - `system`: clock, id generation and logging
//! - `config`: configuration management
//! - `utils`: URL validation and TTL parsing for callers
//!
//! # Example
//! ```
//! use quicklink::services::{LinkEngine, OpenOutcome};
//!
//! let engine = LinkEngine::in_memory();
//! let link = engine.create("https://example.com", 2, 3600.0, None).unwrap();
//! let outcome = engine.open(&link.short_token, &link.owner_id);
//! assert!(matches!(outcome, OpenOutcome::Success { clicks: 1, .. }));
//! ```

pub mod config;
pub mod errors;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
