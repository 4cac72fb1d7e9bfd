//! Reaper tests
//!
//! Runs on a paused tokio clock so scheduled cleanups fire without waiting.

#![cfg(feature = "reaper")]

use std::sync::Arc;

use chrono::Duration as ChronoDuration;
use quicklink::config::{EngineConfig, ReaperConfig};
use quicklink::services::{LinkEngine, Reaper};
use quicklink::storage::MemoryLinkStore;
use quicklink::system::{Clock, ManualClock, SeededIdGenerator};
use tokio::time::Duration;

fn engine_with_clock() -> (Arc<LinkEngine>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_now());
    let engine = LinkEngine::new(
        Arc::new(MemoryLinkStore::new()),
        Arc::clone(&clock) as Arc<dyn Clock>,
        Arc::new(SeededIdGenerator::new(5)),
        EngineConfig::default(),
    );
    (Arc::new(engine), clock)
}

#[tokio::test(start_paused = true)]
async fn test_reaper_removes_expired_links() {
    let (engine, clock) = engine_with_clock();
    let doomed = engine.create("https://example.com/1", 1, 30.0, None).unwrap();
    let survivor = engine
        .create("https://example.com/2", 1, 3600.0, None)
        .unwrap();

    let handle = Reaper::new(Arc::clone(&engine), Duration::from_secs(60)).spawn();

    clock.advance(ChronoDuration::seconds(31));
    tokio::time::sleep(Duration::from_secs(61)).await;

    assert!(engine.get(&doomed.short_token).is_none());
    assert!(engine.get(&survivor.short_token).is_some());

    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_reaper_waits_for_interval() {
    let (engine, clock) = engine_with_clock();
    let link = engine.create("https://example.com", 1, 1.0, None).unwrap();
    clock.advance(ChronoDuration::seconds(5));

    let handle = Reaper::new(Arc::clone(&engine), Duration::from_secs(60)).spawn();

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(engine.get(&link.short_token).is_some());

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert!(engine.get(&link.short_token).is_none());

    handle.abort();
}

#[test]
fn test_from_config() {
    let (engine, _) = engine_with_clock();

    let disabled = ReaperConfig {
        enabled: false,
        interval_secs: 10,
    };
    assert!(Reaper::from_config(Arc::clone(&engine), &disabled).is_none());

    let enabled = ReaperConfig {
        enabled: true,
        interval_secs: 10,
    };
    let reaper = Reaper::from_config(Arc::clone(&engine), &enabled).unwrap();
    assert_eq!(reaper.interval(), Duration::from_secs(10));

    let zero_interval = ReaperConfig {
        enabled: true,
        interval_secs: 0,
    };
    assert!(Reaper::from_config(engine, &zero_interval).is_none());
}
