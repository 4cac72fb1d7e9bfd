//! Storage tests
//!
//! Concurrency behaviour of MemoryLinkStore.

use std::sync::Arc;

use chrono::{Duration, Utc};
use quicklink::storage::{LinkRecord, LinkStore, MemoryLinkStore, OwnerId};

/// 创建测试用的 LinkRecord
fn create_test_record(token: &str, max_clicks: u32) -> LinkRecord {
    let now = Utc::now();
    LinkRecord {
        original_url: format!("https://{}.example.com", token),
        short_token: token.to_string(),
        max_clicks,
        current_clicks: 0,
        expires_at: now + Duration::hours(1),
        owner_id: OwnerId::from_uuid(uuid::Uuid::new_v4()),
        created_at: now,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_updates_are_not_lost() {
    let store = Arc::new(MemoryLinkStore::new());
    store.save(create_test_record("hot", u32::MAX));

    const NUM_TASKS: usize = 10;
    const UPDATES_PER_TASK: usize = 1000;

    let mut handles = vec![];
    for _ in 0..NUM_TASKS {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            for _ in 0..UPDATES_PER_TASK {
                store.update("hot", &mut |r: &mut LinkRecord| r.current_clicks += 1);
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(
        store.get("hot").unwrap().current_clicks as usize,
        NUM_TASKS * UPDATES_PER_TASK
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_insert_if_absent_single_winner() {
    let store = Arc::new(MemoryLinkStore::new());

    let mut handles = vec![];
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let mut record = create_test_record("contested", 1);
            record.original_url = format!("https://writer{}.example.com", i);
            store.insert_if_absent(record)
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_snapshot_while_writing() {
    let store = Arc::new(MemoryLinkStore::new());
    for i in 0..100 {
        store.save(create_test_record(&format!("k{}", i), 5));
    }

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for i in 100..200 {
                store.save(create_test_record(&format!("k{}", i), 5));
                tokio::task::yield_now().await;
            }
        })
    };

    // 快照大小介于写入前后之间
    for _ in 0..10 {
        let snapshot = store.all_records();
        assert!(snapshot.len() >= 100 && snapshot.len() <= 200);
        tokio::task::yield_now().await;
    }

    writer.await.unwrap();
    assert_eq!(store.all_records().len(), 200);
}

#[test]
fn test_update_after_delete_reports_absent() {
    let store = MemoryLinkStore::new();
    store.save(create_test_record("gone", 1));
    store.delete("gone");

    let mut touched = false;
    assert!(!store.update("gone", &mut |_: &mut LinkRecord| touched = true));
    assert!(!touched);
}
