use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

use super::{LinkRecord, LinkStore};

/// 每条记录独立加锁，不同 token 之间互不阻塞
type Slot = Arc<Mutex<LinkRecord>>;

/// In-memory link store backed by a sharded map.
///
/// Shard guards are only held long enough to clone the record slot out of
/// the map; the per-record mutex is what serialises mutations.
#[derive(Default)]
pub struct MemoryLinkStore {
    inner: DashMap<String, Slot>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    fn slot(&self, token: &str) -> Option<Slot> {
        // 先释放分片锁，再去拿记录锁
        self.inner.get(token).map(|entry| Arc::clone(entry.value()))
    }
}

impl LinkStore for MemoryLinkStore {
    fn save(&self, record: LinkRecord) {
        trace!("MemoryLinkStore: save '{}'", record.short_token);
        self.inner
            .insert(record.short_token.clone(), Arc::new(Mutex::new(record)));
    }

    fn insert_if_absent(&self, record: LinkRecord) -> bool {
        match self.inner.entry(record.short_token.clone()) {
            Entry::Occupied(_) => {
                trace!(
                    "MemoryLinkStore: token '{}' already taken",
                    record.short_token
                );
                false
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::new(Mutex::new(record)));
                true
            }
        }
    }

    fn get(&self, token: &str) -> Option<LinkRecord> {
        self.slot(token).map(|slot| slot.lock().clone())
    }

    fn update(&self, token: &str, f: &mut dyn FnMut(&mut LinkRecord)) -> bool {
        match self.slot(token) {
            Some(slot) => {
                let mut record = slot.lock();
                f(&mut record);
                true
            }
            None => false,
        }
    }

    fn delete(&self, token: &str) -> bool {
        self.inner.remove(token).is_some()
    }

    fn remove_if(&self, token: &str, predicate: &dyn Fn(&LinkRecord) -> bool) -> bool {
        self.inner
            .remove_if(token, |_, slot| predicate(&slot.lock()))
            .is_some()
    }

    fn all_records(&self) -> Vec<LinkRecord> {
        // 1. 收集所有 slot（snapshot），不在持有分片锁时加记录锁
        let slots: Vec<Slot> = self.inner.iter().map(|r| Arc::clone(r.value())).collect();

        // 2. 逐个复制
        slots.iter().map(|slot| slot.lock().clone()).collect()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
