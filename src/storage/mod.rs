//! Link storage
//!
//! The store only keeps whole records keyed by short token. Expiry, quota
//! and ownership rules live in the engine above it.

pub mod memory;
pub mod models;

pub use memory::MemoryLinkStore;
pub use models::{LinkRecord, OwnerId};

/// Keyed storage of [`LinkRecord`] by short token.
///
/// Implementations own their records by value. Reads hand out copies, so a
/// caller that wants to observe a mutation has to fetch the record again.
pub trait LinkStore: Send + Sync {
    /// Upsert by token. A record already stored under the same token is
    /// replaced.
    fn save(&self, record: LinkRecord);

    /// Insert only when the token is free. Returns `false` on collision and
    /// leaves the existing record untouched.
    fn insert_if_absent(&self, record: LinkRecord) -> bool;

    fn get(&self, token: &str) -> Option<LinkRecord>;

    /// Run `f` against the stored record while holding that record's lock.
    ///
    /// Returns `false` if no record exists under `token`. Calls on different
    /// tokens never contend on the same lock.
    fn update(&self, token: &str, f: &mut dyn FnMut(&mut LinkRecord)) -> bool;

    /// Remove the record if present. Idempotent.
    fn delete(&self, token: &str) -> bool;

    /// Remove the record only if `predicate` holds for its current value.
    fn remove_if(&self, token: &str, predicate: &dyn Fn(&LinkRecord) -> bool) -> bool;

    /// Copy of every record at call time, in no particular order.
    fn all_records(&self) -> Vec<LinkRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
