//! Owner id and short token generation
//!
//! The engine never touches ambient randomness directly; it is handed an
//! [`IdGenerator`] at construction.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use uuid::Uuid;

use crate::storage::OwnerId;
use crate::utils::{TOKEN_ALPHABET, generate_random_code};

pub trait IdGenerator: Send + Sync {
    fn owner_id(&self) -> OwnerId;

    fn short_token(&self, length: usize) -> String;
}

/// Thread-local RNG backed generator used in production
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn owner_id(&self) -> OwnerId {
        OwnerId::from_uuid(Uuid::new_v4())
    }

    fn short_token(&self, length: usize) -> String {
        generate_random_code(length)
    }
}

/// Deterministic generator: the same seed yields the same sequence of ids
/// and tokens.
pub struct SeededIdGenerator {
    rng: Mutex<StdRng>,
}

impl SeededIdGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn owner_id(&self) -> OwnerId {
        let mut bytes = [0u8; 16];
        self.rng.lock().fill(&mut bytes);
        OwnerId::from_uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    fn short_token(&self, length: usize) -> String {
        let mut rng = self.rng.lock();
        (0..length)
            .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}
