//! Link lifecycle engine
//!
//! Owns every business rule around short links: creation, redemption
//! against the click quota and TTL, owner-gated edits, per-owner listing and
//! reaping of expired records. Storage, time and randomness are injected.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use strum::AsRefStr;
use tracing::{debug, info, trace, warn};

use crate::config::{EngineConfig, get_config};
use crate::errors::{QuicklinkError, Result};
use crate::storage::{LinkRecord, LinkStore, MemoryLinkStore, OwnerId};
use crate::system::{Clock, IdGenerator, RandomIdGenerator, SystemClock};

// ============ Outcomes ============

/// Result of redeeming a short token
#[derive(Debug, Clone, PartialEq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum OpenOutcome {
    /// Click recorded; carries the destination and the updated counters
    Success {
        url: String,
        clicks: u32,
        max_clicks: u32,
        expires_at: DateTime<Utc>,
    },
    NotFound,
    /// TTL elapsed. The record is kept until the next cleanup.
    Expired,
    QuotaExhausted,
}

impl OpenOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OpenOutcome::Success { .. })
    }

    /// Stable snake_case name of the variant
    pub fn kind(&self) -> &str {
        self.as_ref()
    }
}

/// Result of changing a link's quota and TTL
#[derive(Debug, Clone, PartialEq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum EditOutcome {
    /// Edit applied; carries the record as stored after the change
    Success(LinkRecord),
    NotFound,
    /// Caller is not the link's owner
    Forbidden,
    InvalidArgument(String),
}

impl EditOutcome {
    /// Stable snake_case name of the variant
    pub fn kind(&self) -> &str {
        self.as_ref()
    }
}

// ============ LinkEngine Implementation ============

pub struct LinkEngine {
    store: Arc<dyn LinkStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    config: EngineConfig,
}

impl LinkEngine {
    pub fn new(
        store: Arc<dyn LinkStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            config,
        }
    }

    /// In-memory engine on the wall clock, configured from the global config
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryLinkStore::new()),
            Arc::new(SystemClock),
            Arc::new(RandomIdGenerator),
            get_config().engine.clone(),
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Convert a TTL in seconds to a time delta; `None` unless finite and
    /// strictly positive.
    fn ttl_delta(ttl_seconds: f64) -> Option<TimeDelta> {
        if !ttl_seconds.is_finite() || ttl_seconds <= 0.0 {
            return None;
        }
        let std_duration = std::time::Duration::try_from_secs_f64(ttl_seconds).ok()?;
        TimeDelta::from_std(std_duration).ok()
    }

    fn deadline(now: DateTime<Utc>, ttl: TimeDelta) -> Option<DateTime<Utc>> {
        now.checked_add_signed(ttl)
    }

    // ============ Operations ============

    /// Create a new short link
    ///
    /// Mints a fresh owner id when `owner_id` is `None`; the returned record
    /// carries it so the caller can reuse it. Token collisions are retried up
    /// to `max_token_attempts` times and never overwrite an existing link.
    pub fn create(
        &self,
        original_url: &str,
        max_clicks: u32,
        ttl_seconds: f64,
        owner_id: Option<OwnerId>,
    ) -> Result<LinkRecord> {
        if max_clicks == 0 {
            return Err(QuicklinkError::invalid_argument(
                "max_clicks must be positive",
            ));
        }
        let ttl = Self::ttl_delta(ttl_seconds).ok_or_else(|| {
            QuicklinkError::invalid_argument(format!(
                "ttl_seconds must be a positive finite number, got {}",
                ttl_seconds
            ))
        })?;

        let now = self.clock.now();
        let expires_at = Self::deadline(now, ttl).ok_or_else(|| {
            QuicklinkError::invalid_argument(format!("ttl_seconds {} is out of range", ttl_seconds))
        })?;

        let owner_id = owner_id.unwrap_or_else(|| {
            let minted = self.ids.owner_id();
            debug!("LinkEngine: minted owner id {}", minted);
            minted
        });

        let attempts = self.config.max_token_attempts.max(1);
        for attempt in 1..=attempts {
            let record = LinkRecord {
                original_url: original_url.to_string(),
                short_token: self.ids.short_token(self.config.token_length),
                max_clicks,
                current_clicks: 0,
                expires_at,
                owner_id,
                created_at: now,
            };

            if self.store.insert_if_absent(record.clone()) {
                info!(
                    "LinkEngine: created '{}' -> '{}' (max_clicks={}, expires_at={})",
                    record.short_token, record.original_url, max_clicks, expires_at
                );
                return Ok(record);
            }

            warn!(
                "LinkEngine: token '{}' already in use (attempt {}/{})",
                record.short_token, attempt, attempts
            );
        }

        Err(QuicklinkError::token_exhausted(format!(
            "No free short token after {} attempts",
            attempts
        )))
    }

    /// Point lookup, expired records included
    pub fn get(&self, token: &str) -> Option<LinkRecord> {
        self.store.get(token)
    }

    /// Whether `record` is past its deadline right now
    pub fn is_expired(&self, record: &LinkRecord) -> bool {
        record.is_expired_at(self.clock.now())
    }

    /// Redeem a short token
    ///
    /// Checks run in order under the record's lock: existence, expiry, quota.
    /// Anyone holding the token may redeem it; `caller` is only logged.
    pub fn open(&self, token: &str, caller: &OwnerId) -> OpenOutcome {
        let mut outcome = OpenOutcome::NotFound;

        self.store.update(token, &mut |record: &mut LinkRecord| {
            outcome = if record.is_expired_at(self.clock.now()) {
                OpenOutcome::Expired
            } else if record.is_exhausted() {
                OpenOutcome::QuotaExhausted
            } else {
                record.current_clicks += 1;
                OpenOutcome::Success {
                    url: record.original_url.clone(),
                    clicks: record.current_clicks,
                    max_clicks: record.max_clicks,
                    expires_at: record.expires_at,
                }
            };
        });

        debug!(
            "LinkEngine: open '{}' by {} -> {}",
            token,
            caller,
            outcome.kind()
        );
        outcome
    }

    /// Replace a link's click ceiling and deadline
    ///
    /// Only the owner may edit. The click counter is kept: clicks are
    /// cumulative history, so raising the ceiling on an exhausted link makes
    /// it redeemable again from where it stopped.
    pub fn edit(
        &self,
        token: &str,
        caller: &OwnerId,
        new_max_clicks: u32,
        new_ttl_seconds: f64,
    ) -> EditOutcome {
        if new_max_clicks == 0 {
            return EditOutcome::InvalidArgument("new_max_clicks must be positive".to_string());
        }
        let Some(ttl) = Self::ttl_delta(new_ttl_seconds) else {
            return EditOutcome::InvalidArgument(format!(
                "new_ttl_seconds must be a positive finite number, got {}",
                new_ttl_seconds
            ));
        };

        let mut outcome = EditOutcome::NotFound;

        self.store.update(token, &mut |record: &mut LinkRecord| {
            if record.owner_id != *caller {
                outcome = EditOutcome::Forbidden;
                return;
            }
            if new_max_clicks < record.current_clicks {
                outcome = EditOutcome::InvalidArgument(format!(
                    "new_max_clicks {} is below the {} clicks already recorded",
                    new_max_clicks, record.current_clicks
                ));
                return;
            }
            let Some(expires_at) = Self::deadline(self.clock.now(), ttl) else {
                outcome = EditOutcome::InvalidArgument(format!(
                    "new_ttl_seconds {} is out of range",
                    new_ttl_seconds
                ));
                return;
            };

            record.max_clicks = new_max_clicks;
            record.expires_at = expires_at;
            outcome = EditOutcome::Success(record.clone());
        });

        match &outcome {
            EditOutcome::Success(record) => info!(
                "LinkEngine: edited '{}' (max_clicks={}, expires_at={})",
                token, record.max_clicks, record.expires_at
            ),
            EditOutcome::Forbidden => {
                warn!("LinkEngine: {} is not the owner of '{}'", caller, token)
            }
            other => debug!("LinkEngine: edit '{}' -> {}", token, other.kind()),
        }
        outcome
    }

    /// All links created by `owner`, expired ones included
    pub fn list_for(&self, owner: &OwnerId) -> Vec<LinkRecord> {
        self.store
            .all_records()
            .into_iter()
            .filter(|record| record.owner_id == *owner)
            .collect()
    }

    /// Remove every link that is expired at the moment of the scan
    ///
    /// Returns the number of records removed. A link renewed by `edit`
    /// between the scan and its removal is kept.
    pub fn cleanup_expired(&self) -> usize {
        let now = self.clock.now();

        let expired: Vec<String> = self
            .store
            .all_records()
            .into_iter()
            .filter(|record| record.is_expired_at(now))
            .map(|record| record.short_token)
            .collect();

        if expired.is_empty() {
            trace!("LinkEngine: no expired links to clean up");
            return 0;
        }

        let removed = expired
            .iter()
            .filter(|token| {
                self.store
                    .remove_if(token, &|record: &LinkRecord| record.is_expired_at(now))
            })
            .count();

        info!("LinkEngine: cleaned up {} expired link(s)", removed);
        removed
    }

    /// Render the short link under the configured base URL
    pub fn short_url(&self, record: &LinkRecord) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}/{}", base, record.short_token)
    }
}
