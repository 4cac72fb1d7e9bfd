use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::QuicklinkError;

/// Opaque owner identifier, returned at creation and used as a bearer
/// credential for edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(Uuid);

impl OwnerId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = QuicklinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub original_url: String,
    pub short_token: String,
    pub max_clicks: u32,
    #[serde(default)]
    pub current_clicks: u32,
    pub expires_at: DateTime<Utc>,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Whether the record is past its deadline at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn remaining_clicks(&self) -> u32 {
        self.max_clicks.saturating_sub(self.current_clicks)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_clicks >= self.max_clicks
    }
}
