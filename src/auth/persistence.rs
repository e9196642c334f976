//! Versioned on-disk record of the current session

use super::Session;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Blob key the session is stored under
pub const SESSION_KEY: &str = "userData";

/// Current schema version of [`PersistedSession`]
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Session as written to the blob store.
///
/// Field names match the records written before the schema carried a
/// version, so those still load (as version 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default = "unversioned")]
    pub version: u32,
    pub email: String,
    pub id: String,
    #[serde(rename = "_token", default)]
    pub token: String,
    #[serde(rename = "_tokenExpirationDate")]
    pub token_expiration_date: DateTime<Utc>,
}

fn unversioned() -> u32 {
    1
}

impl PersistedSession {
    pub fn from_session(session: &Session) -> Self {
        Self {
            version: SESSION_SCHEMA_VERSION,
            email: session.email.clone(),
            id: session.user_id.clone(),
            token: session.token.clone(),
            token_expiration_date: session.expires_at,
        }
    }

    pub fn into_session(self) -> Session {
        Session::new(self.email, self.id, self.token, self.token_expiration_date)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a stored blob.
    ///
    /// Anything unreadable counts as "no session" and yields `None`.
    pub fn decode(raw: &str) -> Option<Self> {
        let record: PersistedSession = match serde_json::from_str(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Discarding unreadable session record: {}", e);
                return None;
            }
        };

        if record.version != SESSION_SCHEMA_VERSION {
            warn!(
                "Discarding session record with schema version {}",
                record.version
            );
            return None;
        }

        if record.email.is_empty() || record.id.is_empty() {
            warn!("Discarding session record without user identity");
            return None;
        }

        Some(record)
    }
}
