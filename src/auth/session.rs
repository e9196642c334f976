//! The authenticated user's session

use chrono::{DateTime, Utc};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub user_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        email: impl Into<String>,
        user_id: impl Into<String>,
        token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            user_id: user_id.into(),
            token: token.into(),
            expires_at,
        }
    }

    /// Session expiring `expires_in` from now
    pub fn expiring_in(
        email: impl Into<String>,
        user_id: impl Into<String>,
        token: impl Into<String>,
        expires_in: Duration,
    ) -> Self {
        let lifetime =
            chrono::Duration::from_std(expires_in).unwrap_or_else(|_| chrono::Duration::zero());
        Self::new(email, user_id, token, Utc::now() + lifetime)
    }

    /// The token, unless it is empty or expired
    pub fn token(&self) -> Option<&str> {
        self.is_valid().then_some(self.token.as_str())
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty() && self.expires_at > now
    }

    /// Time left until expiry; zero once the deadline has passed
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).to_std().unwrap_or(Duration::ZERO)
    }
}
