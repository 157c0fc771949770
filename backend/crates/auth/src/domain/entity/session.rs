//! Authenticated Session
//!
//! Proof that a request carried a valid, unexpired access token. Only the
//! session gate can produce one, so any operation that takes a `&Session`
//! cannot be reached without passing the gate.

use chrono::{DateTime, Utc};

use crate::domain::value_object::user_id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    subject: UserId,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(
        subject: UserId,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject,
            issued_at,
            expires_at,
        }
    }

    /// The user the token was issued to
    pub fn subject(&self) -> UserId {
        self.subject
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
