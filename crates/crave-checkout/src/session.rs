//! # Session
//!
//! The authenticated session handle the checkout reads.
//!
//! The auth provider itself is an external collaborator; all the checkout
//! needs from it is the opaque user id that resolves to a customer row.
//! `Option<Session>` at the call sites models "maybe signed in".

use serde::{Deserialize, Serialize};

/// An authenticated user session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque user id issued by the auth provider.
    pub user_id: String,
}

impl Session {
    /// Creates a session for the given auth user id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Session {
            user_id: user_id.into(),
        }
    }
}
