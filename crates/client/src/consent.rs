//! The cookie-consent record.
//!
//! One durable key holding `"accepted"`, `"declined"`, or nothing. The
//! banner shows only while no decision is stored; analytics treat an
//! absent decision as allowed until declined, matching the original
//! storefront behavior.

use crate::storage::{CONSENT_KEY, KeyValueStore};

/// A stored cookie-consent decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    /// Load the stored decision, if any. Unrecognized values read as no
    /// decision.
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        match store.get(CONSENT_KEY).as_deref() {
            Some("accepted") => Some(Self::Accepted),
            Some("declined") => Some(Self::Declined),
            _ => None,
        }
    }

    /// Persist this decision.
    pub fn save(self, store: &dyn KeyValueStore) {
        let value = match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        };
        store.set(CONSENT_KEY, value);
    }

    /// Whether analytics may fire under this decision (`None` = not yet
    /// decided = allowed).
    #[must_use]
    pub fn allows_analytics(decision: Option<Self>) -> bool {
        decision != Some(Self::Declined)
    }
}
