//! Terminal-state view of the external authentication service.
//!
//! The service owns the token lifecycle; this crate only observes its
//! outcome: pending, failed, anonymous, or resolved to a principal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Principal;

/// Structured classification of an upstream authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorCode {
    /// The account exists but has been administratively disabled.
    Deactivated,
    /// Any other authentication failure.
    Failure,
}

/// Upstream authentication failure, surfaced to the gate as data.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub message: String,
}

impl AuthError {
    pub fn deactivated(message: impl Into<String>) -> Self {
        Self {
            code: AuthErrorCode::Deactivated,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: AuthErrorCode::Failure,
            message: message.into(),
        }
    }

    /// Classify a free-text error message from a provider that does not emit
    /// structured codes.
    ///
    /// Messages mentioning "deactivated" or "inactive" (case-insensitive)
    /// map to [`AuthErrorCode::Deactivated`]. Providers that can emit codes
    /// should construct the error directly instead.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if lowered.contains("deactivated") || lowered.contains("inactive") {
            Self::deactivated(message)
        } else {
            Self::failure(message)
        }
    }
}

/// Snapshot of the authentication service's reactive accessor.
///
/// `is_initialized` is false until the service has completed its first
/// resolution attempt; the gate treats that window as in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub principal: Option<Principal>,
    pub is_loading: bool,
    pub error: Option<AuthError>,
    pub is_initialized: bool,
}

impl AuthSnapshot {
    /// Authentication check still in flight.
    pub fn loading() -> Self {
        Self {
            principal: None,
            is_loading: true,
            error: None,
            is_initialized: false,
        }
    }

    /// Resolved: no session present.
    pub fn anonymous() -> Self {
        Self {
            principal: None,
            is_loading: false,
            error: None,
            is_initialized: true,
        }
    }

    /// Resolved to an authenticated principal.
    pub fn resolved(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            is_loading: false,
            error: None,
            is_initialized: true,
        }
    }

    /// Terminal upstream failure.
    pub fn failed(error: AuthError) -> Self {
        Self {
            principal: None,
            is_loading: false,
            error: Some(error),
            is_initialized: true,
        }
    }

    /// Whether the backing check has not yet reached a terminal state.
    pub fn is_pending(&self) -> bool {
        self.is_loading || !self.is_initialized
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_deactivation_markers_classify_as_deactivated() {
        for message in [
            "Account deactivated by administrator",
            "user is INACTIVE",
            "This account was marked inactive on 2026-01-05",
        ] {
            let error = AuthError::from_message(message);
            assert_eq!(error.code, AuthErrorCode::Deactivated, "{message}");
            assert_eq!(error.message, message);
        }
    }

    #[test]
    fn other_messages_classify_as_generic_failure() {
        let error = AuthError::from_message("token signature mismatch");
        assert_eq!(error.code, AuthErrorCode::Failure);
    }

    #[test]
    fn snapshot_is_pending_until_initialized() {
        assert!(AuthSnapshot::loading().is_pending());
        assert!(!AuthSnapshot::anonymous().is_pending());

        let mut snapshot = AuthSnapshot::anonymous();
        snapshot.is_initialized = false;
        assert!(snapshot.is_pending());
    }
}
