//! The gate's output: a total classification of how to proceed.

use serde::Serialize;
use thiserror::Error;

use crate::Role;

/// Navigation target for unauthenticated principals.
pub const LOGIN_ROUTE: &str = "/";

/// Why access was denied.
///
/// All variants are non-fatal and surfaced as data; the presentation layer
/// owns user-visible messaging.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DenialReason {
    /// Upstream authentication failure, passed through as data.
    #[error("authentication error: {detail}")]
    AuthFailure { detail: String },

    /// Authenticated, but the account has no role configured.
    #[error("role not configured")]
    RoleMissing,

    /// Authenticated and configured, but insufficient privilege.
    #[error("role not permitted")]
    RoleNotPermitted { actual: Role, required: Vec<Role> },

    /// Organizational prerequisite unmet.
    #[error("school assignment required")]
    SchoolAssignmentMissing,
}

/// How the caller should proceed for a (principal, route) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Render the protected content.
    Allow,
    /// Navigate elsewhere (e.g. to login).
    Redirect { target: String },
    /// Show the dedicated deactivated-account view.
    Deactivated,
    /// Show a denial view with the given reason.
    Deny { reason: DenialReason },
}

impl AccessDecision {
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Redirect {
            target: target.into(),
        }
    }

    pub fn deny(reason: DenialReason) -> Self {
        Self::Deny { reason }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Result of one gate evaluation.
///
/// `Pending` is the transient in-flight state, not a decision: the caller
/// suspends rendering and waits for the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GateOutcome {
    Pending,
    Decided(AccessDecision),
}

impl GateOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn decision(&self) -> Option<&AccessDecision> {
        match self {
            Self::Pending => None,
            Self::Decided(decision) => Some(decision),
        }
    }
}
