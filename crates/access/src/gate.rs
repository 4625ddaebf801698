//! The access gate: a pure classification of (snapshot, requirement).
//!
//! Evaluation is total, idempotent, and side-effect-free beyond diagnostic
//! trace events. Abnormal upstream conditions arrive as data and leave as
//! data; nothing is thrown past this boundary.

use serde::Serialize;

use crate::decision::LOGIN_ROUTE;
use crate::{
    AccessDecision, AccountStatus, AuthErrorCode, AuthSnapshot, DenialReason, GateOutcome,
    Principal, RoleCatalog, RouteRequirement,
};

/// Decide how to proceed for a principal snapshot and a route requirement.
///
/// Rules are checked in order; the first match wins:
///
/// 1. authentication still in flight — suspend (`Pending`);
/// 2. upstream auth error — deactivated view or denial, by error code;
/// 3. no principal — redirect to login;
/// 4. inactive account — deactivated view;
/// 5. no role configured — denial;
/// 6. role not in a non-empty allow list — denial;
/// 7. school assignment required, role not exempt, none present — denial;
/// 8. otherwise — allow.
pub fn evaluate(
    snapshot: &AuthSnapshot,
    requirement: &RouteRequirement,
    catalog: &RoleCatalog,
) -> GateOutcome {
    let outcome = classify(snapshot, requirement, catalog);
    match &outcome {
        GateOutcome::Pending => tracing::debug!("authentication in flight, suspending"),
        GateOutcome::Decided(decision) => tracing::debug!(?decision, "access decision reached"),
    }
    outcome
}

fn classify(
    snapshot: &AuthSnapshot,
    requirement: &RouteRequirement,
    catalog: &RoleCatalog,
) -> GateOutcome {
    if snapshot.is_pending() {
        return GateOutcome::Pending;
    }

    if let Some(error) = &snapshot.error {
        let decision = match error.code {
            AuthErrorCode::Deactivated => AccessDecision::Deactivated,
            AuthErrorCode::Failure => AccessDecision::deny(DenialReason::AuthFailure {
                detail: error.message.clone(),
            }),
        };
        return GateOutcome::Decided(decision);
    }

    let Some(principal) = &snapshot.principal else {
        return GateOutcome::Decided(AccessDecision::redirect(LOGIN_ROUTE));
    };

    if principal.status == AccountStatus::Inactive {
        return GateOutcome::Decided(AccessDecision::Deactivated);
    }

    let Some(role) = &principal.role else {
        return GateOutcome::Decided(AccessDecision::deny(DenialReason::RoleMissing));
    };

    tracing::debug!(role = %role, allowed = ?requirement.allowed_roles, "checking role");

    if !requirement.permits_role(role) {
        return GateOutcome::Decided(AccessDecision::deny(DenialReason::RoleNotPermitted {
            actual: role.clone(),
            required: requirement.allowed_roles.clone(),
        }));
    }

    if requirement.requires_school_assignment
        && !catalog.is_exempt_from_school_requirement(role)
        && principal.school_id.is_none()
    {
        return GateOutcome::Decided(AccessDecision::deny(DenialReason::SchoolAssignmentMissing));
    }

    GateOutcome::Decided(AccessDecision::Allow)
}

// ─────────────────────────────────────────────────────────────────────────────
// Decision Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Serializable record of one evaluation, for "why was this denied?" tooling.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// Whether the outcome was `Allow`.
    pub granted: bool,

    /// Whether authentication was still in flight.
    pub pending: bool,

    /// The full outcome as the gate produced it.
    pub outcome: GateOutcome,

    /// Human-readable summary of the decision.
    pub reason: String,

    /// The principal snapshot that was evaluated, if any.
    pub principal: Option<Principal>,

    /// The requirement that governed the route.
    pub requirement: RouteRequirement,
}

/// Evaluate and explain in one pass.
///
/// Same classification as [`evaluate`]; the explanation adds the inputs and
/// a readable summary so operators can audit a decision after the fact.
pub fn explain(
    snapshot: &AuthSnapshot,
    requirement: &RouteRequirement,
    catalog: &RoleCatalog,
) -> AccessExplanation {
    let outcome = evaluate(snapshot, requirement, catalog);

    let reason = match &outcome {
        GateOutcome::Pending => "authentication not yet resolved".to_string(),
        GateOutcome::Decided(AccessDecision::Allow) => match &snapshot.principal {
            Some(Principal {
                role: Some(role), ..
            }) => format!("role '{role}' satisfies the route requirement"),
            _ => "route requirement satisfied".to_string(),
        },
        GateOutcome::Decided(AccessDecision::Redirect { target }) => {
            format!("no session present, redirecting to '{target}'")
        }
        GateOutcome::Decided(AccessDecision::Deactivated) => {
            "account is deactivated".to_string()
        }
        GateOutcome::Decided(AccessDecision::Deny { reason }) => reason.to_string(),
    };

    AccessExplanation {
        granted: matches!(outcome, GateOutcome::Decided(AccessDecision::Allow)),
        pending: outcome.is_pending(),
        outcome,
        reason,
        principal: snapshot.principal.clone(),
        requirement: requirement.clone(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
