//! Reactive route guard: the thin impure shell around the pure gate.
//!
//! The guard owns the subscription concerns the gate must not know about:
//! it caches the latest auth snapshot and the current route, re-evaluates on
//! either changing, and keeps a bounded trail of recent decisions for
//! debugging. A later invocation simply supersedes the previous outcome; no
//! cancellation, locks, or I/O are involved.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{AuthSnapshot, GateOutcome, RoleCatalog, RouteRequirementRegistry, evaluate};

/// How many recent decisions the guard retains.
const TRAIL_CAPACITY: usize = 32;

/// One recorded evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionTrace {
    pub route: String,
    pub outcome: GateOutcome,
    pub observed_at: DateTime<Utc>,
}

/// Stateful adapter between the authentication service and the pure gate.
pub struct RouteGuard {
    registry: RouteRequirementRegistry,
    catalog: RoleCatalog,
    route: String,
    snapshot: AuthSnapshot,
    trail: VecDeque<DecisionTrace>,
}

impl RouteGuard {
    /// Guard starting at the root route, with authentication in flight until
    /// the first snapshot is observed.
    pub fn new(registry: RouteRequirementRegistry, catalog: RoleCatalog) -> Self {
        Self {
            registry,
            catalog,
            route: "/".to_string(),
            snapshot: AuthSnapshot::loading(),
            trail: VecDeque::new(),
        }
    }

    pub fn current_route(&self) -> &str {
        &self.route
    }

    /// Re-evaluate for a newly requested route against the last snapshot.
    pub fn navigate(&mut self, path: impl Into<String>) -> GateOutcome {
        self.route = path.into();
        self.re_evaluate()
    }

    /// Re-evaluate after the authentication service publishes a new snapshot.
    pub fn observe(&mut self, snapshot: AuthSnapshot) -> GateOutcome {
        self.snapshot = snapshot;
        self.re_evaluate()
    }

    /// Recent decisions, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = &DecisionTrace> {
        self.trail.iter()
    }

    fn re_evaluate(&mut self) -> GateOutcome {
        let requirement = self.registry.lookup(&self.route);
        let outcome = evaluate(&self.snapshot, &requirement, &self.catalog);

        tracing::debug!(route = %self.route, outcome = ?outcome, "route guard evaluated");

        if self.trail.len() == TRAIL_CAPACITY {
            self.trail.pop_front();
        }
        self.trail.push_back(DecisionTrace {
            route: self.route.clone(),
            outcome: outcome.clone(),
            observed_at: Utc::now(),
        });

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessDecision, AccountStatus, Principal, Role};
    use edufam_core::{PrincipalId, SchoolId};

    fn guard() -> RouteGuard {
        RouteGuard::new(RouteRequirementRegistry::platform(), RoleCatalog::platform())
    }

    fn teacher() -> Principal {
        Principal::new(PrincipalId::new(), "mwangi@stmarys.ac.ke")
            .with_role(Role::TEACHER)
            .with_school(SchoolId::new())
    }

    #[test]
    fn pending_until_first_snapshot_arrives() {
        let mut guard = guard();
        assert!(guard.navigate("/dashboard").is_pending());
    }

    #[test]
    fn resolves_once_snapshot_is_observed() {
        let mut guard = guard();
        guard.navigate("/gradebook");

        let outcome = guard.observe(AuthSnapshot::resolved(teacher()));
        assert_eq!(outcome, GateOutcome::Decided(AccessDecision::Allow));
    }

    #[test]
    fn navigation_re_evaluates_against_last_snapshot() {
        let mut guard = guard();
        guard.observe(AuthSnapshot::resolved(teacher()));

        assert_eq!(
            guard.navigate("/gradebook"),
            GateOutcome::Decided(AccessDecision::Allow)
        );
        // Teachers are not in the /finance allow list.
        assert!(matches!(
            guard.navigate("/finance"),
            GateOutcome::Decided(AccessDecision::Deny { .. })
        ));
    }

    #[test]
    fn later_snapshot_supersedes_earlier_decision() {
        let mut guard = guard();
        guard.navigate("/dashboard");

        let before = guard.observe(AuthSnapshot::resolved(teacher()));
        assert_eq!(before, GateOutcome::Decided(AccessDecision::Allow));

        let after = guard.observe(AuthSnapshot::resolved(
            teacher().with_status(AccountStatus::Inactive),
        ));
        assert_eq!(after, GateOutcome::Decided(AccessDecision::Deactivated));
    }

    #[test]
    fn trail_records_decisions_and_stays_bounded() {
        let mut guard = guard();
        guard.observe(AuthSnapshot::resolved(teacher()));

        for _ in 0..(TRAIL_CAPACITY * 2) {
            guard.navigate("/dashboard");
        }

        assert_eq!(guard.trail().count(), TRAIL_CAPACITY);
        assert!(guard.trail().all(|trace| trace.route == "/dashboard"));
    }
}
