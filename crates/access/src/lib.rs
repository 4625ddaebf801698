//! `edufam-access` — pure role-based access control boundary.
//!
//! This crate decides, for an authenticated principal and a requested route,
//! whether to render content, redirect, or deny. It is intentionally
//! decoupled from HTTP, rendering, and storage: the gate is a pure function
//! over snapshots, and the reactive subscription lives in a thin adapter.

pub mod decision;
pub mod gate;
pub mod guard;
pub mod principal;
pub mod registry;
pub mod requirement;
pub mod roles;
pub mod session;

pub use decision::{AccessDecision, DenialReason, GateOutcome, LOGIN_ROUTE};
pub use gate::{AccessExplanation, evaluate, explain};
pub use guard::{DecisionTrace, RouteGuard};
pub use principal::{AccountStatus, Principal};
pub use registry::RouteRequirementRegistry;
pub use requirement::RouteRequirement;
pub use roles::{Role, RoleCatalog, RoleDefinition};
pub use session::{AuthError, AuthErrorCode, AuthSnapshot};
