//! Static lookup from route path to its declared requirement.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use edufam_core::{DomainError, DomainResult};

use crate::{Role, RouteRequirement};

/// Route-requirement table, queried by the gate per evaluation.
///
/// Routes not present in the table fall back to the authenticated-only
/// default, matching the platform's default-permissive route policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteRequirementRegistry {
    #[serde(default)]
    routes: HashMap<String, RouteRequirement>,
}

impl RouteRequirementRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in platform route table.
    pub fn platform() -> Self {
        let mut registry = Self::empty();
        registry.declare("/dashboard", RouteRequirement::any_authenticated());
        registry.declare(
            "/admin",
            RouteRequirement::for_roles([Role::EDUFAM_ADMIN]),
        );
        registry.declare(
            "/school",
            RouteRequirement::for_roles([Role::SCHOOL_DIRECTOR, Role::PRINCIPAL])
                .with_school_assignment(),
        );
        registry.declare(
            "/gradebook",
            RouteRequirement::for_roles([Role::TEACHER, Role::PRINCIPAL])
                .with_school_assignment(),
        );
        registry.declare(
            "/finance",
            RouteRequirement::for_roles([Role::FINANCE_OFFICER, Role::SCHOOL_DIRECTOR])
                .with_school_assignment(),
        );
        registry.declare(
            "/students",
            RouteRequirement::any_authenticated().with_school_assignment(),
        );
        registry.declare(
            "/reports",
            RouteRequirement::for_roles([
                Role::SCHOOL_DIRECTOR,
                Role::PRINCIPAL,
                Role::FINANCE_OFFICER,
            ])
            .with_school_assignment(),
        );
        registry
    }

    /// Load a registry from a JSON document (object keyed by route path).
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let routes: HashMap<String, RouteRequirement> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("route registry: {e}")))?;
        Ok(Self { routes })
    }

    /// Declare (or replace) the requirement for a route.
    pub fn declare(&mut self, path: impl Into<String>, requirement: RouteRequirement) {
        self.routes.insert(path.into(), requirement);
    }

    /// The requirement governing `path`.
    ///
    /// Undeclared routes yield the authenticated-only default.
    pub fn lookup(&self, path: &str) -> RouteRequirement {
        self.routes.get(path).cloned().unwrap_or_default()
    }

    pub fn declared(&self, path: &str) -> Option<&RouteRequirement> {
        self.routes.get(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_route_returns_its_requirement() {
        let registry = RouteRequirementRegistry::platform();
        let requirement = registry.lookup("/admin");

        assert_eq!(requirement.allowed_roles, vec![Role::EDUFAM_ADMIN]);
        assert!(!requirement.requires_school_assignment);
    }

    #[test]
    fn undeclared_route_falls_back_to_authenticated_only() {
        let registry = RouteRequirementRegistry::platform();
        let requirement = registry.lookup("/settings/profile");

        assert_eq!(requirement, RouteRequirement::any_authenticated());
        assert!(registry.declared("/settings/profile").is_none());
    }

    #[test]
    fn registry_loads_from_json() {
        let json = r#"{
            "/fees": {
                "allowed_roles": ["finance_officer"],
                "requires_school_assignment": true
            },
            "/help": {}
        }"#;

        let registry = RouteRequirementRegistry::from_json(json).unwrap();

        let fees = registry.lookup("/fees");
        assert_eq!(fees.allowed_roles, vec![Role::FINANCE_OFFICER]);
        assert!(fees.requires_school_assignment);

        assert_eq!(registry.lookup("/help"), RouteRequirement::any_authenticated());
    }

    #[test]
    fn registry_rejects_malformed_json() {
        let result = RouteRequirementRegistry::from_json("[not an object]");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
