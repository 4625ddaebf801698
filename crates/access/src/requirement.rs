//! Declared access constraints for a navigable destination.

use serde::{Deserialize, Serialize};

use crate::Role;

/// A route's declared constraints.
///
/// An empty `allowed_roles` list means any authenticated, role-bearing
/// principal may pass. Requirements are statically associated with routes
/// and immutable once declared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteRequirement {
    #[serde(default)]
    pub allowed_roles: Vec<Role>,

    #[serde(default)]
    pub requires_school_assignment: bool,
}

impl RouteRequirement {
    /// Any authenticated principal with a configured role may enter.
    pub fn any_authenticated() -> Self {
        Self::default()
    }

    /// Restrict the route to the given roles.
    pub fn for_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: roles.into_iter().collect(),
            requires_school_assignment: false,
        }
    }

    /// Additionally require a school assignment on the principal.
    pub fn with_school_assignment(mut self) -> Self {
        self.requires_school_assignment = true;
        self
    }

    /// Whether the role list permits the given role.
    ///
    /// Exact-string, case-sensitive matching; an empty list permits any role.
    pub fn permits_role(&self, role: &Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_role_list_permits_any_role() {
        let requirement = RouteRequirement::any_authenticated();
        assert!(requirement.permits_role(&Role::PARENT));
        assert!(requirement.permits_role(&Role::new("made_up_role")));
    }

    #[test]
    fn role_list_is_exact_and_case_sensitive() {
        let requirement = RouteRequirement::for_roles([Role::TEACHER, Role::PRINCIPAL]);

        assert!(requirement.permits_role(&Role::TEACHER));
        assert!(!requirement.permits_role(&Role::PARENT));
        assert!(!requirement.permits_role(&Role::new("Teacher")));
    }

    #[test]
    fn deserializes_with_defaults() {
        let requirement: RouteRequirement = serde_json::from_str("{}").unwrap();
        assert!(requirement.allowed_roles.is_empty());
        assert!(!requirement.requires_school_assignment);
    }
}
