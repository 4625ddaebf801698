//! Role tags and the role catalog.
//!
//! Roles are opaque strings at this layer; capabilities (such as exemption
//! from the school-assignment requirement) live on the catalog definition,
//! not in gate control flow.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use edufam_core::{DomainError, DomainResult};

/// Role identifier used for route gating.
///
/// Matching is exact-string and case-sensitive. A tag outside the platform
/// set is representable but carries no capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const SCHOOL_DIRECTOR: Role = Role(Cow::Borrowed("school_director"));
    pub const PRINCIPAL: Role = Role(Cow::Borrowed("principal"));
    pub const TEACHER: Role = Role(Cow::Borrowed("teacher"));
    pub const PARENT: Role = Role(Cow::Borrowed("parent"));
    pub const FINANCE_OFFICER: Role = Role(Cow::Borrowed("finance_officer"));
    pub const EDUFAM_ADMIN: Role = Role(Cow::Borrowed("edufam_admin"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry for a single role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub name: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether principals holding this role may enter school-scoped routes
    /// without a school assignment.
    #[serde(default)]
    pub exempt_from_school_requirement: bool,
}

impl RoleDefinition {
    pub fn new(name: Role) -> Self {
        Self {
            name,
            description: None,
            exempt_from_school_requirement: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn exempt_from_school_requirement(mut self) -> Self {
        self.exempt_from_school_requirement = true;
        self
    }
}

/// Registry of role definitions and their capabilities.
///
/// The gate consults this instead of comparing role strings inline, so that
/// policy changes (e.g. granting another role the school exemption) are
/// configuration, not code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleCatalog {
    #[serde(default)]
    definitions: HashMap<String, RoleDefinition>,
}

impl RoleCatalog {
    /// Catalog with no definitions. Every role carries no capabilities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in platform role set.
    ///
    /// Only `edufam_admin` is exempt from the school-assignment requirement.
    pub fn platform() -> Self {
        let mut catalog = Self::empty();
        catalog.define(
            RoleDefinition::new(Role::SCHOOL_DIRECTOR)
                .with_description("School owner with full school-level access"),
        );
        catalog.define(
            RoleDefinition::new(Role::PRINCIPAL)
                .with_description("Head of school operations and academics"),
        );
        catalog.define(
            RoleDefinition::new(Role::TEACHER)
                .with_description("Classroom staff with gradebook access"),
        );
        catalog.define(
            RoleDefinition::new(Role::PARENT)
                .with_description("Guardian with read access to their students"),
        );
        catalog.define(
            RoleDefinition::new(Role::FINANCE_OFFICER)
                .with_description("Fees and billing management"),
        );
        catalog.define(
            RoleDefinition::new(Role::EDUFAM_ADMIN)
                .with_description("Platform administrator across all schools")
                .exempt_from_school_requirement(),
        );
        catalog
    }

    /// Load a catalog from a JSON document (array of definitions).
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let definitions: Vec<RoleDefinition> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("role catalog: {e}")))?;
        let mut catalog = Self::empty();
        for def in definitions {
            catalog.define(def);
        }
        Ok(catalog)
    }

    /// Insert or replace a definition.
    pub fn define(&mut self, definition: RoleDefinition) {
        self.definitions
            .insert(definition.name.as_str().to_string(), definition);
    }

    pub fn get(&self, role: &Role) -> Option<&RoleDefinition> {
        self.definitions.get(role.as_str())
    }

    /// Whether the role may enter school-scoped routes without an assignment.
    ///
    /// Unknown roles are never exempt.
    pub fn is_exempt_from_school_requirement(&self, role: &Role) -> bool {
        self.get(role)
            .map(|def| def.exempt_from_school_requirement)
            .unwrap_or(false)
    }
}
