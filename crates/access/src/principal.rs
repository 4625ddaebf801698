//! Principal snapshot consumed by the gate.

use serde::{Deserialize, Serialize};

use edufam_core::{PrincipalId, SchoolId};

use crate::Role;

/// Account status reported by the authentication service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account can authenticate and transact.
    #[default]
    Active,
    /// Account is administratively disabled.
    Inactive,
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// The authenticated actor's identity and attributes.
///
/// Owned by the external authentication service; the gate only reads it.
/// `role` and `school_id` are optional because freshly provisioned accounts
/// may not have either configured yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<SchoolId>,

    #[serde(default)]
    pub status: AccountStatus,
}

impl Principal {
    pub fn new(id: PrincipalId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            role: None,
            school_id: None,
            status: AccountStatus::Active,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_school(mut self, school_id: SchoolId) -> Self {
        self.school_id = Some(school_id);
        self
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
