//! Permission model
//!
//! Every role holds one row per feature with four CRUD bits. A user's
//! effective permission on a feature is the OR of the bits across all of
//! their roles.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::features;

/// Permission row of one role on one feature
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Permission {
    pub id: Uuid,
    pub role_id: Uuid,
    pub feature: String,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

/// CRUD action checked against a permission set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four CRUD bits, merged across roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PermissionSet {
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl PermissionSet {
    /// Every bit set
    pub const FULL: Self = Self {
        can_create: true,
        can_read: true,
        can_update: true,
        can_delete: true,
    };

    /// No bit set
    pub const NONE: Self = Self {
        can_create: false,
        can_read: false,
        can_update: false,
        can_delete: false,
    };

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Create => self.can_create,
            Action::Read => self.can_read,
            Action::Update => self.can_update,
            Action::Delete => self.can_delete,
        }
    }

    /// Bitwise OR with another role's bits
    pub fn merge(self, other: Self) -> Self {
        Self {
            can_create: self.can_create || other.can_create,
            can_read: self.can_read || other.can_read,
            can_update: self.can_update || other.can_update,
            can_delete: self.can_delete || other.can_delete,
        }
    }
}

impl From<&Permission> for PermissionSet {
    fn from(permission: &Permission) -> Self {
        Self {
            can_create: permission.can_create,
            can_read: permission.can_read,
            can_update: permission.can_update,
            can_delete: permission.can_delete,
        }
    }
}

/// Effective permission of a user on a single feature
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeaturePermission {
    pub feature: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub permissions: PermissionSet,
}

/// Fill in features a user has no row for, keeping the canonical feature order
pub fn complete_feature_permissions(rows: Vec<FeaturePermission>) -> Vec<FeaturePermission> {
    features::ALL
        .iter()
        .map(|feature| {
            let permissions = rows
                .iter()
                .filter(|row| row.feature == *feature)
                .fold(PermissionSet::NONE, |acc, row| acc.merge(row.permissions));
            FeaturePermission {
                feature: (*feature).to_string(),
                permissions,
            }
        })
        .collect()
}

pub fn is_known_feature(feature: &str) -> bool {
    features::ALL.contains(&feature)
}
