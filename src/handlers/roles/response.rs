//! Role and permission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Permission, Role};

/// Role response
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            company_id: role.company_id,
            name: role.name,
            description: role.description,
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

/// Permission bits of a role on one feature
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    pub feature: String,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl From<Permission> for PermissionResponse {
    fn from(permission: Permission) -> Self {
        Self {
            feature: permission.feature,
            can_create: permission.can_create,
            can_read: permission.can_read,
            can_update: permission.can_update,
            can_delete: permission.can_delete,
        }
    }
}

/// Role with its permission table
#[derive(Debug, Serialize)]
pub struct RoleDetailResponse {
    #[serde(flatten)]
    pub role: RoleResponse,
    pub permissions: Vec<PermissionResponse>,
}

/// Features a permission can be granted on
#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub features: Vec<&'static str>,
}
