//! Role and permission request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, models::PermissionSet};

/// Create role request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = 1024))]
    pub description: Option<String>,
}

/// Update role request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = 1024))]
    pub description: Option<String>,
}

/// Bits for one feature
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct FeaturePermissionRequest {
    #[validate(length(min = 1))]
    pub feature: String,

    #[serde(default)]
    pub can_create: bool,

    #[serde(default)]
    pub can_read: bool,

    #[serde(default)]
    pub can_update: bool,

    #[serde(default)]
    pub can_delete: bool,
}

impl FeaturePermissionRequest {
    pub fn bits(&self) -> PermissionSet {
        PermissionSet {
            can_create: self.can_create,
            can_read: self.can_read,
            can_update: self.can_update,
            can_delete: self.can_delete,
        }
    }
}

/// Update role permissions request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePermissionsRequest {
    #[validate(length(min = 1), nested)]
    pub permissions: Vec<FeaturePermissionRequest>,
}

/// List roles query parameters
#[derive(Debug, Deserialize)]
pub struct ListRolesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}
