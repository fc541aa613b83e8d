//! Permission checks
//!
//! Root sessions pass every check. Everyone else needs the bit on the
//! feature in at least one of their roles.

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::{
    db::repositories::PermissionRepository,
    error::{AppError, AppResult},
    middleware::AuthenticatedUser,
    models::Action,
};

pub struct PermissionService;

impl PermissionService {
    /// Whether the session may perform `action` on `feature`
    pub async fn allows(
        pool: &PgPool,
        session: &AuthenticatedUser,
        feature: &str,
        action: Action,
    ) -> AppResult<bool> {
        if session.is_root {
            return Ok(true);
        }

        let set = PermissionRepository::effective_for_feature(pool, &session.id, feature).await?;
        Ok(set.allows(action))
    }

    /// Fail with 403 unless the session may perform `action` on `feature`
    pub async fn require(
        pool: &PgPool,
        session: &AuthenticatedUser,
        feature: &str,
        action: Action,
    ) -> AppResult<()> {
        if Self::allows(pool, session, feature, action).await? {
            return Ok(());
        }

        debug!(
            user_id = %session.id,
            feature = feature,
            action = %action,
            "Permission denied"
        );
        Err(AppError::Forbidden(format!(
            "Missing '{}' permission on '{}'",
            action, feature
        )))
    }

    /// Pass when the session is `user_id` itself, otherwise require the permission
    pub async fn require_self_or(
        pool: &PgPool,
        session: &AuthenticatedUser,
        user_id: &Uuid,
        feature: &str,
        action: Action,
    ) -> AppResult<()> {
        if session.id == *user_id {
            return Ok(());
        }
        Self::require(pool, session, feature, action).await
    }

    /// Only members of the root company may continue
    pub fn require_root(session: &AuthenticatedUser) -> AppResult<()> {
        if session.is_root {
            return Ok(());
        }
        Err(AppError::Forbidden(
            "Only root users can manage companies".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_root() {
        let mut session = AuthenticatedUser {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            email: "root@example.com".to_string(),
            is_root: true,
        };
        assert!(PermissionService::require_root(&session).is_ok());

        session.is_root = false;
        assert!(matches!(
            PermissionService::require_root(&session),
            Err(AppError::Forbidden(_))
        ));
    }
}
