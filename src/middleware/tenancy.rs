//! Tenancy guards
//!
//! Run at the top of every handler under `/companies/{company_id}` before
//! the body is read or the database is touched. The scope extractors below
//! are request-parts extractors, so axum resolves them ahead of any JSON
//! body extractor.

use axum::{
    extract::{FromRequestParts, RawPathParams},
    http::request::Parts,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    extract::path_uuid,
};

use super::auth::AuthenticatedUser;

/// Caller authorized to act inside the `{company_id}` of the path
#[derive(Debug, Clone)]
pub struct CompanyScope {
    pub user: AuthenticatedUser,
    pub company_id: Uuid,
}

impl<S> FromRequestParts<S> for CompanyScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidInput(e.body_text()))?;
        let company_id = path_uuid(&params, "company_id")?;

        check_employee_belonging(&user, company_id)?;
        Ok(Self { user, company_id })
    }
}

/// Any caller of the company addressing `{user_id}`; handlers decide
/// between self access and a permission
#[derive(Debug, Clone)]
pub struct EmployeeScope {
    pub user: AuthenticatedUser,
    pub company_id: Uuid,
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for EmployeeScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CompanyScope { user, company_id } =
            CompanyScope::from_request_parts(parts, state).await?;
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidInput(e.body_text()))?;
        let user_id = path_uuid(&params, "user_id")?;

        Ok(Self {
            user,
            company_id,
            user_id,
        })
    }
}

/// The caller acting on their own `{user_id}`
#[derive(Debug, Clone)]
pub struct SessionScope {
    pub user: AuthenticatedUser,
    pub company_id: Uuid,
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for SessionScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidInput(e.body_text()))?;
        let company_id = path_uuid(&params, "company_id")?;
        let user_id = path_uuid(&params, "user_id")?;

        check_employee_session(&user, company_id, user_id)?;
        Ok(Self {
            user,
            company_id,
            user_id,
        })
    }
}

/// The caller must be an employee of `company_id`, or a root user
pub fn check_employee_belonging(user: &AuthenticatedUser, company_id: Uuid) -> AppResult<()> {
    if user.is_root || user.company_id == company_id {
        return Ok(());
    }

    tracing::debug!(
        user_id = %user.id,
        session_company = %user.company_id,
        requested_company = %company_id,
        "Tenancy check failed: company mismatch"
    );
    Err(AppError::forbidden("You do not belong to this company"))
}

/// The caller must be `user_id` itself, employed by `company_id`.
///
/// Root users pass the company check but not the user check.
pub fn check_employee_session(
    user: &AuthenticatedUser,
    company_id: Uuid,
    user_id: Uuid,
) -> AppResult<()> {
    check_employee_belonging(user, company_id)?;

    if user.id != user_id {
        tracing::debug!(
            user_id = %user.id,
            requested_user = %user_id,
            "Session check failed: user mismatch"
        );
        return Err(AppError::forbidden("This resource belongs to another user"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(company_id: Uuid, is_root: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            company_id,
            email: "employee@example.com".to_string(),
            is_root,
        }
    }

    #[test]
    fn test_belonging_same_company() {
        let company = Uuid::new_v4();
        assert!(check_employee_belonging(&session(company, false), company).is_ok());
    }

    #[test]
    fn test_belonging_other_company_forbidden() {
        let user = session(Uuid::new_v4(), false);
        let err = check_employee_belonging(&user, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_root_belongs_everywhere() {
        let user = session(Uuid::new_v4(), true);
        assert!(check_employee_belonging(&user, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_session_requires_same_user() {
        let company = Uuid::new_v4();
        let user = session(company, false);

        assert!(check_employee_session(&user, company, user.id).is_ok());
        assert!(check_employee_session(&user, company, Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_session_checks_company_first() {
        let user = session(Uuid::new_v4(), false);
        assert!(check_employee_session(&user, Uuid::new_v4(), user.id).is_err());
    }

    #[test]
    fn test_root_does_not_bypass_user_match() {
        let user = session(Uuid::new_v4(), true);
        let company = Uuid::new_v4();

        assert!(check_employee_session(&user, company, user.id).is_ok());
        assert!(check_employee_session(&user, company, Uuid::new_v4()).is_err());
    }
}
