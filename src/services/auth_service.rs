//! Authentication service

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    db::repositories::{CompanyRepository, PermissionRepository, RoleRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::auth::{
        request::LoginRequest,
        response::{LoginResponse, MeResponse},
    },
    middleware::AuthenticatedUser,
    models::{Company, User, complete_feature_permissions},
    utils::verify_password,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub company_id: Uuid,
    pub email: String,
    /// Member of the root company
    pub root: bool,
    pub exp: i64,
    pub iat: i64,
}

/// Signing and verification keys, derived once from the configured secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: i64,
}

impl TokenKeys {
    pub fn new(jwt: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(jwt.secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt.secret.as_bytes()),
            expiry_hours: jwt.expiry_hours,
        }
    }
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        keys: &TokenKeys,
        payload: LoginRequest,
    ) -> AppResult<LoginResponse> {
        let user = UserRepository::find_by_email(pool, &payload.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&payload.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }

        let company = CompanyRepository::find_by_id(pool, &user.company_id)
            .await?
            .ok_or_else(|| AppError::not_found("Company"))?;

        UserRepository::update_last_login(pool, &user.id).await?;

        let (access_token, expires_in) = Self::generate_access_token(&user, &company, keys)?;

        info!(user_id = %user.id, company_id = %company.id, "User logged in");

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: user.into(),
            company: company.into(),
        })
    }

    /// The session's user with company, roles and effective permissions
    pub async fn me(pool: &PgPool, session: &AuthenticatedUser) -> AppResult<MeResponse> {
        let user = UserRepository::find_by_id(pool, &session.company_id, &session.id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let company = CompanyRepository::find_by_id(pool, &user.company_id)
            .await?
            .ok_or_else(|| AppError::not_found("Company"))?;

        let roles = RoleRepository::list_for_user(pool, &user.id).await?;
        let permissions =
            complete_feature_permissions(PermissionRepository::effective_for_user(pool, &user.id).await?);

        Ok(MeResponse {
            user: user.into(),
            company: company.into(),
            is_root: session.is_root,
            roles: roles.into_iter().map(Into::into).collect(),
            permissions,
        })
    }

    /// Decode a bearer token; expiry is enforced by the default validation
    pub fn verify_token(token: &str, keys: &TokenKeys) -> AppResult<Claims> {
        Ok(decode::<Claims>(token, &keys.decoding, &Validation::default())?.claims)
    }

    /// Generate access token
    pub fn generate_access_token(
        user: &User,
        company: &Company,
        keys: &TokenKeys,
    ) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(keys.expiry_hours);
        let expires_in = keys.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            company_id: company.id,
            email: user.email.clone(),
            root: company.is_root,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &keys.encoding)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(secret: &str, expiry_hours: i64) -> TokenKeys {
        TokenKeys::new(&JwtConfig {
            secret: secret.to_string(),
            expiry_hours,
        })
    }

    fn fixtures(is_root: bool) -> (User, Company) {
        let company = Company {
            id: Uuid::new_v4(),
            name: "Acme".to_string(),
            email: "contact@acme.test".to_string(),
            phone: None,
            address: None,
            is_root,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let user = User {
            id: Uuid::new_v4(),
            company_id: company.id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@acme.test".to_string(),
            password_hash: String::new(),
            phone: None,
            job_title: None,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        (user, company)
    }

    #[test]
    fn test_token_round_trip_carries_tenant() {
        let (user, company) = fixtures(false);
        let keys = keys("unit-test-secret", 1);
        let (token, expires_in) = AuthService::generate_access_token(&user, &company, &keys).unwrap();

        let claims = AuthService::verify_token(&token, &keys).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.company_id, company.id);
        assert!(!claims.root);
        assert_eq!(expires_in, 3600);
    }

    #[test]
    fn test_root_company_sets_root_claim() {
        let (user, company) = fixtures(true);
        let keys = keys("unit-test-secret", 1);
        let (token, _) = AuthService::generate_access_token(&user, &company, &keys).unwrap();
        assert!(AuthService::verify_token(&token, &keys).unwrap().root);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let (user, company) = fixtures(false);
        let (token, _) =
            AuthService::generate_access_token(&user, &company, &keys("unit-test-secret", 1)).unwrap();

        let err = AuthService::verify_token(&token, &keys("another-secret", 1)).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token() {
        let (user, company) = fixtures(false);
        let expired = keys("unit-test-secret", -2);
        let (token, _) = AuthService::generate_access_token(&user, &company, &expired).unwrap();

        let err = AuthService::verify_token(&token, &expired).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }
}
