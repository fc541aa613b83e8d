//! Bearer-token authentication for the protected router

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    error::AppError,
    services::{AuthService, auth_service::Claims},
    state::AppState,
};

/// Session decoded from the JWT, stored in request extensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub company_id: Uuid,
    pub email: String,
    /// Member of the root company
    pub is_root: bool,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;
        Ok(Self {
            id,
            company_id: claims.company_id,
            email: claims.email,
            is_root: claims.root,
        })
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        debug!(path = %request.uri().path(), "Auth failed: missing or malformed bearer token");
        return Err(AppError::Unauthorized);
    };

    let user = AuthService::verify_token(token, state.keys())
        .and_then(AuthenticatedUser::try_from)
        .inspect_err(|e| debug!(path = %request.uri().path(), error = %e, "Auth failed"))?;

    debug!(user_id = %user.id, company_id = %user.company_id, root = user.is_root, "User authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
