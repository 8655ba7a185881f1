use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::sync::Arc;

use crate::shared::auth::claims::Claims;
use crate::shared::auth::token_service::TokenService;
use crate::shared::core::primitives::{UserId, UserRole};
use crate::shared::http::api_error::ApiError;

pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";

/// Caller authenticated through a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub email: String,
    pub roles: Vec<UserRole>,
}

impl Principal {
    pub fn from_claims(claims: Claims) -> Result<Self, ApiError> {
        let user_id = UserId::parse(&claims.sub)
            .map_err(|_| ApiError::unauthorized(AUTHENTICATION_REQUIRED))?;
        let roles = claims
            .groups
            .iter()
            .filter_map(|group| group.parse::<UserRole>().ok())
            .collect();
        Ok(Self {
            user_id,
            email: claims.email,
            roles,
        })
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    pub fn require_any(&self, allowed: &[UserRole]) -> Result<(), ApiError> {
        if self.roles.is_empty() {
            return Err(ApiError::forbidden("No roles found in token"));
        }
        if allowed.is_empty() || allowed.iter().any(|role| self.has_role(*role)) {
            return Ok(());
        }
        let names = allowed
            .iter()
            .map(UserRole::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ApiError::forbidden(format!(
            "Insufficient permissions: requires role(s) {names}"
        )))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return None;
    }
    Some(token.trim())
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(parts).ok_or_else(|| ApiError::unauthorized(AUTHENTICATION_REQUIRED))?;
        let tokens = Arc::<TokenService>::from_ref(state);
        let claims = tokens.validate(token).map_err(|e| {
            let subject = TokenService::extract_user_id(token).unwrap_or_default();
            tracing::debug!(error = %e, %subject, "bearer token rejected");
            ApiError::unauthorized(AUTHENTICATION_REQUIRED)
        })?;
        Principal::from_claims(claims)
    }
}
