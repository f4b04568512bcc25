//! Authentication extractors.
//!
//! Token verification happens upstream: a fronting proxy validates the
//! Clerk session and forwards the verified claims as `x-clerk-*` headers.
//! These extractors read the claims, resolve them to a local user row
//! (creating one lazily), and enforce role requirements.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};

use boles_core::{User, UserRole};

use crate::error::AppError;
use crate::services::auth::{IdentityClaims, sync_user};
use crate::state::AppState;

const USER_ID_HEADER: &str = "x-clerk-user-id";
const EMAIL_HEADER: &str = "x-clerk-user-email";
const FIRST_NAME_HEADER: &str = "x-clerk-user-first-name";
const LAST_NAME_HEADER: &str = "x-clerk-user-last-name";
const ROLE_HEADER: &str = "x-clerk-user-role";

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

fn claims_from_headers(headers: &HeaderMap) -> Option<IdentityClaims> {
    let clerk_id = header_str(headers, USER_ID_HEADER)?;
    let role = header_str(headers, ROLE_HEADER)
        .and_then(|r| r.parse::<UserRole>().ok())
        .unwrap_or_default();
    Some(IdentityClaims {
        clerk_id,
        email: header_str(headers, EMAIL_HEADER).unwrap_or_default(),
        first_name: header_str(headers, FIRST_NAME_HEADER).unwrap_or_default(),
        last_name: header_str(headers, LAST_NAME_HEADER).unwrap_or_default(),
        role,
    })
}

/// Extractor for the authenticated user. Rejects with 401 when no verified
/// identity headers are present.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(claims) = claims_from_headers(&parts.headers) else {
            return Err(AppError::Unauthorized("authentication required".to_owned()));
        };
        let user = sync_user(state.db(), &claims).await?;
        Ok(Self(user))
    }
}

/// Extractor for admin-only routes. Rejects with 401 when unauthenticated
/// and 403 when the user is not an admin.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::Forbidden("admin role required".to_owned()));
        }
        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(
                axum::http::HeaderName::try_from(*name).expect("valid name"),
                HeaderValue::from_str(value).expect("valid value"),
            );
        }
        headers
    }

    #[test]
    fn test_claims_require_user_id() {
        assert!(claims_from_headers(&headers(&[])).is_none());
        assert!(
            claims_from_headers(&headers(&[(EMAIL_HEADER, "a@b.com")])).is_none()
        );
    }

    #[test]
    fn test_claims_default_role_and_optional_fields() {
        let claims = claims_from_headers(&headers(&[(USER_ID_HEADER, "user_abc")]))
            .expect("claims parsed");
        assert_eq!(claims.clerk_id, "user_abc");
        assert_eq!(claims.role, UserRole::User);
        assert!(claims.email.is_empty());
    }

    #[test]
    fn test_claims_parse_admin_role() {
        let claims = claims_from_headers(&headers(&[
            (USER_ID_HEADER, "user_abc"),
            (EMAIL_HEADER, "ada@example.com"),
            (ROLE_HEADER, "admin"),
        ]))
        .expect("claims parsed");
        assert_eq!(claims.role, UserRole::Admin);

        // Unknown roles fall back to the default rather than erroring
        let claims = claims_from_headers(&headers(&[
            (USER_ID_HEADER, "user_abc"),
            (ROLE_HEADER, "superuser"),
        ]))
        .expect("claims parsed");
        assert_eq!(claims.role, UserRole::User);
    }
}
