//! Identity bridge to the hosted auth provider (Clerk).
//!
//! The storefront never verifies tokens itself; a fronting proxy does that
//! and forwards verified claims as `x-clerk-*` headers. This module turns
//! those claims into a local user row, creating one lazily on first sight.

use boles_core::{User, UserId, UserRole};

use crate::db::{Db, DbError};

/// Verified identity claims forwarded by the auth proxy.
#[derive(Debug, Clone)]
pub struct IdentityClaims {
    pub clerk_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// Resolve claims to a local user, creating the row on first sight.
///
/// # Errors
///
/// Returns `DbError` when the table API request fails.
pub async fn sync_user(db: &Db, claims: &IdentityClaims) -> Result<User, DbError> {
    if let Some(user) = db.get_user_by_clerk_id(&claims.clerk_id).await? {
        return Ok(user);
    }

    // Mock mode can't look the row back up later, so the ID must be
    // derivable from the claims for repeated requests to agree.
    let id = if db.is_configured() {
        UserId::generate()
    } else {
        UserId::new(format!("usr_{}", claims.clerk_id))
    };

    let now = chrono::Utc::now();
    let user = User {
        id,
        clerk_id: claims.clerk_id.clone(),
        email: claims.email.clone(),
        first_name: claims.first_name.clone(),
        last_name: claims.last_name.clone(),
        role: claims.role,
        created_at: now,
        updated_at: now,
    };
    tracing::info!(clerk_id = %claims.clerk_id, "Creating local user for new identity");
    db.create_user(&user).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sync_user_creates_lazily_in_mock_mode() {
        let db = Db::new(None);
        let claims = IdentityClaims {
            clerk_id: "user_abc".to_owned(),
            email: "ada@example.com".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Obi".to_owned(),
            role: UserRole::User,
        };

        let user = sync_user(&db, &claims).await.expect("mock mode never fails");
        assert_eq!(user.clerk_id, "user_abc");
        assert_eq!(user.email, "ada@example.com");
        assert!(user.id.as_str().starts_with("usr_"));
        assert!(!user.is_admin());

        // Repeated syncs in mock mode resolve to the same local ID
        let again = sync_user(&db, &claims).await.expect("mock mode never fails");
        assert_eq!(again.id, user.id);
    }
}
