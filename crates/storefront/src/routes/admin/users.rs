//! Admin user management.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use boles_core::{User, UserRole};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoleUpdateRequest {
    pub role: UserRole,
}

/// `GET /api/admin/users` — all users, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<Vec<User>>> {
    Ok(Json(state.db().get_users().await?))
}

/// `PATCH /api/admin/users/{clerk_id}/role` — change a user's role.
///
/// The user is notified by email; delivery failure doesn't fail the
/// update.
pub async fn update_role(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(clerk_id): Path<String>,
    Json(request): Json<RoleUpdateRequest>,
) -> Result<Json<User>> {
    let user = state
        .db()
        .update_user_role(&clerk_id, request.role)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {clerk_id}")))?;

    if let Err(error) = state.email().send_role_change(&user).await {
        tracing::warn!(%error, clerk_id, "Role change email failed");
    }

    tracing::info!(clerk_id, role = %request.role, "User role updated");
    Ok(Json(user))
}
