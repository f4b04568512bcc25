//! Account management commands.

use boles_core::UserRole;

use super::configured_db;

/// Change a user's role.
pub async fn promote(clerk_id: &str, role: &str) -> Result<(), Box<dyn std::error::Error>> {
    let role: UserRole = role.parse()?;
    let db = configured_db()?;

    let user = db
        .update_user_role(clerk_id, role)
        .await?
        .ok_or_else(|| format!("no user with clerk_id {clerk_id}"))?;

    tracing::info!(clerk_id, email = %user.email, role = %role, "Role updated");
    Ok(())
}
