//! Identity provider webhooks.
//!
//! Clerk delivers lifecycle events (`user.created`, `user.updated`,
//! `user.deleted`) that keep the local `users` table in sync. Payload
//! signatures are verified by the fronting proxy before the request
//! reaches this service.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use boles_core::UserRole;

use crate::error::Result;
use crate::services::auth::{IdentityClaims, sync_user};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClerkEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ClerkUserData,
}

#[derive(Debug, Deserialize)]
pub struct ClerkUserData {
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<ClerkEmail>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub public_metadata: ClerkMetadata,
}

#[derive(Debug, Deserialize)]
pub struct ClerkEmail {
    pub email_address: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClerkMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

impl ClerkUserData {
    fn primary_email(&self) -> String {
        self.email_addresses
            .first()
            .map(|e| e.email_address.clone())
            .unwrap_or_default()
    }

    fn role(&self) -> UserRole {
        self.public_metadata
            .role
            .as_deref()
            .and_then(|r| r.parse().ok())
            .unwrap_or_default()
    }
}

/// `POST /api/webhooks/clerk` — process an identity lifecycle event.
pub async fn clerk(
    State(state): State<AppState>,
    Json(event): Json<ClerkEvent>,
) -> Result<StatusCode> {
    match event.kind.as_str() {
        "user.created" => {
            let claims = IdentityClaims {
                clerk_id: event.data.id.clone(),
                email: event.data.primary_email(),
                first_name: event.data.first_name.clone().unwrap_or_default(),
                last_name: event.data.last_name.clone().unwrap_or_default(),
                role: event.data.role(),
            };
            let user = sync_user(state.db(), &claims).await?;
            if let Err(error) = state.email().send_welcome(&user).await {
                tracing::warn!(%error, clerk_id = %event.data.id, "Welcome email failed");
            }
            tracing::info!(clerk_id = %event.data.id, "User created from webhook");
        }
        "user.updated" => {
            state
                .db()
                .update_user_profile(
                    &event.data.id,
                    &event.data.primary_email(),
                    event.data.first_name.as_deref().unwrap_or_default(),
                    event.data.last_name.as_deref().unwrap_or_default(),
                )
                .await?;
            state
                .db()
                .update_user_role(&event.data.id, event.data.role())
                .await?;
            tracing::info!(clerk_id = %event.data.id, "User updated from webhook");
        }
        "user.deleted" => {
            state.db().delete_user(&event.data.id).await?;
            tracing::info!(clerk_id = %event.data.id, "User deleted from webhook");
        }
        other => {
            tracing::debug!(kind = other, "Ignoring unhandled webhook event");
        }
    }
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload_parses() {
        let event: ClerkEvent = serde_json::from_str(
            r#"{
                "type": "user.created",
                "data": {
                    "id": "user_abc",
                    "email_addresses": [{"email_address": "ada@example.com"}],
                    "first_name": "Ada",
                    "last_name": "Obi",
                    "public_metadata": {"role": "admin"}
                }
            }"#,
        )
        .expect("payload parses");
        assert_eq!(event.kind, "user.created");
        assert_eq!(event.data.primary_email(), "ada@example.com");
        assert_eq!(event.data.role(), UserRole::Admin);
    }

    #[test]
    fn test_sparse_payload_defaults() {
        let event: ClerkEvent = serde_json::from_str(
            r#"{"type": "user.deleted", "data": {"id": "user_abc"}}"#,
        )
        .expect("payload parses");
        assert!(event.data.primary_email().is_empty());
        assert_eq!(event.data.role(), UserRole::User);
    }
}
