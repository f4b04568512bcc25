//! Low-level HTTP client for the hosted table API (Supabase `PostgREST`).
//!
//! Every table lives under `{project_url}/rest/v1/{table}` and is queried
//! with `column=eq.value` filter pairs. Authentication uses the service-role
//! key in both the `apikey` and `Authorization` headers.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::SupabaseConfig;

/// Errors from the table API client.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Table API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// HTTP client bound to one table API project.
#[derive(Clone)]
pub struct TableClient {
    client: reqwest::Client,
    rest_url: String,
    service_key: SecretString,
}

impl std::fmt::Debug for TableClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableClient")
            .field("rest_url", &self.rest_url)
            .field("service_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl TableClient {
    /// Create a new client for the project in `config`.
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        let rest_url = format!("{}/rest/v1", config.url.trim_end_matches('/'));
        Self {
            client: reqwest::Client::new(),
            rest_url,
            service_key: config.service_key.clone(),
        }
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        let key = self.service_key.expose_secret();
        self.client
            .request(method, format!("{}/{table}", self.rest_url))
            .header("apikey", key)
            .header("Authorization", format!("Bearer {key}"))
    }

    /// Select rows matching the given `column=eq.value` filters.
    ///
    /// `query` pairs are passed through verbatim, so callers can also add
    /// `order` or `limit` parameters.
    ///
    /// # Errors
    ///
    /// Returns `DbError` on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, DbError> {
        let response = self
            .request(reqwest::Method::GET, table)
            .query(query)
            .send()
            .await?;
        decode_body(response).await
    }

    /// Select a single row, or `None` when no row matches.
    ///
    /// Uses the `PostgREST` single-object representation; zero matching rows
    /// come back as 406 and map to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DbError` on transport failure or an unexpected status.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, DbError> {
        let response = self
            .request(reqwest::Method::GET, table)
            .query(query)
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await?;
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        decode_body(response).await.map(Some)
    }

    /// Insert a row and return the stored representation.
    ///
    /// # Errors
    ///
    /// Returns `DbError` on transport failure or a non-success status.
    pub async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, DbError> {
        let response = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(body)
            .send()
            .await?;
        decode_body(response).await
    }

    /// Insert a row, updating the existing one on `on_conflict` collision.
    ///
    /// # Errors
    ///
    /// Returns `DbError` on transport failure or a non-success status.
    pub async fn upsert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        on_conflict: &str,
        body: &B,
    ) -> Result<T, DbError> {
        let response = self
            .request(reqwest::Method::POST, table)
            .query(&[("on_conflict", on_conflict)])
            .header("Prefer", "return=representation,resolution=merge-duplicates")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(body)
            .send()
            .await?;
        decode_body(response).await
    }

    /// Update rows matching the filters, returning the updated row when one
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns `DbError` on transport failure or an unexpected status.
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<Option<T>, DbError> {
        let response = self
            .request(reqwest::Method::PATCH, table)
            .query(query)
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(body)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        decode_body(response).await.map(Some)
    }

    /// Delete rows matching the filters.
    ///
    /// # Errors
    ///
    /// Returns `DbError` on transport failure or a non-success status.
    pub async fn delete(&self, table: &str, query: &[(&str, &str)]) -> Result<(), DbError> {
        let response = self
            .request(reqwest::Method::DELETE, table)
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DbError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

/// Decode a response body, capturing the raw text for error diagnostics.
async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DbError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(DbError::Api {
            status: status.as_u16(),
            message: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_url_strips_trailing_slash() {
        let config = SupabaseConfig {
            url: "https://xyzcompany.supabase.co/".to_owned(),
            service_key: SecretString::from("key"),
        };
        let client = TableClient::new(&config);
        assert_eq!(client.rest_url, "https://xyzcompany.supabase.co/rest/v1");
    }

    #[test]
    fn test_debug_redacts_service_key() {
        let config = SupabaseConfig {
            url: "https://xyzcompany.supabase.co".to_owned(),
            service_key: SecretString::from("very_secret"),
        };
        let debug_output = format!("{:?}", TableClient::new(&config));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("very_secret"));
    }
}
