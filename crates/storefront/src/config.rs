//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional — server
//! - `BOLES_HOST` - Bind address (default: 127.0.0.1)
//! - `BOLES_PORT` - Listen port (default: 3000)
//!
//! ## Optional — hosted backends
//!
//! Every hosted backend is optional. When a group is incomplete or absent
//! the corresponding service runs degraded: the table API facade returns
//! empty/mock results and email delivery is simulated.
//!
//! - `SUPABASE_URL` + `SUPABASE_SERVICE_ROLE_KEY` - table API
//! - `RESEND_API_KEY` - transactional email API
//! - `EMAIL_FROM` - sender address (default: BOLES Smart Home
//!   `<noreply@bolesenterprise.io>`)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Hosted table API configuration, when configured
    pub supabase: Option<SupabaseConfig>,
    /// Transactional email configuration, when configured
    pub resend: Option<ResendConfig>,
}

/// Hosted table API (Supabase `PostgREST`) configuration.
///
/// Implements `Debug` manually to redact the service key.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g. `https://xyzcompany.supabase.co`)
    pub url: String,
    /// Service-role API key (server-side only)
    pub service_key: SecretString,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}

/// Transactional email (Resend) configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ResendConfig {
    /// API key (server-side only)
    pub api_key: SecretString,
    /// Sender address used for all notifications
    pub from_address: String,
}

impl std::fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_key", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present variable fails to parse. Missing
    /// backend variables are not an error; they select degraded mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BOLES_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOLES_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("BOLES_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOLES_PORT".to_owned(), e.to_string()))?;

        let supabase = supabase_from_parts(
            get_optional_env("SUPABASE_URL"),
            get_optional_env("SUPABASE_SERVICE_ROLE_KEY"),
        );
        let resend = resend_from_parts(
            get_optional_env("RESEND_API_KEY"),
            get_env_or_default(
                "EMAIL_FROM",
                "BOLES Smart Home <noreply@bolesenterprise.io>",
            ),
        );

        Ok(Self {
            host,
            port,
            supabase,
            resend,
        })
    }

    /// An unconfigured config bound to localhost, for tests and demos.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            supabase: None,
            resend: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Combine the table API variables; both must be present.
fn supabase_from_parts(url: Option<String>, service_key: Option<String>) -> Option<SupabaseConfig> {
    match (url, service_key) {
        (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Some(SupabaseConfig {
            url,
            service_key: SecretString::from(key),
        }),
        _ => None,
    }
}

/// Combine the email variables; the API key gates the whole group.
fn resend_from_parts(api_key: Option<String>, from_address: String) -> Option<ResendConfig> {
    let api_key = api_key.filter(|k| !k.is_empty())?;
    Some(ResendConfig {
        api_key: SecretString::from(api_key),
        from_address,
    })
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_requires_both_parts() {
        assert!(supabase_from_parts(None, None).is_none());
        assert!(supabase_from_parts(Some("https://x.supabase.co".to_owned()), None).is_none());
        assert!(supabase_from_parts(None, Some("key".to_owned())).is_none());
        assert!(
            supabase_from_parts(
                Some("https://x.supabase.co".to_owned()),
                Some(String::new())
            )
            .is_none()
        );
        assert!(
            supabase_from_parts(
                Some("https://x.supabase.co".to_owned()),
                Some("service-key".to_owned())
            )
            .is_some()
        );
    }

    #[test]
    fn test_resend_gated_on_api_key() {
        assert!(resend_from_parts(None, "from@example.com".to_owned()).is_none());
        assert!(resend_from_parts(Some(String::new()), "from@example.com".to_owned()).is_none());
        let config =
            resend_from_parts(Some("re_123".to_owned()), "from@example.com".to_owned())
                .expect("configured");
        assert_eq!(config.from_address, "from@example.com");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = SupabaseConfig {
            url: "https://x.supabase.co".to_owned(),
            service_key: SecretString::from("super_secret_service_key"),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("https://x.supabase.co"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_service_key"));
    }

    #[test]
    fn test_unconfigured_socket_addr() {
        let config = StorefrontConfig::unconfigured();
        assert_eq!(config.socket_addr().ip().to_string(), "127.0.0.1");
        assert!(config.supabase.is_none());
        assert!(config.resend.is_none());
    }
}
