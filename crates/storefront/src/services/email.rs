//! Transactional email via the Resend HTTP API.
//!
//! Bodies are rendered from Askama templates under `templates/email/`.
//! When no API key is configured, sends are simulated: the message is
//! logged and reported as successful so business flows never block on
//! notification delivery in development.

use askama::Template;
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;

use boles_core::{Order, OrderStatus, User};

use crate::config::ResendConfig;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Errors from email rendering or dispatch.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Template)]
#[template(path = "email/welcome.html")]
struct WelcomeTemplate<'a> {
    first_name: &'a str,
}

struct EmailLineItem {
    name: String,
    quantity: u32,
    line_total: String,
}

#[derive(Template)]
#[template(path = "email/order_confirmation.html")]
struct OrderConfirmationTemplate<'a> {
    order_id: &'a str,
    items: Vec<EmailLineItem>,
    subtotal: String,
    tax: String,
    shipping: String,
    discount: String,
    total: String,
}

#[derive(Template)]
#[template(path = "email/order_status.html")]
struct OrderStatusTemplate<'a> {
    order_id: &'a str,
    status: String,
}

#[derive(Template)]
#[template(path = "email/role_change.html")]
struct RoleChangeTemplate<'a> {
    first_name: &'a str,
    role: String,
}

fn usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Transactional email service.
#[derive(Debug, Clone, Default)]
pub struct EmailService {
    resend: Option<ResendClient>,
}

#[derive(Debug, Clone)]
struct ResendClient {
    client: reqwest::Client,
    config: ResendConfig,
}

impl EmailService {
    /// Create the service; `None` selects simulated delivery.
    #[must_use]
    pub fn new(config: Option<ResendConfig>) -> Self {
        if config.is_none() {
            tracing::warn!("Email API not configured; deliveries will be simulated");
        }
        Self {
            resend: config.map(|config| ResendClient {
                client: reqwest::Client::new(),
                config,
            }),
        }
    }

    /// Whether a real email backend is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.resend.is_some()
    }

    /// Welcome a newly registered user.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` on render or dispatch failure.
    pub async fn send_welcome(&self, user: &User) -> Result<(), EmailError> {
        let html = WelcomeTemplate {
            first_name: &user.display_name(),
        }
        .render()?;
        self.dispatch(&user.email, "Welcome to BOLES Smart Home", &html)
            .await
    }

    /// Confirm a placed order with an itemised receipt.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` on render or dispatch failure.
    pub async fn send_order_confirmation(
        &self,
        user: &User,
        order: &Order,
    ) -> Result<(), EmailError> {
        let html = OrderConfirmationTemplate {
            order_id: order.id.as_str(),
            items: order
                .items
                .iter()
                .map(|item| EmailLineItem {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    line_total: usd(item.line_total),
                })
                .collect(),
            subtotal: usd(order.totals.subtotal),
            tax: usd(order.totals.tax),
            shipping: usd(order.totals.shipping),
            discount: usd(order.totals.discount),
            total: usd(order.totals.total),
        }
        .render()?;
        let subject = format!("Order confirmation — {}", order.id.as_str());
        self.dispatch(&user.email, &subject, &html).await
    }

    /// Notify a customer that their order moved to a new status.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` on render or dispatch failure.
    pub async fn send_order_status(
        &self,
        user: &User,
        order: &Order,
        status: OrderStatus,
    ) -> Result<(), EmailError> {
        let html = OrderStatusTemplate {
            order_id: order.id.as_str(),
            status: status.to_string(),
        }
        .render()?;
        let subject = format!("Your order {} is now {status}", order.id.as_str());
        self.dispatch(&user.email, &subject, &html).await
    }

    /// Notify a user that their account role changed.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` on render or dispatch failure.
    pub async fn send_role_change(&self, user: &User) -> Result<(), EmailError> {
        let html = RoleChangeTemplate {
            first_name: &user.display_name(),
            role: user.role.to_string(),
        }
        .render()?;
        self.dispatch(&user.email, "Your BOLES account was updated", &html)
            .await
    }

    async fn dispatch(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError> {
        let Some(resend) = &self.resend else {
            tracing::info!(to, subject, "Email delivery simulated (no API key)");
            return Ok(());
        };

        let response = resend
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(resend.config.api_key.expose_secret())
            .json(&SendRequest {
                from: &resend.config.from_address,
                to: [to],
                subject,
                html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                message,
            });
        }
        tracing::info!(to, subject, "Email dispatched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use boles_core::{Address, PaymentMethod, ShoppingCart, UserId};

    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::generate(),
            clerk_id: "user_abc".to_owned(),
            email: "ada@example.com".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Obi".to_owned(),
            role: boles_core::UserRole::User,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn sample_order(user_id: UserId) -> Order {
        let mut cart = ShoppingCart::new();
        cart.add(crate::catalog::demo_products().remove(0), 2);
        let shipping = Address {
            full_name: "Ada Obi".to_owned(),
            line1: "12 Marina Rd".to_owned(),
            line2: None,
            city: "Lagos".to_owned(),
            state: "Lagos".to_owned(),
            postal_code: "100001".to_owned(),
            country: "NG".to_owned(),
            phone: None,
        };
        Order::from_cart(
            user_id,
            &cart,
            shipping.clone(),
            shipping,
            PaymentMethod::Wallet,
            None,
        )
    }

    #[tokio::test]
    async fn test_simulated_delivery_succeeds() {
        let service = EmailService::new(None);
        assert!(!service.is_configured());

        let user = sample_user();
        service.send_welcome(&user).await.expect("simulated send");

        let order = sample_order(user.id.clone());
        service
            .send_order_confirmation(&user, &order)
            .await
            .expect("simulated send");
        service
            .send_order_status(&user, &order, OrderStatus::Shipped)
            .await
            .expect("simulated send");
    }

    #[test]
    fn test_templates_render() {
        let html = WelcomeTemplate { first_name: "Ada" }
            .render()
            .expect("template renders");
        assert!(html.contains("Ada"));

        let order = sample_order(UserId::generate());
        let html = OrderConfirmationTemplate {
            order_id: order.id.as_str(),
            items: vec![EmailLineItem {
                name: "Hub".to_owned(),
                quantity: 2,
                line_total: usd(Decimal::new(59_800, 2)),
            }],
            subtotal: usd(order.totals.subtotal),
            tax: usd(order.totals.tax),
            shipping: usd(order.totals.shipping),
            discount: usd(order.totals.discount),
            total: usd(order.totals.total),
        }
        .render()
        .expect("template renders");
        assert!(html.contains(order.id.as_str()));
        assert!(html.contains("$598.00"));
    }

    #[test]
    fn test_usd_formatting() {
        assert_eq!(usd(Decimal::new(2_499, 2)), "$24.99");
        assert_eq!(usd(Decimal::new(100, 0)), "$100.00");
    }
}
