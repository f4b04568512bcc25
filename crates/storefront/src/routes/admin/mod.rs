//! Admin routes. Every handler requires the admin role.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/api/admin/products` | [`products::index`] |
//! | POST | `/api/admin/products` | [`products::create`] |
//! | PUT | `/api/admin/products/{id}` | [`products::update`] |
//! | DELETE | `/api/admin/products/{id}` | [`products::remove`] |
//! | GET | `/api/admin/orders` | [`orders::index`] |
//! | PATCH | `/api/admin/orders/{id}/status` | [`orders::update_status`] |
//! | GET | `/api/admin/users` | [`users::index`] |
//! | PATCH | `/api/admin/users/{clerk_id}/role` | [`users::update_role`] |

pub mod orders;
pub mod products;
pub mod users;

use axum::Router;
use axum::routing::{get, patch};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            axum::routing::put(products::update).delete(products::remove),
        )
        .route("/orders", get(orders::index))
        .route("/orders/{id}/status", patch(orders::update_status))
        .route("/users", get(users::index))
        .route("/users/{clerk_id}/role", patch(users::update_role))
}
