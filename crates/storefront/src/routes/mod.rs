//! HTTP API routes.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | liveness probe |
//! | GET | `/api/products` | [`products::index`] |
//! | GET | `/api/products/{id}` | [`products::show`] |
//! | POST | `/api/cart` | [`cart::create`] |
//! | GET | `/api/cart/{cart_id}` | [`cart::show`] |
//! | POST | `/api/cart/{cart_id}/items` | [`cart::add_item`] |
//! | PATCH | `/api/cart/{cart_id}/items/{product_id}` | [`cart::update_item`] |
//! | DELETE | `/api/cart/{cart_id}/items/{product_id}` | [`cart::remove_item`] |
//! | DELETE | `/api/cart/{cart_id}` | [`cart::clear`] |
//! | POST | `/api/cart/{cart_id}/toggle` | [`cart::toggle`] |
//! | POST | `/api/checkout` | [`checkout::create`] |
//! | GET | `/api/wallet` | [`wallet::show`] |
//! | POST | `/api/wallet/top-up` | [`wallet::top_up`] |
//! | POST | `/api/wallet/withdraw` | [`wallet::withdraw`] |
//! | GET | `/api/wallet/transactions` | [`wallet::transactions`] |
//! | GET | `/api/wishlist` | [`wishlist::index`] |
//! | POST | `/api/wishlist` | [`wishlist::add`] |
//! | DELETE | `/api/wishlist/{product_id}` | [`wishlist::remove`] |
//! | GET | `/api/account/profile` | [`account::profile`] |
//! | GET | `/api/account/orders` | [`account::orders`] |
//! | POST | `/api/webhooks/clerk` | [`webhooks::clerk`] |
//! | * | `/api/admin/...` | [`admin`] (admin role required) |

pub mod account;
pub mod admin;
pub mod cart;
pub mod checkout;
pub mod products;
pub mod wallet;
pub mod webhooks;
pub mod wishlist;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// All `/api` routes.
pub fn routes() -> Router<AppState> {
    let products = Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show));

    let cart = Router::new()
        .route("/", post(cart::create))
        .route("/{cart_id}", get(cart::show).delete(cart::clear))
        .route("/{cart_id}/items", post(cart::add_item))
        .route(
            "/{cart_id}/items/{product_id}",
            delete(cart::remove_item).patch(cart::update_item),
        )
        .route("/{cart_id}/toggle", post(cart::toggle));

    let wallet = Router::new()
        .route("/", get(wallet::show))
        .route("/top-up", post(wallet::top_up))
        .route("/withdraw", post(wallet::withdraw))
        .route("/transactions", get(wallet::transactions));

    let wishlist = Router::new()
        .route("/", get(wishlist::index).post(wishlist::add))
        .route("/{product_id}", delete(wishlist::remove));

    let account = Router::new()
        .route("/profile", get(account::profile))
        .route("/orders", get(account::orders));

    Router::new()
        .nest("/products", products)
        .nest("/cart", cart)
        .route("/checkout", post(checkout::create))
        .nest("/wallet", wallet)
        .nest("/wishlist", wishlist)
        .nest("/account", account)
        .nest("/admin", admin::routes())
        .route("/webhooks/clerk", post(webhooks::clerk))
}

/// The complete application router with middleware applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
