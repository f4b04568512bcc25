//! Seeding commands.

use rand::SeedableRng;
use rand::rngs::StdRng;

use boles_storefront::catalog;
use boles_storefront::services::sample::{mock_orders, mock_wallet};

use super::configured_db;

/// Push the built-in demo catalog to the products table.
///
/// Existing products with other IDs are left alone; re-running updates the
/// demo rows in place.
pub async fn products() -> Result<(), Box<dyn std::error::Error>> {
    let db = configured_db()?;

    let demo = catalog::demo_products();
    for product in &demo {
        match db.get_product(&product.id).await? {
            Some(_) => {
                db.update_product(product).await?;
                tracing::info!(id = %product.id, "Updated product");
            }
            None => {
                db.create_product(product).await?;
                tracing::info!(id = %product.id, "Created product");
            }
        }
    }

    tracing::info!(count = demo.len(), "Catalog seeded");
    Ok(())
}

/// Generate an order history and funded wallet for an existing user.
pub async fn demo(
    clerk_id: &str,
    order_count: usize,
    transaction_count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = configured_db()?;

    let user = db
        .get_user_by_clerk_id(clerk_id)
        .await?
        .ok_or_else(|| format!("no user with clerk_id {clerk_id}; sign in once first"))?;

    let catalog = db.get_products(None).await?;
    if catalog.is_empty() {
        return Err("products table is empty; run `boles-cli seed products` first".into());
    }

    let mut rng = StdRng::from_os_rng();

    for order in mock_orders(&mut rng, &user.id, &catalog, order_count) {
        db.create_order(&order).await?;
        tracing::info!(order_id = %order.id, status = %order.status, "Created order");
    }

    let wallet = mock_wallet(&mut rng, &user.id, transaction_count);
    db.upsert_wallet(&wallet).await?;
    tracing::info!(balance = %wallet.balance, "Wallet seeded");

    tracing::info!(
        clerk_id,
        orders = order_count,
        transactions = transaction_count,
        "Demo data seeded"
    );
    Ok(())
}
