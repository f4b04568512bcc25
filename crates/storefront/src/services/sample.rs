//! Sample data generators for demo accounts.
//!
//! Used by the CLI `seed demo` command to give a fresh account a plausible
//! order history and wallet ledger. Generators take the RNG as a parameter
//! so tests can drive them with a seeded one.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use boles_core::{
    Address, Order, OrderId, OrderItem, OrderStatus, OrderTotals, PaymentMethod, Product,
    TransactionId, TransactionStatus, TransactionType, UserId, Wallet, WalletTransaction,
    order::shipping_fee,
    wallet::reference_code,
};

const PAYMENT_METHODS: [PaymentMethod; 5] = [
    PaymentMethod::Wallet,
    PaymentMethod::Card,
    PaymentMethod::Paypal,
    PaymentMethod::ApplePay,
    PaymentMethod::GooglePay,
];

fn sample_address() -> Address {
    Address {
        full_name: "Demo Customer".to_owned(),
        line1: "14 Adeola Odeku Street".to_owned(),
        line2: None,
        city: "Lagos".to_owned(),
        state: "Lagos".to_owned(),
        postal_code: "101241".to_owned(),
        country: "Nigeria".to_owned(),
        phone: Some("+234 800 000 0000".to_owned()),
    }
}

/// Generate `count` plausible historical orders, newest first.
pub fn mock_orders<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: &UserId,
    catalog: &[Product],
    count: usize,
) -> Vec<Order> {
    let mut orders: Vec<Order> = (0..count)
        .map(|_| mock_order(rng, user_id, catalog))
        .collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

fn mock_order<R: Rng + ?Sized>(rng: &mut R, user_id: &UserId, catalog: &[Product]) -> Order {
    let line_count = rng.random_range(1..=3.min(catalog.len().max(1)));
    let items: Vec<OrderItem> = catalog
        .choose_multiple(rng, line_count)
        .map(|product| {
            let quantity = rng.random_range(1..=3_u32);
            OrderItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                quantity,
                unit_price: product.price,
                line_total: product.price * Decimal::from(quantity),
            }
        })
        .collect();

    let subtotal: Decimal = items.iter().map(|i| i.line_total).sum();
    let discount = if rng.random_bool(0.25) {
        (subtotal * Decimal::new(10, 2)).round_dp(2)
    } else {
        Decimal::ZERO
    };
    let totals = OrderTotals::compute(subtotal, shipping_fee(subtotal), discount);

    let status = *OrderStatus::ALL.choose(rng).unwrap_or(&OrderStatus::Pending);
    let created_at = Utc::now()
        - Duration::days(rng.random_range(1..180))
        - Duration::hours(rng.random_range(0..24));

    // Shipment details only exist once a label has been issued
    let (tracking_number, estimated_delivery) = if status.has_shipment() {
        (
            Some(format!("TRK-{}", rng.random_range(100_000_000..1_000_000_000_u64))),
            Some(created_at + Duration::days(rng.random_range(3..10))),
        )
    } else {
        (None, None)
    };

    let address = sample_address();
    Order {
        id: OrderId::generate(),
        user_id: user_id.clone(),
        items,
        status,
        totals,
        shipping_address: address.clone(),
        billing_address: address,
        payment_method: *PAYMENT_METHODS.choose(rng).unwrap_or(&PaymentMethod::Card),
        created_at,
        updated_at: created_at,
        tracking_number,
        estimated_delivery,
        notes: None,
    }
}

/// Generate `count` plausible ledger entries spread over the past 90 days.
pub fn mock_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: &UserId,
    count: usize,
) -> Vec<WalletTransaction> {
    const KINDS: [TransactionType; 4] = [
        TransactionType::Deposit,
        TransactionType::Withdrawal,
        TransactionType::Purchase,
        TransactionType::Refund,
    ];

    (0..count)
        .map(|i| {
            // First entry is always a large deposit so the ledger stays funded
            let kind = if i == 0 {
                TransactionType::Deposit
            } else {
                *KINDS.choose(rng).unwrap_or(&TransactionType::Deposit)
            };

            let magnitude = Decimal::new(rng.random_range(1_000..50_000), 2);
            let (amount, description, order_id) = match kind {
                TransactionType::Deposit => (magnitude, "Wallet top-up".to_owned(), None),
                TransactionType::Withdrawal => {
                    (-magnitude, "Wallet withdrawal".to_owned(), None)
                }
                TransactionType::Purchase => {
                    let order_id = OrderId::generate();
                    (-magnitude, format!("Payment for order {order_id}"), Some(order_id))
                }
                TransactionType::Refund => {
                    let order_id = OrderId::generate();
                    (magnitude, format!("Refund for order {order_id}"), Some(order_id))
                }
            };

            let status = if rng.random_bool(0.85) {
                TransactionStatus::Completed
            } else if rng.random_bool(0.5) {
                TransactionStatus::Pending
            } else {
                TransactionStatus::Failed
            };

            WalletTransaction {
                id: TransactionId::generate(),
                user_id: user_id.clone(),
                amount,
                kind,
                status,
                description,
                created_at: Utc::now()
                    - Duration::days(rng.random_range(0..90))
                    - Duration::minutes(rng.random_range(0..1_440)),
                reference: reference_code(),
                order_id,
            }
        })
        .collect()
}

/// Generate a funded demo wallet with a consistent ledger.
pub fn mock_wallet<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: &UserId,
    transaction_count: usize,
) -> Wallet {
    let transactions = mock_transactions(rng, user_id, transaction_count);
    Wallet::from_transactions(user_id.clone(), transactions)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog;

    #[test]
    fn test_mock_orders_are_plausible() {
        let mut rng = StdRng::seed_from_u64(7);
        let user_id = UserId::generate();
        let orders = mock_orders(&mut rng, &user_id, &catalog::demo_products(), 20);
        assert_eq!(orders.len(), 20);

        for order in &orders {
            assert_eq!(order.user_id, user_id);
            assert!(!order.items.is_empty() && order.items.len() <= 3);
            assert_eq!(
                order.totals.total,
                order.totals.subtotal + order.totals.tax + order.totals.shipping
                    - order.totals.discount
            );
            assert!(order.created_at <= Utc::now());
            if order.status.has_shipment() {
                assert!(order.tracking_number.is_some());
                assert!(order.estimated_delivery.is_some());
            } else {
                assert!(order.tracking_number.is_none());
            }
        }

        // newest first
        for pair in orders.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_mock_order_lines_are_distinct_products() {
        let mut rng = StdRng::seed_from_u64(11);
        let orders = mock_orders(&mut rng, &UserId::generate(), &catalog::demo_products(), 30);
        for order in &orders {
            let mut ids: Vec<_> = order.items.iter().map(|i| i.product_id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), order.items.len());
        }
    }

    #[test]
    fn test_mock_transactions_signed_by_kind() {
        let mut rng = StdRng::seed_from_u64(42);
        let transactions = mock_transactions(&mut rng, &UserId::generate(), 50);
        assert_eq!(transactions.len(), 50);
        assert_eq!(transactions[0].kind, TransactionType::Deposit);

        for tx in &transactions {
            match tx.kind {
                TransactionType::Deposit | TransactionType::Refund => {
                    assert!(tx.amount > Decimal::ZERO);
                }
                TransactionType::Withdrawal | TransactionType::Purchase => {
                    assert!(tx.amount < Decimal::ZERO);
                    assert!(
                        tx.kind == TransactionType::Withdrawal || tx.order_id.is_some()
                    );
                }
            }
            assert!(tx.reference.starts_with("TXN-"));
        }
    }

    #[test]
    fn test_mock_wallet_ledger_is_consistent() {
        let mut rng = StdRng::seed_from_u64(3);
        let user_id = UserId::generate();
        let wallet = mock_wallet(&mut rng, &user_id, 25);

        assert_eq!(wallet.user_id, user_id);
        assert_eq!(wallet.transactions.len(), 25);
        assert!(wallet.balance_consistent());
        assert_eq!(wallet.balance, wallet.ledger_sum());
        for pair in wallet.transactions.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
