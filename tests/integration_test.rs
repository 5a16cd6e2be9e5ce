use async_trait::async_trait;
use food_ordering::catalog::Catalog;
use food_ordering::gateway::{GatewayError, OrderGateway};
use food_ordering::lifecycle::{CheckoutOutcome, OrderingSystem, SystemConfig};
use food_ordering::model::{CartLine, FoodItem, OrderStatus};
use food_ordering::order_store::OrderError;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use store_framework::StoreHandle;

fn fast_config() -> SystemConfig {
    SystemConfig {
        submit_delay_ms: 5,
        ..SystemConfig::default()
    }
}

fn item(id: &str) -> FoodItem {
    Catalog::standard()
        .find_item(&id.into())
        .cloned()
        .expect("item in catalog")
}

/// Fails every submission until switched back on.
#[derive(Default)]
struct SwitchableGateway {
    failing: AtomicBool,
}

#[async_trait]
impl OrderGateway for SwitchableGateway {
    async fn submit(&self, _lines: &[CartLine]) -> Result<(), GatewayError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(GatewayError::Unavailable("kitchen offline".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Full end-to-end test with both real stores and the simulated gateway.
#[tokio::test]
async fn test_full_checkout_flow() {
    let system = OrderingSystem::with_config(fast_config());

    system.cart_client.add_item(item("food-1")).await.unwrap();
    system.cart_client.add_item(item("food-1")).await.unwrap();
    system.cart_client.add_item(item("food-2")).await.unwrap();

    assert_eq!(system.cart_client.item_count().await.unwrap(), 3);
    assert_eq!(
        system.cart_client.total().await.unwrap(),
        Decimal::new(3097, 2)
    );

    let order = match system.checkout().await.unwrap() {
        CheckoutOutcome::Submitted(order) => order,
        other => panic!("Expected Submitted, got {:?}", other),
    };
    assert_eq!(order.total, Decimal::new(3097, 2));
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.item_count(), 3);

    assert!(system.cart_client.is_empty().await.unwrap());
    assert_eq!(system.cart_client.total().await.unwrap(), Decimal::ZERO);

    let orders = system.order_client.orders().await.unwrap();
    assert_eq!(orders, vec![order.clone()]);
    assert_eq!(
        system.order_client.find_by_id(&order.id).await.unwrap(),
        Some(order)
    );
    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Idle
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_checkout_is_skipped() {
    let system = OrderingSystem::with_config(fast_config());
    let mut order_updates = system.order_client.subscribe();

    assert_eq!(system.checkout().await.unwrap(), CheckoutOutcome::Skipped);

    assert_eq!(system.order_client.orders_count().await.unwrap(), 0);
    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Idle
    );
    assert!(system.cart_client.is_empty().await.unwrap());
    // Not even a status transition was published.
    assert!(!order_updates.has_changed().unwrap());
    assert_eq!(order_updates.borrow_and_update().status(), OrderStatus::Idle);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_submission_keeps_cart_and_retry_succeeds() {
    let gateway = Arc::new(SwitchableGateway::default());
    gateway.failing.store(true, Ordering::SeqCst);
    let system = OrderingSystem::with_gateway(fast_config(), gateway.clone());

    system.cart_client.add_item(item("dessert-1")).await.unwrap();
    system
        .cart_client
        .set_quantity("dessert-1".into(), 2)
        .await
        .unwrap();

    assert_eq!(system.checkout().await.unwrap(), CheckoutOutcome::Failed);
    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Failed
    );
    assert_eq!(system.order_client.orders_count().await.unwrap(), 0);
    assert_eq!(system.cart_client.item_count().await.unwrap(), 2);
    assert_eq!(
        system.cart_client.total().await.unwrap(),
        Decimal::new(1198, 2)
    );

    gateway.failing.store(false, Ordering::SeqCst);

    let order = match system.checkout().await.unwrap() {
        CheckoutOutcome::Submitted(order) => order,
        other => panic!("Expected Submitted on retry, got {:?}", other),
    };
    assert_eq!(order.total, Decimal::new(1198, 2));
    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Idle
    );
    assert_eq!(system.order_client.orders_count().await.unwrap(), 1);
    assert!(system.cart_client.is_empty().await.unwrap());

    system.shutdown().await.unwrap();
}

/// A caller that gives up on a submission does not leave the store stuck in `Submitting`.
#[tokio::test]
async fn test_abandoned_submission_still_resolves() {
    let system = OrderingSystem::with_config(SystemConfig {
        submit_delay_ms: 200,
        ..SystemConfig::default()
    });
    let lines = vec![CartLine::with_quantity(item("food-2"), 2)];

    let abandoned = tokio::time::timeout(
        Duration::from_millis(20),
        system.order_client.submit_order(lines.clone()),
    )
    .await;
    assert!(abandoned.is_err(), "submission should still be in flight");
    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Submitting
    );

    let mut updates = system.order_client.subscribe();
    tokio::time::timeout(
        Duration::from_secs(5),
        updates.wait_for(|history| history.status() != OrderStatus::Submitting),
    )
    .await
    .expect("submission resolved")
    .unwrap();

    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Idle
    );
    assert_eq!(system.order_client.orders_count().await.unwrap(), 1);

    let retried = system.order_client.submit_order(lines).await.unwrap();
    assert_eq!(retried.total, Decimal::new(2598, 2));
    assert_eq!(system.order_client.orders_count().await.unwrap(), 2);

    drop(updates);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_clear_history_keeps_status() {
    let system = OrderingSystem::with_config(fast_config());

    system
        .order_client
        .add_order(vec![CartLine::with_quantity(item("drink-1"), 2)])
        .await
        .unwrap();
    system
        .order_client
        .add_order(vec![CartLine::new(item("drink-3"))])
        .await
        .unwrap();
    assert_eq!(
        system.order_client.total_spent().await.unwrap(),
        Decimal::new(1100, 2)
    );

    assert_eq!(system.order_client.clear_history().await.unwrap(), 2);
    assert_eq!(system.order_client.orders_count().await.unwrap(), 0);
    assert_eq!(
        system.order_client.total_spent().await.unwrap(),
        Decimal::ZERO
    );
    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Idle
    );

    // Clearing an empty history is fine too.
    assert_eq!(system.order_client.clear_history().await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_order_is_rejected_by_store() {
    let system = OrderingSystem::with_config(fast_config());

    assert_eq!(
        system.order_client.add_order(vec![]).await,
        Err(OrderError::EmptyOrder)
    );
    assert_eq!(
        system.order_client.submit_order(vec![]).await,
        Err(OrderError::EmptyOrder)
    );
    assert_eq!(
        system.order_client.status().await.unwrap(),
        OrderStatus::Idle
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_editing() {
    let system = OrderingSystem::with_config(fast_config());
    let cart = &system.cart_client;

    cart.add_item(item("food-3")).await.unwrap();
    cart.add_item(item("drink-2")).await.unwrap();

    assert_eq!(cart.set_quantity("food-3".into(), 4).await.unwrap(), Some(4));
    assert_eq!(cart.set_quantity("drink-9".into(), 4).await.unwrap(), None);
    assert_eq!(cart.set_quantity("drink-2".into(), 0).await.unwrap(), None);
    assert!(!cart.remove_item("drink-2".into()).await.unwrap());

    let lines = cart.lines().await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 4);
    assert_eq!(cart.total().await.unwrap(), Decimal::new(3000, 2));

    // Invalid text input is ignored and the current quantity comes back.
    assert_eq!(
        cart.apply_quantity_input("food-3".into(), "lots").await.unwrap(),
        Some(4)
    );
    assert_eq!(
        cart.apply_quantity_input("food-3".into(), "2").await.unwrap(),
        Some(2)
    );
    assert_eq!(cart.item_count().await.unwrap(), 2);

    assert_eq!(cart.clear().await.unwrap(), 1);
    assert!(cart.is_empty().await.unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_subscribers_follow_changes() {
    let system = OrderingSystem::with_config(fast_config());
    let mut updates = system.cart_client.subscribe();
    assert!(updates.borrow_and_update().is_empty());

    system.cart_client.add_item(item("food-2")).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().item_count(), 1);

    system.cart_client.clear().await.unwrap();
    updates.changed().await.unwrap();
    assert!(updates.borrow_and_update().is_empty());

    drop(updates);
    system.shutdown().await.unwrap();
}
