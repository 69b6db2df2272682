use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use chrono::Utc;
use rust_decimal::Decimal;
use storefront::clients::{ProductClient, UserClient};
use storefront::model::{
    money, LineRequest, Order, OrderCreate, OrderQuery, OrderStatus, Product, ProductId, User,
    UserId,
};
use storefront::order_actor::OrderError;
use storefront::product_actor::{ProductActionResult, ProductError};

fn product(id: u32, price: i64) -> Product {
    Product {
        id: ProductId(id),
        vendor_id: UserId(10),
        name: format!("Product {}", id),
        description: String::new(),
        price: money(Decimal::from(price)),
        stock: Some(100),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn line(product_id: u32, quantity: i64) -> LineRequest {
    LineRequest::new(ProductId(product_id), quantity)
}

/// Real Order actor with mocked User and Product dependencies.
/// Exercises checkout inside `Order::from_create_params` in isolation.
#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut user_mock = MockClient::<User>::new();
    let mut product_mock = MockClient::<Product>::new();

    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(User::new(UserId(1), "alice", "alice@example.com")));
    product_mock
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, 25)));
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ReserveStock(()));

    let user_client = UserClient::new(user_mock.client());
    let product_client = ProductClient::new(product_mock.client());

    let (order_actor, order_client) = storefront::order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run((user_client, product_client)));

    let order_id = order_client
        .create_order(OrderCreate {
            user_id: UserId(1),
            items: vec![line(1, 3)],
            notes: Some("gift wrap".into()),
        })
        .await
        .expect("Order creation failed");

    let order: Order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.user_id, UserId(1));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 3);
    assert_eq!(order.items[0].price.to_string(), "75.00");
    assert_eq!(order.total.to_string(), "75.00");
    assert_eq!(order.notes.as_deref(), Some("gift wrap"));
    assert!(order.order_number.ends_with("-0001"));

    user_mock.verify();
    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_reservation_releases_earlier_lines() {
    let mut user_mock = MockClient::<User>::new();
    let mut product_mock = MockClient::<Product>::new();

    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(User::new(UserId(1), "alice", "alice@example.com")));
    product_mock
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, 10)));
    product_mock
        .expect_get(ProductId(2))
        .return_ok(Some(product(2, 5)));
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ReserveStock(()));
    product_mock
        .expect_action(ProductId(2))
        .return_err(FrameworkError::EntityError(Box::new(
            ProductError::InsufficientStock {
                requested: 5,
                available: 1,
            },
        )));
    // compensation for line 1
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ReleaseStock(()));

    let (order_actor, order_client) = storefront::order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run((
        UserClient::new(user_mock.client()),
        ProductClient::new(product_mock.client()),
    )));

    let err = order_client
        .create_order(OrderCreate {
            user_id: UserId(1),
            items: vec![line(1, 2), line(2, 5)],
            notes: None,
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::InsufficientStock {
            product: "product_2".into(),
            requested: 5,
            available: 1,
        }
    );
    assert!(order_client
        .list(OrderQuery::default())
        .await
        .unwrap()
        .is_empty());

    user_mock.verify();
    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_customer_is_rejected_before_pricing() {
    let mut user_mock = MockClient::<User>::new();
    let product_mock = MockClient::<Product>::new();

    user_mock.expect_get(UserId(7)).return_ok(None);

    let (order_actor, order_client) = storefront::order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run((
        UserClient::new(user_mock.client()),
        ProductClient::new(product_mock.client()),
    )));

    let err = order_client
        .create_order(OrderCreate {
            user_id: UserId(7),
            items: vec![line(1, 1)],
            notes: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::InvalidUser("user_7".into()));

    user_mock.verify();
    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}
