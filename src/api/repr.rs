//! Response representations. Each struct lists exactly the fields a client sees.

use crate::model::{Order, OrderId, OrderItem, OrderStatus, Product, ProductId, User, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Public view of a user: no staff flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserSummary {
    /// Stand-in for a user that no longer exists.
    pub fn missing(id: UserId) -> Self {
        Self {
            id,
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Users by id, resolved once per response.
pub type UserDirectory = HashMap<UserId, UserSummary>;

fn lookup(users: &UserDirectory, id: UserId) -> UserSummary {
    users
        .get(&id)
        .cloned()
        .unwrap_or_else(|| UserSummary::missing(id))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRepr {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: Option<u32>,
    pub vendor: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRepr {
    pub fn new(product: &Product, users: &UserDirectory) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            vendor: lookup(users, product.vendor_id),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// A line item. `product` shows the product as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemRepr {
    /// Line number within the enclosing order, not a store-wide identifier.
    pub id: u32,
    pub product: ProductRepr,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderItemRepr {
    pub fn new(item: &OrderItem, users: &UserDirectory) -> Self {
        Self {
            id: item.id,
            product: ProductRepr::new(&item.product, users),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRepr {
    pub id: OrderId,
    pub order_number: String,
    pub user: UserSummary,
    pub items: Vec<OrderItemRepr>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderRepr {
    pub fn new(order: &Order, users: &UserDirectory) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number.clone(),
            user: lookup(users, order.user_id),
            items: order
                .items
                .iter()
                .map(|item| OrderItemRepr::new(item, users))
                .collect(),
            total: order.total,
            status: order.status,
            notes: order.notes.clone(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Every user a set of orders refers to: the customers and the vendors of their items.
pub fn users_in_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<UserId> {
    let mut ids: Vec<UserId> = orders
        .into_iter()
        .flat_map(|order| {
            std::iter::once(order.user_id).chain(order.items.iter().map(|item| item.product.vendor_id))
        })
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::money;
    use serde_json::json;

    fn vendor() -> User {
        User {
            id: UserId(1),
            username: "acme".into(),
            email: "sales@acme.test".into(),
            first_name: "Ada".into(),
            last_name: "Acme".into(),
            is_staff: true,
        }
    }

    fn product() -> Product {
        let at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Product {
            id: ProductId(3),
            vendor_id: UserId(1),
            name: "Teapot".into(),
            description: "Cast iron".into(),
            price: money(Decimal::from(20)),
            stock: Some(4),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn product_repr_shape() {
        let users: UserDirectory = [(UserId(1), UserSummary::from(&vendor()))].into();
        let value = serde_json::to_value(ProductRepr::new(&product(), &users)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Teapot",
                "description": "Cast iron",
                "price": "20.00",
                "stock": 4,
                "vendor": {
                    "id": 1,
                    "username": "acme",
                    "email": "sales@acme.test",
                    "first_name": "Ada",
                    "last_name": "Acme"
                },
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-01T10:00:00Z"
            })
        );
    }

    #[test]
    fn missing_vendor_keeps_the_id() {
        let value = serde_json::to_value(ProductRepr::new(&product(), &UserDirectory::new())).unwrap();
        assert_eq!(value["vendor"]["id"], 1);
        assert_eq!(value["vendor"]["username"], "");
    }

    #[test]
    fn order_users_are_deduplicated() {
        let at = product().created_at;
        let order = Order {
            id: OrderId(1),
            order_number: "ORD-00000001-0001".into(),
            user_id: UserId(2),
            items: vec![
                OrderItem {
                    id: 1,
                    product: product(),
                    quantity: 1,
                    price: money(Decimal::from(20)),
                },
                OrderItem {
                    id: 2,
                    product: product(),
                    quantity: 1,
                    price: money(Decimal::from(20)),
                },
            ],
            total: money(Decimal::from(40)),
            status: OrderStatus::Pending,
            notes: None,
            created_at: at,
            updated_at: at,
        };
        assert_eq!(users_in_orders([&order]), vec![UserId(1), UserId(2)]);
    }
}
