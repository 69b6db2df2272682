//! Represents a customer order and the line items it was placed with.
//!
//! # Actor Framework
//! The entity implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See the `ActorEntity` impl on [`Order`] for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Update parameters ([`OrderUpdate`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))

use crate::model::{Product, ProductId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle of an order. New orders start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Cancelled and refunded orders never change status again.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Refunded)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        };
        f.write_str(name)
    }
}

/// One line of an order. `price` is the product's unit price times `quantity`,
/// frozen when the order was placed; `product` is the product as it was then.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    /// Line number within the order, starting at 1. Item ids repeat across orders;
    /// the pair (order id, item id) names a line.
    pub id: u32,
    pub product: Product,
    pub quantity: u32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Whether the user placed this order.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Sum of the item prices. Equals `total` for every order built by the store.
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// A requested line: which product and how many. Both numbers are kept signed
/// so that out-of-range ids reach the product lookup and zero or negative
/// quantities reach validation instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LineRequest {
    pub product_id: i64,
    pub quantity: i64,
}

impl LineRequest {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id: i64::from(product_id.0),
            quantity,
        }
    }

    /// The requested product, or `None` when the id cannot name any product.
    pub fn product(&self) -> Option<ProductId> {
        u32::try_from(self.product_id).ok().map(ProductId)
    }
}

/// Payload for placing an order on behalf of `user_id`.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<LineRequest>,
    pub notes: Option<String>,
}

/// Staff-side changes to an order. Items are never editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub notes: Option<String>,
}

/// Filter for listing orders. Every set field must hold.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub user_id: Option<UserId>,
    pub status: Option<OrderStatus>,
    pub min_total: Option<Decimal>,
    pub max_total: Option<Decimal>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<DateTime<Utc>>,
    pub order_number: Option<String>,
}
