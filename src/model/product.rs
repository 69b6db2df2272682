//! Represents a product a vendor offers for sale.
//!
//! # Actor Framework
//! The entity implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See the `ActorEntity` impl on [`Product`] for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))

use crate::model::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub vendor_id: UserId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Units on hand. `None` means the product's inventory is not tracked.
    pub stock: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for publishing a product. The vendor is always the authenticated caller.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub vendor_id: UserId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: Option<u32>,
}

/// Fields a vendor may change. `None` leaves a field as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}

/// Filter for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub vendor_id: Option<UserId>,
}
