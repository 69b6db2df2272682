//! Request bodies and query parameters accepted by the handlers.

use super::ApiError;
use crate::model::{LineRequest, OrderStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Body of a product creation. The vendor is never taken from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<u32>,
}

/// Body of an order creation: `{"items": [{"product_id": 1, "quantity": 2}], "notes": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<LineRequest>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Optional filters on the order list. Dates are RFC 3339 and both bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListParams {
    pub status: Option<OrderStatus>,
    pub min_total: Option<Decimal>,
    pub max_total: Option<Decimal>,
    #[serde(default, alias = "startDate")]
    pub created_from: Option<DateTime<Utc>>,
    #[serde(default, alias = "endDate")]
    pub created_to: Option<DateTime<Utc>>,
}

/// Decodes a JSON request body; malformed input is a 400.
pub fn parse_body<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(raw)?)
}
