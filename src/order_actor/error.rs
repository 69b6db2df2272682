//! Error types for the Order actor.

use crate::model::{OrderStatus, ProductId};
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A line item names a product that does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The user specified in the order is invalid or does not exist.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// There is insufficient stock to fulfill the order.
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The order's current status does not allow the requested change.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Translates a failure reported by the Product actor while handling `product`.
    pub fn from_product(product: ProductId, e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => OrderError::ProductNotFound(product.to_string()),
            ProductError::InsufficientStock {
                requested,
                available,
            } => OrderError::InsufficientStock {
                product: product.to_string(),
                requested,
                available,
            },
            ProductError::InvalidQuantity(quantity) => {
                OrderError::ValidationError(format!("invalid quantity {} for {}", quantity, product))
            }
            ProductError::ValidationError(msg) | ProductError::UnknownVendor(msg) => {
                OrderError::ValidationError(msg)
            }
            ProductError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}
