//! [`ActorEntity`] implementation for [`Product`].
//!
//! Creation looks the vendor up through the injected [`UserClient`]; stock is
//! reserved and released through [`ProductAction`]s. A product created without a
//! stock level is untracked: every reservation succeeds and nothing is counted.

use super::{ProductAction, ProductActionResult, ProductError};
use crate::clients::UserClient;
use crate::model::{money, Product, ProductCreate, ProductId, ProductQuery, ProductUpdate};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::ValidationError("name may not be blank".into()));
    }
    Ok(())
}

/// Prices are non-negative and carry at most two decimal places; anything finer
/// is refused rather than rounded.
fn validate_price(price: Decimal) -> Result<(), ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::ValidationError(format!(
            "price must be non-negative, got {}",
            price
        )));
    }
    if price.normalize().scale() > 2 {
        return Err(ProductError::ValidationError(format!(
            "price may have at most two decimal places, got {}",
            price
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Query = ProductQuery;
    type Context = UserClient;
    type Error = ProductError;

    /// Creates a new Product after checking its fields and its vendor.
    async fn from_create_params(
        id: ProductId,
        params: ProductCreate,
        users: &UserClient,
    ) -> Result<Self, ProductError> {
        validate_name(&params.name)?;
        validate_price(params.price)?;

        match users.get(params.vendor_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ProductError::UnknownVendor(params.vendor_id.to_string())),
            Err(e) => return Err(ProductError::ActorCommunicationError(e.to_string())),
        }

        let now = Utc::now();
        Ok(Self {
            id,
            vendor_id: params.vendor_id,
            name: params.name.trim().to_string(),
            description: params.description,
            price: money(params.price),
            stock: params.stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`, `description`: catalogue text
    /// - `price`: unit price for future orders (existing orders keep their snapshot)
    /// - `stock`: sets the level and starts tracking if the product was untracked
    async fn on_update(&mut self, update: ProductUpdate, _users: &UserClient) -> Result<(), ProductError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = money(price);
        }
        if let Some(stock) = update.stock {
            self.stock = Some(stock);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: returns the current level
    /// - `ReserveStock`: decrements stock if enough is available
    /// - `ReleaseStock`: increments stock
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _users: &UserClient,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ReserveStock(0) | ProductAction::ReleaseStock(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::ReserveStock(quantity) => {
                if let Some(available) = self.stock {
                    if available < quantity {
                        return Err(ProductError::InsufficientStock {
                            requested: quantity,
                            available,
                        });
                    }
                    self.stock = Some(available - quantity);
                }
                Ok(ProductActionResult::ReserveStock(()))
            }
            ProductAction::ReleaseStock(quantity) => {
                if let Some(available) = self.stock {
                    self.stock = Some(available.saturating_add(quantity));
                }
                Ok(ProductActionResult::ReleaseStock(()))
            }
        }
    }

    fn matches(&self, query: &ProductQuery) -> bool {
        query.vendor_id.map_or(true, |vendor| vendor == self.vendor_id)
    }
}
