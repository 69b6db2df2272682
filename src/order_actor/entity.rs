//! [`ActorEntity`] implementation for [`Order`].
//!
//! Checkout happens entirely inside `from_create_params`, so the store only ever
//! holds fully priced orders:
//!
//! 1. the customer must exist,
//! 2. every line is priced ([`price_order`]),
//! 3. stock is reserved line by line; if one line cannot be reserved, the lines
//!    already reserved are released again and the order is not created.

use super::pricing::{price_order, PricedOrder};
use super::{OrderAction, OrderActionResult, OrderError};
use crate::clients::{ProductClient, UserClient};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderQuery, OrderStatus, OrderUpdate};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// `ORD-<last 8 digits of the creation time in ms>-<id, 4 digits>`.
fn order_number(id: OrderId, created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().rem_euclid(100_000_000);
    format!("ORD-{:08}-{:04}", millis, id.0)
}

async fn reserve_all(priced: &PricedOrder, products: &ProductClient) -> Result<(), OrderError> {
    for (index, line) in priced.lines.iter().enumerate() {
        if let Err(e) = products.reserve_stock(line.product.id, line.quantity).await {
            for taken in &priced.lines[..index] {
                if let Err(release) = products.release_stock(taken.product.id, taken.quantity).await {
                    warn!(product_id = %taken.product.id, error = %release, "Release after failed checkout failed");
                }
            }
            return Err(OrderError::from_product(line.product.id, e));
        }
    }
    Ok(())
}

impl Order {
    /// Puts back the stock every item took. Products that have since disappeared are skipped.
    async fn restock(&self, products: &ProductClient) {
        for item in &self.items {
            if let Err(e) = products.release_stock(item.product.id, item.quantity).await {
                warn!(order_id = %self.id, product_id = %item.product.id, error = %e, "Restock failed");
            }
        }
    }

    fn transition(&self, to: OrderStatus) -> Result<(), OrderError> {
        if self.status.is_terminal() && self.status != to {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type Context = (UserClient, ProductClient);
    type Error = OrderError;

    async fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        ctx: &(UserClient, ProductClient),
    ) -> Result<Self, OrderError> {
        let (users, products) = ctx;
        match users.get(params.user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(OrderError::InvalidUser(params.user_id.to_string())),
            Err(e) => return Err(OrderError::ActorCommunicationError(e.to_string())),
        }

        let priced = price_order(&params.items, products).await?;
        reserve_all(&priced, products).await?;

        let created_at = Utc::now();
        let items = priced
            .lines
            .into_iter()
            .zip(1..)
            .map(|(line, position)| OrderItem {
                id: position,
                product: line.product,
                quantity: line.quantity,
                price: line.price,
            })
            .collect();

        Ok(Self {
            id,
            order_number: order_number(id, created_at),
            user_id: params.user_id,
            items,
            total: priced.total,
            status: OrderStatus::Pending,
            notes: params.notes,
            created_at,
            updated_at: created_at,
        })
    }

    /// Applies a staff update.
    ///
    /// Cancelled and refunded orders keep their status. Moving an order to
    /// `cancelled` puts its stock back, the same as [`OrderAction::Cancel`].
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        ctx: &(UserClient, ProductClient),
    ) -> Result<(), OrderError> {
        let (_, products) = ctx;
        if let Some(status) = update.status {
            self.transition(status)?;
            if status == OrderStatus::Cancelled && self.status != OrderStatus::Cancelled {
                self.restock(products).await;
            }
            if status != self.status {
                info!(order_id = %self.id, from = %self.status, to = %status, "Status changed");
            }
            self.status = status;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `Cancel`: only while `pending`; restocks every item
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &(UserClient, ProductClient),
    ) -> Result<OrderActionResult, OrderError> {
        let (_, products) = ctx;
        match action {
            OrderAction::Cancel => {
                if self.status != OrderStatus::Pending {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: OrderStatus::Cancelled,
                    });
                }
                self.restock(products).await;
                self.status = OrderStatus::Cancelled;
                self.updated_at = Utc::now();
                Ok(OrderActionResult::Cancel(self.clone()))
            }
        }
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        query.user_id.map_or(true, |user| self.is_owned_by(user))
            && query.status.map_or(true, |status| self.status == status)
            && query.min_total.map_or(true, |min| self.total >= min)
            && query.max_total.map_or(true, |max| self.total <= max)
            && query.created_from.map_or(true, |from| self.created_at >= from)
            && query.created_to.map_or(true, |to| self.created_at <= to)
            && query
                .order_number
                .as_deref()
                .map_or(true, |number| self.order_number == number)
    }
}
