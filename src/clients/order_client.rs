//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Checkout orchestration (customer check, pricing, stock reservation) happens in
//! the actor itself; this client only ships requests and types the replies.
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order. Nothing is stored unless every line could be priced and reserved.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("create_order called");
        info!(lines = params.items.len(), "Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Cancels a pending order and returns it in its cancelled state.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Cancel)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Cancel(order) => Ok(order),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
