//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => other
                .downcast_entity::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a product. `None` means untracked.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<Option<u32>, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Reserve a specific amount of stock for a product.
    ///
    /// Returns `Ok(())` if successful, or [`ProductError::InsufficientStock`] if not.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<(), ProductError> {
        debug!("Reserving {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::ReserveStock(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Return previously reserved stock.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: ProductId, quantity: u32) -> Result<(), ProductError> {
        debug!("Releasing {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::ReleaseStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::ReleaseStock(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task = tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);

        responder
            .send(Ok(ProductActionResult::CheckStock(Some(42))))
            .unwrap();

        assert_eq!(check_task.await.unwrap(), Ok(Some(42)));
    }

    #[tokio::test]
    async fn test_reserve_stock_success() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let reserve_task =
            tokio::spawn(async move { product_client.reserve_stock(ProductId(1), 5).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::ReserveStock(5));

        responder
            .send(Ok(ProductActionResult::ReserveStock(())))
            .unwrap();

        assert!(reserve_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_reserve_stock_insufficient_stock() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let reserve_task =
            tokio::spawn(async move { product_client.reserve_stock(ProductId(1), 100).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, ProductAction::ReserveStock(100));

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::InsufficientStock {
                    requested: 100,
                    available: 3,
                },
            ))))
            .unwrap();

        assert_eq!(
            reserve_task.await.unwrap(),
            Err(ProductError::InsufficientStock {
                requested: 100,
                available: 3
            })
        );
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error_not_a_panic() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let release_task =
            tokio::spawn(async move { product_client.release_stock(ProductId(2), 1).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Ok(ProductActionResult::CheckStock(None)))
            .unwrap();

        assert!(matches!(
            release_task.await.unwrap(),
            Err(ProductError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.check_stock(ProductId(9)).await });

        let (id, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::NotFound("product_9".into()))
        );
    }
}
