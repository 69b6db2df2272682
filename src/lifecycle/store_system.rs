use crate::api::StoreApi;
use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::config::StoreConfig;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Failure while stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the storefront.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the three resource actors
/// - **Dependency Wiring**: Product needs Users; Order needs Users and Products
///
/// # Example
///
/// ```rust
/// use storefront::lifecycle::StoreSystem;
/// use storefront::model::UserCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = StoreSystem::new();
///     system
///         .user_client
///         .create_user(UserCreate {
///             username: "alice".into(),
///             email: "alice@example.com".into(),
///             ..Default::default()
///         })
///         .await?;
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct StoreSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreSystem {
    /// Starts every actor with the default mailbox size. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Starts every actor and wires their dependencies.
    pub fn with_config(config: &StoreConfig) -> Self {
        let capacity = config.mailbox_capacity.max(1);

        // 1. Create actors (no dependencies yet)
        let (user_actor, user_client) = crate::user_actor::new(capacity);
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(user_client.clone()));
        let order_handle =
            tokio::spawn(order_actor.run((user_client.clone(), product_client.clone())));

        info!(mailbox_capacity = capacity, "Store system started");

        Self {
            user_client,
            product_client,
            order_client,
            handles: vec![order_handle, product_handle, user_handle],
        }
    }

    /// The request/response layer bound to this system's stores.
    ///
    /// The returned value holds client clones: drop it before calling
    /// [`shutdown`](Self::shutdown), or the actors it talks to keep running.
    pub fn api(&self) -> StoreApi {
        StoreApi::new(
            self.user_client.clone(),
            self.product_client.clone(),
            self.order_client.clone(),
        )
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' mailboxes. The Order actor stops first
    /// and releases the clients it held, then Product, then User.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
