//! # Mock Clients for Testing
//!
//! Two ways to stand in for a real store:
//!
//! | Tool | Use it for |
//! |------|-----------|
//! | [`MockClient`] | Scripted replies, queued in order, with `verify()` at the end |
//! | [`create_mock_client`] + `expect_*` | Inspecting each request and answering by hand |
//!
//! `MockClient` answers from a background task. A request that does not match the
//! next queued expectation (wrong kind or wrong id) is never answered, so the caller
//! sees [`FrameworkError::ActorDropped`] and `verify()` reports the leftovers.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Item { id: u32, stock: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug)] enum ItemAction {}
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Action = ItemAction; type ActionResult = (); type Query = ();
//!     type Context = (); type Error = ItemError;
//!     async fn from_create_params(id: u32, _: ItemCreate, _: &()) -> Result<Self, ItemError> {
//!         Ok(Self { id, stock: 0 })
//!     }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), ItemError> { Ok(()) }
//!     async fn handle_action(&mut self, _: ItemAction, _: &()) -> Result<(), ItemError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Some(Item { id: 1, stock: 3 }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().stock, 3);
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted reply, consumed by the next request of the same kind and id.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push_back(expectation);
}

fn reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        reply(respond_to, response)
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        reply(respond_to, response)
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) if id == want => reply(respond_to, response),
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) if id == want => reply(respond_to, response),
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) if id == want => reply(respond_to, response),
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        reply(respond_to, response)
                    }
                    (request, expectation) => {
                        warn!(?request, expected = expectation.is_some(), "Unexpected mock request");
                        if let Some(expectation) = expectation {
                            queue
                                .lock()
                                .unwrap_or_else(|poisoned| poisoned.into_inner())
                                .push_front(expectation);
                        }
                        // Dropping the request drops its responder: caller sees ActorDropped.
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Action { id, response })
    }

    /// Expects a `list` operation (any query).
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with either a success or an error reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    /// Reply with `Ok(value)`.
    pub fn return_ok(self, value: R) {
        push(&self.expectations, (self.build)(Ok(value)));
    }

    /// Reply with `Err(error)`.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, (self.build)(Err(error)));
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// Pull requests off with [`expect_create`], [`expect_get`], [`expect_action`] or
/// [`expect_list`], assert on them, then answer through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Account {
        id: u32,
        email: String,
    }

    #[derive(Debug)]
    struct AccountCreate {
        email: String,
    }

    #[derive(Debug)]
    struct AccountUpdate;

    #[derive(Debug)]
    enum AccountAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Account error")]
    struct AccountError;

    #[async_trait]
    impl ActorEntity for Account {
        type Id = u32;
        type Create = AccountCreate;
        type Update = AccountUpdate;
        type Action = AccountAction;
        type ActionResult = ();
        type Query = ();
        type Context = ();
        type Error = AccountError;

        async fn from_create_params(
            id: u32,
            params: AccountCreate,
            _ctx: &(),
        ) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                email: params.email,
            })
        }

        async fn on_update(&mut self, _update: AccountUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: AccountAction, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn account(id: u32, email: &str) -> Account {
        Account {
            id,
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_create() {
        let (client, mut receiver) = create_mock_client::<Account>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(AccountCreate {
                    email: "test@example.com".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.email, "test@example.com");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_raw_receiver_list() {
        let (client, mut receiver) = create_mock_client::<Account>(10);

        let list_task = tokio::spawn(async move { client.list(()).await });

        let (_query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder
            .send(Ok(vec![account(1, "a@example.com"), account(2, "b@example.com")]))
            .unwrap();

        let listed = list_task.await.unwrap().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].email, "b@example.com");
    }

    #[tokio::test]
    async fn test_fluent_expectations_in_order() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(account(1, "test@example.com")));
        mock.expect_update(1).return_ok(account(1, "new@example.com"));
        mock.expect_delete(1).return_ok(());
        mock.expect_list().return_ok(vec![]);

        let client = mock.client();
        let id = client
            .create(AccountCreate {
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        let updated = client.update(1, AccountUpdate).await.unwrap();
        assert_eq!(updated.email, "new@example.com");

        client.delete(1).await.unwrap();
        assert!(client.list(()).await.unwrap().is_empty());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_id_is_not_answered() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let result = client.get(2).await;

        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        assert_eq!(mock.remaining(), 1);
    }
}
