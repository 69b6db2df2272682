//! # Generic Actor Server
//!
//! `ResourceActor` owns one collection of entities and processes every request for
//! it sequentially. It is the single writer for that collection, so the store needs
//! no locks and every request observes the effects of all earlier ones.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in its own task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate(String);
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Query = ();
///     type Context = ();
///     type Error = TagError;
///
///     async fn from_create_params(id: u32, p: TagCreate, _: &()) -> Result<Self, TagError> {
///         Ok(Self { id, label: p.0 })
///     }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), TagError> { Ok(()) }
///     async fn handle_action(&mut self, _: TagAction, _: &()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(TagCreate("sale".into())).await.unwrap();
///     let all = client.list(()).await.unwrap();
///     assert_eq!(all.len(), 1);
///     assert_eq!(all[0].id, id);
/// }
/// ```
///
/// # Operations
///
/// * **Create** – issues the next id, awaits `T::from_create_params`, inserts. The id
///   counter only advances when construction succeeds. Once `u32::MAX` has been
///   issued every further create fails with [`FrameworkError::IdsExhausted`].
/// * **Get** – clone of the entity or `None`.
/// * **Update** – `on_update` on the stored entity; returns the new state. A failed
///   update may have mutated nothing only if the entity's hook is written that way.
/// * **Delete** – `on_delete` may veto; otherwise the entity is removed.
/// * **Action** – `handle_action` on the stored entity.
/// * **List** – clones of every entity whose `matches(query)` holds, sorted by id.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // None once u32::MAX has been issued
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; clients wait for space when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "my_app::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Create refused: ids exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(raw_id);

                    match T::from_create_params(id.clone(), params, &context).await {
                        Ok(item) => {
                            self.next_id = raw_id.checked_add(1);
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::List { query, respond_to } => {
                    let mut matching: Vec<(&T::Id, &T)> = self
                        .store
                        .iter()
                        .filter(|(_, item)| item.matches(&query))
                        .collect();
                    matching.sort_by(|(a, _), (b, _)| a.cmp(b));
                    let items: Vec<T> = matching.into_iter().map(|(_, item)| item.clone()).collect();
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
