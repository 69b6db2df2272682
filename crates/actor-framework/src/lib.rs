//! # Actor Framework
//!
//! Resource-oriented stores built on the actor model. Each resource type gets one
//! [`ResourceActor`] task that owns its collection and answers a fixed set of
//! requests (create, get, update, delete, custom action, filtered list) one at a time.
//! Callers talk to it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) – the domain type and its rules.
//! 2. **Runtime** ([`ResourceActor`]) – mailbox loop, id issuing, store ownership.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) – typed async calls.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(ctx)` rather than `new()`, so a store can be
//! built before the stores it depends on are running:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Shelf { id: u32 }
//! #[derive(Debug)] struct ShelfCreate;
//! #[derive(Debug)] struct NoUpdate;
//! #[derive(Debug)] enum NoAction {}
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct StoreError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32; type Create = ShelfCreate; type Update = NoUpdate; type Action = NoAction;
//!     type ActionResult = (); type Query = (); type Context = (); type Error = StoreError;
//!     async fn from_create_params(id: u32, _: ShelfCreate, _: &()) -> Result<Self, StoreError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: NoUpdate, _: &()) -> Result<(), StoreError> { Ok(()) }
//!     async fn handle_action(&mut self, _: NoAction, _: &()) -> Result<(), StoreError> { Ok(()) }
//! }
//!
//! // A Book can only be shelved on a Shelf that exists.
//! #[derive(Clone, Debug)] struct Book { id: u32, shelf: u32 }
//! #[derive(Debug)] struct BookCreate { shelf: u32 }
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u32; type Create = BookCreate; type Update = NoUpdate; type Action = NoAction;
//!     type ActionResult = (); type Query = (); type Context = ResourceClient<Shelf>;
//!     type Error = StoreError;
//!
//!     async fn from_create_params(id: u32, p: BookCreate, shelves: &ResourceClient<Shelf>) -> Result<Self, StoreError> {
//!         match shelves.get(p.shelf).await {
//!             Ok(Some(_)) => Ok(Self { id, shelf: p.shelf }),
//!             Ok(None) => Err(StoreError(format!("no shelf {}", p.shelf))),
//!             Err(e) => Err(StoreError(e.to_string())),
//!         }
//!     }
//!     async fn on_update(&mut self, _: NoUpdate, _: &ResourceClient<Shelf>) -> Result<(), StoreError> { Ok(()) }
//!     async fn handle_action(&mut self, _: NoAction, _: &ResourceClient<Shelf>) -> Result<(), StoreError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (shelf_actor, shelves) = ResourceActor::<Shelf>::new(10);
//!     let (book_actor, books) = ResourceActor::<Book>::new(10);
//!
//!     tokio::spawn(shelf_actor.run(()));
//!     tokio::spawn(book_actor.run(shelves.clone()));
//!
//!     let shelf = shelves.create(ShelfCreate).await.unwrap();
//!     assert!(books.create(BookCreate { shelf }).await.is_ok());
//!     assert!(books.create(BookCreate { shelf: 99 }).await.is_err());
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles one request at a time.
//! - Different actors run in parallel.
//! - A store's loop ends when its last client is dropped. Keep the dependency graph
//!   acyclic so that dropping the outermost clients shuts everything down.
//!
//! ## Testing
//!
//! See [`mock`] for scripted clients that stand in for a running store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
