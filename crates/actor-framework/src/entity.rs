//! # ActorEntity Trait
//!
//! The contract every stored resource (User, Product, Order, …) implements so that a
//! generic [`ResourceActor`](crate::ResourceActor) can own a collection of it.
//!
//! Associated types pin down everything a store needs to know about the resource:
//! its id, the payloads that create and update it, the custom actions it accepts,
//! the filter used to list it, the dependencies it needs at runtime and its error type.
//! A `Product` store only accepts a `ProductCreate`; sending it an `OrderCreate` does
//! not compile.
//!
//! # Provided Methods
//! - [`ActorEntity::on_delete`] defaults to `Ok(())`.
//! - [`ActorEntity::matches`] defaults to `true` (every entity is listed).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Construction and every hook receive `&Self::Context`, the runtime dependencies the
/// actor was started with. Dependencies are bound when the loop starts (`run(ctx)`),
/// not when the actor is built, so stores can be wired in any order.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Unique identifier. Issued by the store from a `u32` counter and used as the
    /// listing order, hence `From<u32>` and `Ord`.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g., `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter accepted by `List` requests. Use `()` when the resource is never filtered.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every operation on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly issued id and the create payload.
    ///
    /// Runs inside the store loop before the entity is inserted. Returning an error
    /// leaves the store untouched and does not consume the id.
    async fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Apply an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. An error vetoes the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }
}
