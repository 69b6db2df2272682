//! # Generic Messages
//!
//! The request envelope exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the lifecycle operations every stored resource supports:
///
/// - **Create**: build a new entity from [`ActorEntity::Create`] and insert it.
/// - **Get**: fetch one entity by id (`None` when absent).
/// - **Update**: apply an [`ActorEntity::Update`] and return the new state.
/// - **Delete**: remove an entity.
/// - **Action**: run a resource-specific [`ActorEntity::Action`].
/// - **List**: return every entity matching an [`ActorEntity::Query`], ordered by id.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
