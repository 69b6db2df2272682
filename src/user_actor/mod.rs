//! # User Actor
//!
//! Owns every registered [`User`]. It has no dependencies (`Context = ()`) and no
//! custom actions; other stores consult it to check that a vendor or a customer exists.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - factory returning the actor and its [`UserClient`]
//!
//! ```rust
//! use storefront::model::UserCreate;
//! use storefront::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_user(UserCreate {
//!             username: "alice".into(),
//!             email: "alice@example.com".into(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     assert_eq!(id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, UserClient::new(generic_client))
}
