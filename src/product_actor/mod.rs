//! Product-specific resource logic, including stock management actions.
//!
//! The Product actor depends on the User actor (`Context = UserClient`) to confirm
//! that a product's vendor is a registered user.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, ProductClient::new(generic_client))
}
