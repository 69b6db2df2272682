//! Order-specific resource logic: pricing, checkout and status changes.
//!
//! The Order actor depends on both other stores (`Context = (UserClient, ProductClient)`):
//! it confirms the customer exists, prices every line through [`pricing`], and
//! reserves stock before an order is ever stored.

mod actions;
pub mod entity;
pub mod error;
pub mod pricing;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, OrderClient::new(generic_client))
}
