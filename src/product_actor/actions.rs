//! Custom actions for the Product actor.
//!
//! Stock bookkeeping that goes beyond CRUD. Handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action) on
//! [`Product`](crate::model::Product).

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes units out of stock for an order.
    ///
    /// # Errors
    /// Fails if the requested amount exceeds available stock or is zero.
    ReserveStock(u32),
    /// Puts previously reserved units back into stock.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    /// Current stock level, `None` when the product is not tracked.
    CheckStock(Option<u32>),
    ReserveStock(()),
    ReleaseStock(()),
}
