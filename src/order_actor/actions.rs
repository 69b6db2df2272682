//! Custom actions for the Order actor.

use crate::model::Order;

/// Custom actions for Order entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Cancels a pending order and puts its reserved stock back.
    Cancel,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The order as it stands after cancellation.
    Cancel(Order),
}
