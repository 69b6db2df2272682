//! Authorization predicates.
//!
//! Authentication itself belongs to the transport in front of this crate; handlers
//! receive its outcome as a [`Caller`] and decide with the functions below.

use super::ApiError;
use crate::model::{Order, Product, UserId};

/// An authenticated user as the handlers see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub is_staff: bool,
}

/// Who is making a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Caller {
    #[default]
    Anonymous,
    Authenticated(Principal),
}

impl Caller {
    pub fn principal(&self) -> Option<Principal> {
        match self {
            Caller::Anonymous => None,
            Caller::Authenticated(principal) => Some(*principal),
        }
    }
}

/// Writes, and every order read, need an authenticated caller (401 otherwise).
pub fn require_authenticated(caller: &Caller) -> Result<Principal, ApiError> {
    caller.principal().ok_or(ApiError::Unauthenticated)
}

/// Staff-only operations (403 otherwise).
pub fn require_staff(principal: &Principal) -> Result<(), ApiError> {
    if principal.is_staff {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

/// A product may be changed by its vendor or by staff.
pub fn can_modify_product(principal: &Principal, product: &Product) -> bool {
    principal.is_staff || product.vendor_id == principal.user_id
}

/// An order is visible to the user who placed it and to staff.
pub fn can_view_order(principal: &Principal, order: &Order) -> bool {
    principal.is_staff || order.is_owned_by(principal.user_id)
}

/// The owner filter applied to every order query: `None` (everything) for staff,
/// the caller's own id for everybody else.
pub fn order_scope(principal: &Principal) -> Option<UserId> {
    if principal.is_staff {
        None
    } else {
        Some(principal.user_id)
    }
}
