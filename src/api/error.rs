//! Errors surfaced to API callers, each with its HTTP status.

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Authentication credentials were not provided.")]
    Unauthenticated,

    #[error("You do not have permission to perform this action.")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `{"detail": "..."}`
    pub fn body(&self) -> serde_json::Value {
        json!({ "detail": self.to_string() })
    }

    pub(crate) fn not_found() -> Self {
        ApiError::NotFound("Not found.".into())
    }

    fn internal(detail: String) -> Self {
        error!(%detail, "Store failure");
        ApiError::Internal(detail)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Validation(format!("Malformed request body: {}", e))
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::not_found(),
            UserError::ValidationError(_) => ApiError::Validation(e.to_string()),
            UserError::ActorCommunicationError(_) => ApiError::internal(e.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::not_found(),
            ProductError::InsufficientStock { .. } => ApiError::Conflict(e.to_string()),
            ProductError::InvalidQuantity(_)
            | ProductError::ValidationError(_)
            | ProductError::UnknownVendor(_) => ApiError::Validation(e.to_string()),
            ProductError::ActorCommunicationError(_) => ApiError::internal(e.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::not_found(),
            OrderError::ProductNotFound(_) => ApiError::NotFound(e.to_string()),
            OrderError::InvalidUser(_) | OrderError::ValidationError(_) => {
                ApiError::Validation(e.to_string())
            }
            OrderError::InsufficientStock { .. } | OrderError::InvalidTransition { .. } => {
                ApiError::Conflict(e.to_string())
            }
            OrderError::ActorCommunicationError(_) => ApiError::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;

    #[test]
    fn statuses() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn order_errors_map_by_variant() {
        let missing: ApiError = OrderError::ProductNotFound("product_7".into()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.body()["detail"], "Product not found: product_7");

        let quantity: ApiError = OrderError::ValidationError("quantity must be at least 1, got 0".into()).into();
        assert_eq!(quantity.status(), StatusCode::BAD_REQUEST);

        let shipped: ApiError = OrderError::InvalidTransition {
            from: OrderStatus::Refunded,
            to: OrderStatus::Pending,
        }
        .into();
        assert_eq!(shipped.status(), StatusCode::CONFLICT);

        let closed: ApiError = OrderError::ActorCommunicationError("Actor closed".into()).into();
        assert_eq!(closed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthenticated_body_matches_rest_convention() {
        assert_eq!(
            ApiError::Unauthenticated.body(),
            json!({ "detail": "Authentication credentials were not provided." })
        );
    }
}
