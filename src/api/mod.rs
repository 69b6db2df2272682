//! # Request/Response Mapper
//!
//! The layer a transport (HTTP router, RPC server, test) calls into. It owns no state;
//! every request is answered from the stores.
//!
//! | Operation | Who | Success |
//! |-----------|-----|---------|
//! | list / retrieve products | anyone | 200 |
//! | create product | authenticated (becomes vendor) | 201 |
//! | update / delete product | vendor or staff | 200 / 204 |
//! | list / retrieve orders, lookup by number | authenticated, own orders unless staff | 200 |
//! | create order | authenticated | 201 |
//! | update order | staff | 200 |
//! | cancel order | owner or staff, while pending | 200 |
//!
//! Failures are [`ApiError`]s; `status()` gives the HTTP status and `body()` the
//! `{"detail": ...}` payload.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod repr;
pub mod requests;

pub use auth::{Caller, Principal};
pub use error::ApiError;
pub use handlers::{ApiResponse, ApiResult, StoreApi};
pub use repr::{OrderItemRepr, OrderRepr, ProductRepr, UserSummary};
pub use requests::{parse_body, OrderListParams, OrderRequest, ProductRequest};
