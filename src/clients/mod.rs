//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper turns the engine's [`FrameworkError`](actor_framework::FrameworkError)
//! back into its resource's own error enum, recovering the entity error the store
//! produced when there is one.

pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use order_client::*;
pub use product_client::*;
pub use user_client::*;
