//! # System Lifecycle
//!
//! Starting, wiring and stopping the resource actors, plus logging setup.
//!
//! Actors are created without dependencies and receive them when their loop starts
//! (`run(ctx)`), so construction order never matters:
//!
//! ```text
//! User     Context = ()
//! Product  Context = UserClient
//! Order    Context = (UserClient, ProductClient)
//! ```
//!
//! The dependency graph is acyclic, so [`StoreSystem::shutdown`] only has to drop its
//! own clients: each actor stops when its mailbox closes and in doing so drops the
//! clients it held, which lets the next one stop.

pub mod store_system;
pub mod tracing;

pub use store_system::*;
pub use self::tracing::setup_tracing;
