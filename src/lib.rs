//! # Storefront
//!
//! A small product and order service built from resource actors.
//!
//! ## Layers
//!
//! ### 1. The Engine ([`actor_framework`])
//! The generic `ResourceActor<T>` that owns one collection and serves its requests
//! one at a time. Every store below is an instance of it.
//!
//! ### 2. The Stores ([`user_actor`], [`product_actor`], [`order_actor`])
//! `ActorEntity` implementations. The Order store also hosts the total calculator
//! ([`order_actor::pricing`]) and runs checkout atomically: an order is only stored
//! once every line has been priced and its stock reserved.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers around `ResourceClient` that hand back each store's own error enum.
//!
//! ### 4. The Mapper ([`api`])
//! Authorization predicates, response representations and handlers with HTTP statuses.
//!
//! ### 5. The Orchestrator ([`lifecycle`]) and [`config`]
//! Starting and stopping the stores, logging setup, configuration loading.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;
