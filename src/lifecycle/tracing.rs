//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber once, at startup.
//!
//! - The filter comes from `RUST_LOG` when set, otherwise from `log.filter`.
//! - `compact` output hides the module path (`with_target(false)`); every store log
//!   line already carries an `entity_type` field.
//! - `json` output emits one object per event for log shippers.
//!
//! ```bash
//! RUST_LOG=info cargo run                     # store lifecycle and checkout steps
//! RUST_LOG=debug cargo run                    # full request payloads
//! STOREFRONT__LOG__FORMAT=json cargo run      # machine-readable
//! ```
//!
//! With `RUST_LOG=info`, a checkout reads:
//!
//! ```text
//! INFO create_order: Sending create_order to actor lines=2
//! INFO Action ok entity_type="Product" id=product_1
//! INFO Action ok entity_type="Product" id=product_2
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```

use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match config.format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }
}
