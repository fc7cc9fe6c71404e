//! # order-desk
//!
//! Validated CRUD service for delivery orders.
//!
//! ## Features
//!
//! - **Validator chains**: each operation runs a fixed, ordered list of checks
//!   before it may touch the store; the first failure ends the request
//! - **Guarded lifecycle**: `pending → preparing → out-for-delivery → delivered`,
//!   forward only, delivered orders are frozen, only pending orders can be deleted
//! - **Pluggable storage**: operations talk to an [`OrderStore`](core::OrderStore)
//!   trait; an in-memory store is included
//! - **REST exposure**: axum routes with `{ "data": ... }` / `{ "error": ... }` bodies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_desk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = OrdersConfig::from_yaml_file("orders.yaml")?;
//!     let address = config.bind_address()?.to_string();
//!
//!     ServerBuilder::new()
//!         .with_store(InMemoryOrderStore::from_config(&config))
//!         .serve(&address)
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{
            ConfigError, NotFoundError, OrderError, RequestError, StorageError, ValidationError,
        },
        order::{Dish, NewOrder, Order, OrderChanges, OrderStatus},
        service::OrderService,
        store::OrderStore,
        validation::{Operation, OrderContext, OrderPayload, OrderRequest},
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;

    // === Config ===
    pub use crate::config::{OrdersConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}
