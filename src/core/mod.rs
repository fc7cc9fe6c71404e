//! Core module containing the order model, validation pipeline and operations

pub mod error;
pub mod order;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{
    ConfigError, NotFoundError, OrderError, RequestError, StorageError, ValidationError,
};
pub use order::{Dish, NewOrder, Order, OrderChanges, OrderStatus};
pub use service::OrderService;
pub use store::OrderStore;
pub use validation::{Operation, OrderContext, OrderPayload, OrderRequest};
