//! API exposure for the order service
//!
//! Each exposure consumes an `OrderService` and produces a Router for its
//! protocol. REST is the only one today.

pub mod rest;

pub use rest::RestExposure;
