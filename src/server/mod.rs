//! Server module for building the HTTP server around an order store

pub mod builder;
pub mod exposure;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
