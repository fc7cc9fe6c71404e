//! Typed error handling for order requests
//!
//! Every failed request produces exactly one [`OrderError`]. The error knows
//! its HTTP status and renders itself as `{ "error": message }`.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: malformed, missing or inconsistent input (400)
//! - [`NotFoundError`]: no order with the requested id (404)
//! - [`RequestError`]: unreadable bodies and unknown paths
//! - [`StorageError`]: failures reported by an [`OrderStore`](crate::core::store::OrderStore)
//!
//! [`ConfigError`] is separate: it is raised while loading configuration at
//! startup and never reaches a client.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.read("missing").await {
//!     Err(OrderError::NotFound(NotFoundError { id })) => println!("no order {}", id),
//!     Err(e) => eprintln!("{} ({})", e, e.status_code()),
//!     Ok(order) => println!("{:?}", order),
//! }
//! ```

use crate::core::order::OrderStatus;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for order requests
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A terminal handler ran without a value its validator chain should
    /// have produced
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body sent to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::Request(e) => e.status_code(),
            OrderError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error (used as a log field)
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(e) => e.error_code(),
            OrderError::NotFound(_) => "ORDER_NOT_FOUND",
            OrderError::Request(e) => e.error_code(),
            OrderError::Storage(_) => "STORAGE_ERROR",
            OrderError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by the validator chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string field is missing or empty
    #[error("Order must include a {field}")]
    MissingField { field: &'static str },

    #[error("Order must include a dish")]
    MissingDishes,

    /// `dishes` is not an array, or is an empty one
    #[error("Order must include at least one dish")]
    EmptyDishes,

    #[error("Dish {index} must have a quantity that is an integer greater than 0")]
    InvalidQuantity { index: usize },

    #[error("Order id does not match route id. Order: {body_id}, Route: {route_id}")]
    IdMismatch { body_id: String, route_id: String },

    #[error("Order must have a status of {}", OrderStatus::allowed_names())]
    InvalidStatus,

    #[error("A delivered order cannot be changed")]
    DeliveredImmutable,

    #[error("Order status cannot move from {from} back to {to}")]
    StatusRegression { from: OrderStatus, to: OrderStatus },

    #[error("An order cannot be deleted unless it is pending")]
    NotPending,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::MissingDishes => "MISSING_DISHES",
            ValidationError::EmptyDishes => "EMPTY_DISHES",
            ValidationError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            ValidationError::IdMismatch { .. } => "ID_MISMATCH",
            ValidationError::InvalidStatus => "INVALID_STATUS",
            ValidationError::DeliveredImmutable => "ORDER_DELIVERED",
            ValidationError::StatusRegression { .. } => "STATUS_REGRESSION",
            ValidationError::NotPending => "ORDER_NOT_PENDING",
        }
    }
}

// =============================================================================
// Not Found
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Order does not exist: {id}")]
pub struct NotFoundError {
    pub id: String,
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the HTTP request itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::PathNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::PathNotFound { .. } => "PATH_NOT_FOUND",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors reported by store implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Index {index} is out of bounds for a collection of {len} orders")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Order id '{id}' is already taken")]
    DuplicateId { id: String },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors found while checking configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Seed order at position {position} has an empty id")]
    EmptySeedId { position: usize },

    #[error("Seed order id '{id}' appears more than once")]
    DuplicateSeedId { id: String },

    #[error("Seed order '{id}' is invalid: {message}")]
    InvalidSeedOrder { id: String, message: String },

    #[error("Invalid server address '{address}'")]
    InvalidAddress { address: String },
}
