//! Per-request input and scratch space for the validator chain

use crate::core::error::OrderError;
use crate::core::order::{NewOrder, Order, OrderChanges};
use serde_json::{Map, Value};

/// An incoming order request
///
/// `data` is the `data` member of the request body. A body without one (or
/// without a body at all) is treated as `{}`, so every field reads as
/// missing.
#[derive(Debug, Clone, Default)]
pub struct OrderRequest {
    pub order_id: Option<String>,
    pub data: Map<String, Value>,
}

impl OrderRequest {
    /// Build a request from a full JSON body (`{ "data": { ... } }`)
    pub fn from_body(body: Value) -> Self {
        let data = match body {
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
            _ => Map::new(),
        };

        Self {
            order_id: None,
            data,
        }
    }

    /// A body-less request targeting one order
    pub fn for_order(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            data: Map::new(),
        }
    }

    /// Attach the route id
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Field of the `data` object, with `null` read as absent
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name).filter(|value| !value.is_null())
    }
}

/// The order located by the identity validator
#[derive(Debug, Clone, PartialEq)]
pub struct FoundOrder {
    /// Id taken from the route
    pub id: String,
    /// Position in the store at lookup time
    pub index: usize,
    pub order: Order,
}

/// Values produced by validators for later validators and the terminal
/// handler
///
/// Created empty for every request and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct OrderContext {
    pub new_order: Option<NewOrder>,
    pub found: Option<FoundOrder>,
    pub changes: Option<OrderChanges>,
}

impl OrderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(&self) -> Result<&FoundOrder, OrderError> {
        self.found
            .as_ref()
            .ok_or_else(|| missing("found order"))
    }

    pub fn take_found(&mut self) -> Result<FoundOrder, OrderError> {
        self.found.take().ok_or_else(|| missing("found order"))
    }

    pub fn take_new_order(&mut self) -> Result<NewOrder, OrderError> {
        self.new_order.take().ok_or_else(|| missing("new order"))
    }

    pub fn take_changes(&mut self) -> Result<OrderChanges, OrderError> {
        self.changes.take().ok_or_else(|| missing("order changes"))
    }
}

fn missing(what: &str) -> OrderError {
    OrderError::Internal(format!("{} missing from request context", what))
}
