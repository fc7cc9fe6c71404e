//! Order and dish models
//!
//! These are the records held by an [`OrderStore`](crate::core::store::OrderStore)
//! and returned to clients. Field names are serialized in camelCase to match
//! the wire format (`deliverTo`, `mobileNumber`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Lifecycle status of an order
///
/// Variants are declared in lifecycle order, so the derived `Ord` ranks
/// `Pending < Preparing < OutForDelivery < Delivered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Parse a wire name, returning `None` for anything outside the enum
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == name)
    }

    /// Comma separated list of every wire name (used in error messages)
    pub fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(|status| status.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether an order may move from `self` to `next`
    ///
    /// Transitions only go forward; staying on the same status is allowed
    /// except once delivered.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        *self != OrderStatus::Delivered && next >= *self
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line item of an order
///
/// Only `quantity` is interpreted; every other field is kept as-is. The
/// quantity itself is stored exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub quantity: Number,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dish {
    pub fn new(quantity: u64) -> Self {
        Self {
            quantity: quantity.into(),
            extra: Map::new(),
        }
    }

    /// Whether the quantity is an integer greater than zero
    ///
    /// Floats with no fractional part (`2.0`, `1e20`) count as integers,
    /// whatever their magnitude.
    pub fn has_valid_quantity(&self) -> bool {
        if let Some(quantity) = self.quantity.as_u64() {
            return quantity > 0;
        }
        if self.quantity.is_i64() {
            return false;
        }
        self.quantity
            .as_f64()
            .is_some_and(|quantity| quantity.is_finite() && quantity >= 1.0 && quantity.fract() == 0.0)
    }

    /// Attach an opaque pass-through field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A stored order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<Dish>,
}

/// Vetted order fields produced by the property validator
///
/// Carries no id and no status; those are supplied when the order is
/// committed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
}

impl NewOrder {
    /// Combine with a store-assigned id and a status into a full record
    pub fn into_order(self, id: String, status: OrderStatus) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status,
            dishes: self.dishes,
        }
    }
}

/// Full replacement payload for an update, minus the id
#[derive(Debug, Clone, PartialEq)]
pub struct OrderChanges {
    pub details: NewOrder,
    pub status: OrderStatus,
}

impl OrderChanges {
    pub fn into_order(self, id: String) -> Order {
        self.details.into_order(id, self.status)
    }
}
