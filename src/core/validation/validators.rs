//! Order validators
//!
//! Every validator has the [`Validator`](super::chain::Validator) signature:
//! it reads the request, may read the store and earlier context values, and
//! either writes its own context value and returns `Ok(())` or stops the
//! chain with an error.

use super::context::{FoundOrder, OrderContext, OrderRequest};
use crate::core::error::{NotFoundError, OrderError, ValidationError};
use crate::core::order::{Dish, NewOrder, OrderChanges, OrderStatus};
use crate::core::store::OrderStore;
use serde_json::{Map, Value};

/// Validator: `deliverTo`, `mobileNumber` and `dishes` are present and sound
///
/// Writes [`OrderContext::new_order`].
pub fn validate_order_properties(
    request: &OrderRequest,
    context: &mut OrderContext,
    _store: &dyn OrderStore,
) -> Result<(), OrderError> {
    let deliver_to = required_string(request, "deliverTo")?;
    let mobile_number = required_string(request, "mobileNumber")?;

    let dishes = match request.field("dishes") {
        None => return Err(ValidationError::MissingDishes.into()),
        Some(Value::Array(dishes)) if !dishes.is_empty() => dishes,
        Some(_) => return Err(ValidationError::EmptyDishes.into()),
    };

    let dishes = dishes
        .iter()
        .enumerate()
        .map(|(index, dish)| {
            normalize_dish(dish).ok_or(ValidationError::InvalidQuantity { index })
        })
        .collect::<Result<Vec<Dish>, ValidationError>>()?;

    context.new_order = Some(NewOrder {
        deliver_to,
        mobile_number,
        dishes,
    });
    Ok(())
}

/// Validator: the route id names a stored order, and the body agrees
///
/// Writes [`OrderContext::found`].
pub fn validate_order_id(
    request: &OrderRequest,
    context: &mut OrderContext,
    store: &dyn OrderStore,
) -> Result<(), OrderError> {
    let route_id = request
        .order_id
        .as_deref()
        .ok_or_else(|| OrderError::Internal("route order id missing".to_string()))?;

    let (Some(order), Some(index)) = (store.find(route_id)?, store.find_index(route_id)?) else {
        return Err(NotFoundError {
            id: route_id.to_string(),
        }
        .into());
    };

    context.found = Some(FoundOrder {
        id: route_id.to_string(),
        index,
        order,
    });

    match mismatched_body_id(request, route_id) {
        Some(body_id) => Err(ValidationError::IdMismatch {
            body_id,
            route_id: route_id.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Validator: the requested status is a known one and the stored order may
/// move to it
///
/// Needs [`OrderContext::found`] and [`OrderContext::new_order`]; writes
/// [`OrderContext::changes`].
pub fn validate_status_for_update(
    request: &OrderRequest,
    context: &mut OrderContext,
    _store: &dyn OrderStore,
) -> Result<(), OrderError> {
    let requested = request
        .field("status")
        .and_then(Value::as_str)
        .and_then(OrderStatus::from_name)
        .ok_or(ValidationError::InvalidStatus)?;

    let current = context.found()?.order.status;
    if current == OrderStatus::Delivered {
        return Err(ValidationError::DeliveredImmutable.into());
    }
    if !current.can_transition_to(requested) {
        return Err(ValidationError::StatusRegression {
            from: current,
            to: requested,
        }
        .into());
    }

    let details = context.take_new_order()?;
    context.changes = Some(OrderChanges {
        details,
        status: requested,
    });
    Ok(())
}

/// Validator: only pending orders may be deleted
pub fn validate_status_for_delete(
    _request: &OrderRequest,
    context: &mut OrderContext,
    _store: &dyn OrderStore,
) -> Result<(), OrderError> {
    if context.found()?.order.status != OrderStatus::Pending {
        return Err(ValidationError::NotPending.into());
    }
    Ok(())
}

fn required_string(request: &OrderRequest, field: &'static str) -> Result<String, OrderError> {
    match request.field(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        _ => Err(ValidationError::MissingField { field }.into()),
    }
}

/// A body `id` that disagrees with the route id, rendered for the error
/// message
///
/// Empty strings and `null` count as absent. Ids that are not strings never
/// match, even when their JSON text equals the route id.
fn mismatched_body_id(request: &OrderRequest, route_id: &str) -> Option<String> {
    match request.field("id")? {
        Value::String(id) if id.is_empty() || id == route_id => None,
        Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}

/// Split a dish into its validated quantity and pass-through fields
fn normalize_dish(dish: &Value) -> Option<Dish> {
    let fields = dish.as_object()?;
    let Value::Number(quantity) = fields.get("quantity")? else {
        return None;
    };

    let extra: Map<String, Value> = fields
        .iter()
        .filter(|(key, _)| key.as_str() != "quantity")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let dish = Dish {
        quantity: quantity.clone(),
        extra,
    };
    dish.has_valid_quantity().then_some(dish)
}
