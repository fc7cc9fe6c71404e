//! Order HTTP handlers
//!
//! Thin wrappers around [`OrderService`]: they attach the route id, call the
//! operation and wrap the result in a `{ "data": ... }` envelope.

use crate::core::error::{OrderError, RequestError};
use crate::core::order::Order;
use crate::core::service::OrderService;
use crate::core::validation::{OrderPayload, OrderRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde::Serialize;

/// Success body
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

pub async fn list_orders(
    State(service): State<OrderService>,
) -> Result<Json<DataEnvelope<Vec<Order>>>, OrderError> {
    let orders = service.list().await?;
    Ok(DataEnvelope::new(orders))
}

pub async fn create_order(
    State(service): State<OrderService>,
    OrderPayload(request): OrderPayload,
) -> Result<impl IntoResponse, OrderError> {
    let order = service.create(request).await?;
    Ok((StatusCode::CREATED, DataEnvelope::new(order)))
}

pub async fn read_order(
    State(service): State<OrderService>,
    Path(order_id): Path<String>,
) -> Result<Json<DataEnvelope<Order>>, OrderError> {
    let order = service.read(OrderRequest::for_order(order_id)).await?;
    Ok(DataEnvelope::new(order))
}

pub async fn update_order(
    State(service): State<OrderService>,
    Path(order_id): Path<String>,
    OrderPayload(request): OrderPayload,
) -> Result<Json<DataEnvelope<Order>>, OrderError> {
    let order = service.update(request.with_order_id(order_id)).await?;
    Ok(DataEnvelope::new(order))
}

pub async fn delete_order(
    State(service): State<OrderService>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, OrderError> {
    service.delete(OrderRequest::for_order(order_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown paths
pub async fn path_not_found(uri: Uri) -> OrderError {
    RequestError::PathNotFound {
        path: uri.path().to_string(),
    }
    .into()
}
