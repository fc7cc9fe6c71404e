//! Axum extractor for order request bodies
//!
//! Wraps `Json<Value>` so that unreadable bodies surface as an
//! [`OrderError`] (and thus as `{ "error": ... }`) instead of axum's plain
//! text rejection.

use super::context::OrderRequest;
use crate::core::error::{OrderError, RequestError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// A parsed `{ "data": { ... } }` body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     State(service): State<OrderService>,
///     OrderPayload(request): OrderPayload,
/// ) -> Result<impl IntoResponse, OrderError> {
///     // request.data holds the `data` object
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OrderPayload(pub OrderRequest);

impl OrderPayload {
    pub fn into_inner(self) -> OrderRequest {
        self.0
    }
}

impl<S> FromRequest<S> for OrderPayload
where
    S: Send + Sync,
{
    type Rejection = OrderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            OrderError::from(RequestError::InvalidBody {
                message: e.body_text(),
            })
        })?;

        Ok(OrderPayload(OrderRequest::from_body(body)))
    }
}
