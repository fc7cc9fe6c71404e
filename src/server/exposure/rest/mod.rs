//! REST API exposure for the order service
//!
//! This module provides REST-specific routing and handlers. The core
//! ([`OrderService`]) knows nothing about HTTP; this layer maps routes onto
//! operations and errors onto status codes.

pub mod handlers;

use crate::core::service::OrderService;
use axum::{Json, Router, routing::get};
use handlers::{create_order, delete_order, list_orders, path_not_found, read_order, update_order};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Arguments
    ///
    /// * `service` - The order service every route delegates to
    /// * `custom_routes` - Additional custom routes to merge
    ///
    /// # Returns
    ///
    /// A router with:
    /// - Health check routes
    /// - Order CRUD routes
    /// - Custom routes
    /// - A JSON 404 fallback
    pub fn build_router(service: OrderService, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(Self::order_routes(service));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.fallback(path_not_found).layer(TraceLayer::new_for_http())
    }

    /// Order CRUD routes
    ///
    /// - GET    /orders
    /// - POST   /orders
    /// - GET    /orders/{order_id}
    /// - PUT    /orders/{order_id}
    /// - DELETE /orders/{order_id}
    pub fn order_routes(service: OrderService) -> Router {
        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route(
                "/orders/{order_id}",
                get(read_order).put(update_order).delete(delete_order),
            )
            .with_state(service)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "order-desk"
        }))
    }
}
