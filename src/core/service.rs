//! Order operations
//!
//! [`OrderService`] runs an operation's validator chain and then its
//! terminal handler. The terminal handlers only read the per-request
//! [`OrderContext`]; they never look anything up again.

use crate::core::error::OrderError;
use crate::core::order::{Order, OrderStatus};
use crate::core::store::OrderStore;
use crate::core::validation::{Operation, OrderContext, OrderRequest};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Validated CRUD access to the order collection
///
/// The store sits behind one async mutex. A request holds the lock from the
/// first validator to the end of its terminal handler, so the index found by
/// the identity validator is still the right one when the handler uses it.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<Mutex<Box<dyn OrderStore>>>,
}

impl OrderService {
    pub fn new(store: impl OrderStore + 'static) -> Self {
        Self {
            store: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    /// Validate and persist a new order (status `pending`)
    pub async fn create(&self, request: OrderRequest) -> Result<Order, OrderError> {
        let mut store = self.store.lock().await;
        let mut context = validated(Operation::Create, &request, &**store)?;

        let new_order = context.take_new_order()?;
        let id = store.next_id()?;
        let order = new_order.into_order(id, OrderStatus::Pending);
        store.push(order.clone())?;

        tracing::info!(order_id = %order.id, dishes = order.dishes.len(), "order created");
        Ok(order)
    }

    /// Fetch one order
    pub async fn read(&self, request: OrderRequest) -> Result<Order, OrderError> {
        let store = self.store.lock().await;
        let mut context = validated(Operation::Read, &request, &**store)?;

        Ok(context.take_found()?.order)
    }

    /// Replace an order with the validated payload, keeping its id
    pub async fn update(&self, request: OrderRequest) -> Result<Order, OrderError> {
        let mut store = self.store.lock().await;
        let mut context = validated(Operation::Update, &request, &**store)?;

        let found = context.take_found()?;
        let order = context.take_changes()?.into_order(found.id);
        store.replace_at(found.index, order.clone())?;

        tracing::info!(
            order_id = %order.id,
            from = %found.order.status,
            to = %order.status,
            "order updated"
        );
        Ok(order)
    }

    /// Remove a pending order
    pub async fn delete(&self, request: OrderRequest) -> Result<(), OrderError> {
        let mut store = self.store.lock().await;
        let context = validated(Operation::Delete, &request, &**store)?;

        let found = context.found()?;
        store.remove_at(found.index)?;

        tracing::info!(order_id = %found.id, "order deleted");
        Ok(())
    }

    /// Every order, in insertion order
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let store = self.store.lock().await;
        validated(Operation::List, &OrderRequest::default(), &**store)?;

        Ok(store.all()?)
    }
}

/// Run `operation`'s chain against a fresh context
fn validated(
    operation: Operation,
    request: &OrderRequest,
    store: &dyn OrderStore,
) -> Result<OrderContext, OrderError> {
    let mut context = OrderContext::new();

    if let Err(err) = operation.validate(request, &mut context, store) {
        tracing::warn!(
            operation = %operation,
            order_id = request.order_id.as_deref().unwrap_or("-"),
            code = err.error_code(),
            "order request rejected: {}",
            err
        );
        return Err(err);
    }

    Ok(context)
}
