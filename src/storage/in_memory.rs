//! In-memory implementation of OrderStore for testing and development

use crate::config::OrdersConfig;
use crate::core::error::StorageError;
use crate::core::order::Order;
use crate::core::store::OrderStore;
use uuid::Uuid;

/// In-memory order store
///
/// Keeps orders in a `Vec` so that list order is insertion order and the
/// index handed out by `find_index` stays valid until the next mutation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Vec<Order>,
}

impl InMemoryOrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Create a store pre-populated with orders
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Create a store holding the configured seed orders
    pub fn from_config(config: &OrdersConfig) -> Self {
        Self::with_orders(config.seed_orders.clone())
    }

    fn check_index(&self, index: usize) -> Result<(), StorageError> {
        if index < self.orders.len() {
            Ok(())
        } else {
            Err(StorageError::IndexOutOfBounds {
                index,
                len: self.orders.len(),
            })
        }
    }
}

impl OrderStore for InMemoryOrderStore {
    fn find(&self, id: &str) -> Result<Option<Order>, StorageError> {
        Ok(self.orders.iter().find(|order| order.id == id).cloned())
    }

    fn find_index(&self, id: &str) -> Result<Option<usize>, StorageError> {
        Ok(self.orders.iter().position(|order| order.id == id))
    }

    fn push(&mut self, order: Order) -> Result<(), StorageError> {
        if self.orders.iter().any(|existing| existing.id == order.id) {
            return Err(StorageError::DuplicateId { id: order.id });
        }
        self.orders.push(order);
        Ok(())
    }

    fn replace_at(&mut self, index: usize, order: Order) -> Result<(), StorageError> {
        self.check_index(index)?;
        self.orders[index] = order;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<Order, StorageError> {
        self.check_index(index)?;
        Ok(self.orders.remove(index))
    }

    fn all(&self) -> Result<Vec<Order>, StorageError> {
        Ok(self.orders.clone())
    }

    fn next_id(&self) -> Result<String, StorageError> {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if !self.orders.iter().any(|order| order.id == id) {
                return Ok(id);
            }
        }
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.orders.len())
    }
}
