//! Store trait for the order collection

use crate::core::error::StorageError;
use crate::core::order::Order;

/// Collection of orders plus id generation
///
/// Validators only ever see `&dyn OrderStore`, so every lookup they make is
/// read-only. Mutating methods are called by the terminal handlers once the
/// whole validator chain has passed.
///
/// Implementations do not need their own locking:
/// [`OrderService`](crate::core::service::OrderService) serializes every
/// request through a single lock around the store.
pub trait OrderStore: Send + Sync {
    /// Find an order by id
    fn find(&self, id: &str) -> Result<Option<Order>, StorageError>;

    /// Position of an order in the collection
    fn find_index(&self, id: &str) -> Result<Option<usize>, StorageError>;

    /// Append an order at the end of the collection
    fn push(&mut self, order: Order) -> Result<(), StorageError>;

    /// Replace the order stored at `index`
    fn replace_at(&mut self, index: usize, order: Order) -> Result<(), StorageError>;

    /// Remove and return the order stored at `index`
    fn remove_at(&mut self, index: usize) -> Result<Order, StorageError>;

    /// Every order, in insertion order
    fn all(&self) -> Result<Vec<Order>, StorageError>;

    /// A fresh id, unused by any order currently in the collection
    fn next_id(&self) -> Result<String, StorageError>;

    /// Number of stored orders
    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.all()?.len())
    }

    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
