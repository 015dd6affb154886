//! Collection storage abstraction the dashboard services read from.

pub mod memory;

use crate::domain::common::Identifiable;
use crate::errors::Result;

pub use memory::InMemoryRepository;

/// Abstraction over a collection of entities addressed by id.
///
/// Writes replace the whole collection so a reader sees either the previous or
/// the next snapshot, never a partial update.
pub trait Repository<T: Identifiable>: Send + Sync {
    /// Snapshot of every record in insertion order.
    fn list(&self) -> Result<Vec<T>>;
    fn get(&self, id: &T::Id) -> Result<Option<T>>;
    fn add(&self, item: T) -> Result<()>;
    fn update(&self, item: T) -> Result<()>;
    fn remove(&self, id: &T::Id) -> Result<Option<T>>;
    /// Swaps in a complete new collection.
    fn replace_all(&self, items: Vec<T>) -> Result<()>;
    /// Derives the next collection from the current one while holding the
    /// write lock, so concurrent writers never lose each other's update.
    /// Returns the stored snapshot.
    fn modify(&self, update: &mut dyn FnMut(&[T]) -> Vec<T>) -> Result<Vec<T>>;
}
