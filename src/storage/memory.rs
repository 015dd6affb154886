use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::domain::common::Identifiable;
use crate::errors::{DashboardError, Result};

use super::Repository;

/// Repository backed by an in-process snapshot.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    snapshot: RwLock<Arc<Vec<T>>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(items)),
        }
    }

    fn current(&self) -> Result<Arc<Vec<T>>> {
        self.snapshot
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| DashboardError::Storage("repository lock poisoned".into()))
    }

    fn swap(&self, next: Vec<T>) -> Result<()> {
        let mut guard = self.write_guard()?;
        *guard = Arc::new(next);
        Ok(())
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Arc<Vec<T>>>> {
        self.snapshot
            .write()
            .map_err(|_| DashboardError::Storage("repository lock poisoned".into()))
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    fn list(&self) -> Result<Vec<T>> {
        Ok(self.current()?.as_ref().clone())
    }

    fn get(&self, id: &T::Id) -> Result<Option<T>> {
        Ok(self.current()?.iter().find(|item| item.id() == *id).cloned())
    }

    fn add(&self, item: T) -> Result<()> {
        let current = self.current()?;
        if current.iter().any(|existing| existing.id() == item.id()) {
            return Err(DashboardError::Duplicate(format!("{:?}", item.id())));
        }
        let mut next = current.as_ref().clone();
        next.push(item);
        self.swap(next)
    }

    fn update(&self, item: T) -> Result<()> {
        let current = self.current()?;
        let id = item.id();
        let position = current
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or_else(|| DashboardError::NotFound(format!("{id:?}")))?;
        let mut next = current.as_ref().clone();
        next[position] = item;
        self.swap(next)
    }

    fn remove(&self, id: &T::Id) -> Result<Option<T>> {
        let current = self.current()?;
        let Some(position) = current.iter().position(|existing| existing.id() == *id) else {
            return Ok(None);
        };
        let mut next = current.as_ref().clone();
        let removed = next.remove(position);
        self.swap(next)?;
        Ok(Some(removed))
    }

    fn replace_all(&self, items: Vec<T>) -> Result<()> {
        self.swap(items)
    }

    fn modify(&self, update: &mut dyn FnMut(&[T]) -> Vec<T>) -> Result<Vec<T>> {
        let mut guard = self.write_guard()?;
        let next = update(guard.as_slice());
        *guard = Arc::new(next.clone());
        Ok(next)
    }
}
