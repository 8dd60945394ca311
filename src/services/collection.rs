//! Optimistic Collection Manager
//!
//! Pairs an ordered-collection repository with the in-memory view the admin
//! panel renders. Mutations apply to the view first, then persist; if
//! persistence fails the view is restored to the pre-operation snapshot, so
//! what the owner sees always matches the last known-good state.

use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::{ordering, DomainError, DomainResult, Entity, Ordered};
use crate::repository::{CollectionRecord, CollectionRepository, Repository};

pub struct CollectionManager<T: CollectionRecord> {
    repo: CollectionRepository<T>,
    /// `None` until first loaded from the store
    view: Mutex<Option<Vec<T>>>,
}

impl<T: CollectionRecord> CollectionManager<T> {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self {
            repo: CollectionRepository::new(conn),
            view: Mutex::new(None),
        }
    }

    /// Reload the view from the store
    pub async fn refresh(&self) -> DomainResult<Vec<T>> {
        let items = self.repo.list().await?;
        *self.view.lock().await = Some(items.clone());
        Ok(items)
    }

    async fn loaded<'a>(&self, view: &'a mut Option<Vec<T>>) -> DomainResult<&'a mut Vec<T>> {
        if view.is_none() {
            *view = Some(self.repo.list().await?);
        }
        view.as_mut()
            .ok_or(DomainError::Internal("View not loaded".to_string()))
    }

    /// Admin read: every item, in display order
    pub async fn items(&self) -> DomainResult<Vec<T>> {
        let mut guard = self.view.lock().await;
        let items = self.loaded(&mut guard).await?;
        Ok(items.clone())
    }

    /// Public read: active items only, in display order
    pub async fn active_items(&self) -> DomainResult<Vec<T>> {
        Ok(self
            .items()
            .await?
            .into_iter()
            .filter(|item| item.is_active())
            .collect())
    }

    /// Persist a new item (position assigned by the store) and append it to
    /// the view
    pub async fn create(&self, entity: T) -> DomainResult<T> {
        let mut guard = self.view.lock().await;
        self.loaded(&mut guard).await?;

        let created = self.repo.create(&entity).await?;
        if let Some(items) = guard.as_mut() {
            items.push(created.clone());
        }
        Ok(created)
    }

    /// Replace an item's fields. Ordering only changes through `reorder`,
    /// so the stored position wins over whatever the caller passed.
    pub async fn update(&self, mut entity: T) -> DomainResult<T> {
        let mut guard = self.view.lock().await;
        let items = self.loaded(&mut guard).await?;

        let index = items
            .iter()
            .position(|item| item.id() == entity.id())
            .ok_or_else(|| {
                DomainError::NotFound(format!("{} {} not found", T::TABLE, entity.id()))
            })?;
        entity.set_position(items[index].position());

        let snapshot = items.clone();
        items[index] = entity.clone();

        match self.repo.update(&entity).await {
            Ok(updated) => Ok(updated),
            Err(e) => {
                *guard = Some(snapshot);
                Err(e)
            }
        }
    }

    /// Toggle an item without touching ordering
    pub async fn set_active(&self, id: u32, active: bool) -> DomainResult<()> {
        let mut guard = self.view.lock().await;
        let items = self.loaded(&mut guard).await?;

        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {} not found", T::TABLE, id)))?;

        let snapshot = items.clone();
        items[index].set_active(active);

        match self.repo.set_active(id, active).await {
            Ok(()) => Ok(()),
            Err(e) => {
                *guard = Some(snapshot);
                Err(e)
            }
        }
    }

    /// Remove an item and compact the survivors
    pub async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut guard = self.view.lock().await;
        let items = self.loaded(&mut guard).await?;

        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {} not found", T::TABLE, id)))?;

        let snapshot = items.clone();
        items.remove(index);
        ordering::renumber(items);

        match self.repo.delete(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                *guard = Some(snapshot);
                Err(e)
            }
        }
    }

    /// Drop on a gap: move the item to `target_index` and renumber.
    /// Returns the new sequence on success; on failure the view reverts to
    /// the pre-drag snapshot.
    pub async fn reorder(&self, id: u32, target_index: usize) -> DomainResult<Vec<T>> {
        let mut guard = self.view.lock().await;
        let items = self.loaded(&mut guard).await?;

        let from = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {} not found", T::TABLE, id)))?;

        let snapshot = items.clone();
        ordering::move_entry(items, from, target_index);
        ordering::renumber(items);

        match self.repo.reorder(id, target_index).await {
            Ok(()) => Ok(items.clone()),
            Err(e) => {
                tracing::warn!(table = T::TABLE, error = %e, "reorder failed, restoring view snapshot");
                *guard = Some(snapshot);
                Err(e)
            }
        }
    }

    /// Drop onto another item: insert at that item's current index
    pub async fn reorder_onto(&self, source_id: u32, target_id: u32) -> DomainResult<Vec<T>> {
        let target_index = {
            let mut guard = self.view.lock().await;
            let items = self.loaded(&mut guard).await?;
            items
                .iter()
                .position(|item| item.id() == target_id)
                .ok_or_else(|| {
                    DomainError::NotFound(format!("{} {} not found", T::TABLE, target_id))
                })?
        };
        self.reorder(source_id, target_index).await
    }
}
