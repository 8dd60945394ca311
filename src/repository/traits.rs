//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DomainResult, Entity, Ordered};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Binding between an ordered domain entity and its collection table.
///
/// The payload is stored as serialized JSON; the id/position/is_active
/// columns are authoritative and get reapplied when a row is decoded.
pub trait CollectionRecord:
    Entity<Id = u32> + Ordered + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Table backing this collection
    const TABLE: &'static str;

    /// Apply the store-assigned id
    fn set_id(&mut self, id: u32);
}
