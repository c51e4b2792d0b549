//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

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

/// Entities that live on one board (columns, tasks)
#[async_trait]
pub trait BoardScopedRepository<T: Entity>: Send + Sync {
    /// All entities of a board in display order
    async fn list_for_board(&self, board_id: u32) -> DomainResult<Vec<T>>;

    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// Delete by ID, returning the removed entity
    async fn delete(&self, id: T::Id) -> DomainResult<T>;
}
