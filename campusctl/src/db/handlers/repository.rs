//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Base repository trait providing the operations every table supports.
///
/// A repository is a data access layer for one SQLite table. Entities in this
/// system are insert-only (nothing is updated in place and no delete path is
/// exposed), so the trait covers create, point lookup and listing; anything
/// table-specific (email lookup, bulk insert, joins) lives on the concrete
/// repository.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List entities matching a filter
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;
}
