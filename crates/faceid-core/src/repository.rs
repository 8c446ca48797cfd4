//! Repository abstraction.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::entity::Entity;
use crate::error::DomainError;

/// Keyed storage for one entity type with repository-assigned identifiers.
///
/// Every operation checks `ctx` once before touching state; a fired context
/// yields `DomainError::Cancelled` and leaves the store untouched.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Assigns the next identifier to `entity`, stores it, and returns the id.
    /// Identifiers are never reissued, even after deletion.
    async fn create(&self, ctx: &RequestContext, entity: E) -> Result<u64, DomainError>;

    /// Returns a copy of the entity stored under `id`.
    async fn read(&self, ctx: &RequestContext, id: u64) -> Result<E, DomainError>;

    /// Returns every stored entity, ascending by id. An empty store yields an
    /// empty vector.
    async fn read_all(&self, ctx: &RequestContext) -> Result<Vec<E>, DomainError>;

    /// Writes `entity` under `id` and returns what was written. Whether an
    /// absent `id` is inserted or rejected depends on the implementation's
    /// update policy.
    async fn update(&self, ctx: &RequestContext, id: u64, entity: E) -> Result<E, DomainError>;

    /// Removes the entity stored under `id`.
    async fn delete(&self, ctx: &RequestContext, id: u64) -> Result<(), DomainError>;
}
