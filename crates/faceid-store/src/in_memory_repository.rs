//! Mutex-guarded in-memory implementation of the `Repository` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use faceid_core::context::RequestContext;
use faceid_core::entity::Entity;
use faceid_core::error::DomainError;
use faceid_core::repository::Repository;

use crate::policy::UpdatePolicy;

#[derive(Debug)]
struct State<E> {
    /// Last issued identifier. Zero means nothing has been created yet.
    sequence: u64,
    entities: HashMap<u64, E>,
}

/// In-memory repository for a single entity type.
///
/// A single mutex serializes every operation, reads included. The
/// request context is checked once per call, while the lock is held and
/// before anything is mutated.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    state: Mutex<State<E>>,
    update_policy: UpdatePolicy,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Creates an empty repository with the default [`UpdatePolicy::Upsert`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_update_policy(UpdatePolicy::default())
    }

    /// Creates an empty repository with the given update policy.
    #[must_use]
    pub fn with_update_policy(update_policy: UpdatePolicy) -> Self {
        Self {
            state: Mutex::new(State {
                sequence: 0,
                entities: HashMap::new(),
            }),
            update_policy,
        }
    }

    /// Returns the configured update policy.
    #[must_use]
    pub fn update_policy(&self) -> UpdatePolicy {
        self.update_policy
    }

    /// Returns the last issued identifier.
    pub async fn sequence(&self) -> u64 {
        self.state.lock().await.sequence
    }

    fn not_found(id: u64) -> DomainError {
        DomainError::NotFound {
            entity: E::KIND,
            id,
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn create(&self, ctx: &RequestContext, mut entity: E) -> Result<u64, DomainError> {
        let mut state = self.state.lock().await;
        ctx.check()?;

        state.sequence += 1;
        let id = state.sequence;
        entity.set_id(id);
        state.entities.insert(id, entity);

        Ok(id)
    }

    async fn read(&self, ctx: &RequestContext, id: u64) -> Result<E, DomainError> {
        let state = self.state.lock().await;
        ctx.check()?;

        state
            .entities
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn read_all(&self, ctx: &RequestContext) -> Result<Vec<E>, DomainError> {
        let state = self.state.lock().await;
        ctx.check()?;

        let mut all: Vec<E> = state.entities.values().cloned().collect();
        all.sort_unstable_by_key(E::id);
        Ok(all)
    }

    async fn update(&self, ctx: &RequestContext, id: u64, entity: E) -> Result<E, DomainError> {
        let mut state = self.state.lock().await;
        ctx.check()?;

        if self.update_policy == UpdatePolicy::RequireExisting && !state.entities.contains_key(&id)
        {
            return Err(Self::not_found(id));
        }
        state.entities.insert(id, entity.clone());

        Ok(entity)
    }

    async fn delete(&self, ctx: &RequestContext, id: u64) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        ctx.check()?;

        state
            .entities
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Badge {
        id: u64,
        label: &'static str,
    }

    impl Entity for Badge {
        const KIND: &'static str = "badge";

        fn id(&self) -> u64 {
            self.id
        }

        fn set_id(&mut self, id: u64) {
            self.id = id;
        }
    }

    fn badge(label: &'static str) -> Badge {
        Badge { id: 0, label }
    }

    #[tokio::test]
    async fn test_create_ignores_incoming_id() {
        // Arrange
        let repo = InMemoryRepository::new();
        let ctx = RequestContext::background();

        // Act
        let id = repo
            .create(&ctx, Badge { id: 99, label: "a" })
            .await
            .unwrap();

        // Assert
        assert_eq!(id, 1);
        assert_eq!(repo.read(&ctx, 1).await.unwrap().id, 1);
        assert!(repo.read(&ctx, 99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_sequence_tracks_creates_only() {
        let repo = InMemoryRepository::new();
        let ctx = RequestContext::background();

        repo.create(&ctx, badge("a")).await.unwrap();
        repo.create(&ctx, badge("b")).await.unwrap();
        repo.update(&ctx, 50, badge("c")).await.unwrap();
        repo.delete(&ctx, 1).await.unwrap();

        assert_eq!(repo.sequence().await, 2);
    }

    #[tokio::test]
    async fn test_require_existing_rejects_absent_id_without_writing() {
        // Arrange
        let repo = InMemoryRepository::with_update_policy(UpdatePolicy::RequireExisting);
        let ctx = RequestContext::background();

        // Act
        let result = repo.update(&ctx, 3, badge("ghost")).await;

        // Assert
        assert_eq!(
            result,
            Err(DomainError::NotFound {
                entity: "badge",
                id: 3
            })
        );
        assert!(repo.read_all(&ctx).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_require_existing_overwrites_present_id() {
        let repo = InMemoryRepository::with_update_policy(UpdatePolicy::RequireExisting);
        let ctx = RequestContext::background();
        let id = repo.create(&ctx, badge("old")).await.unwrap();

        let written = repo
            .update(&ctx, id, Badge { id, label: "new" })
            .await
            .unwrap();

        assert_eq!(written.label, "new");
        assert_eq!(repo.read(&ctx, id).await.unwrap().label, "new");
    }

    #[tokio::test]
    async fn test_update_policy_accessor() {
        let repo: InMemoryRepository<Badge> = InMemoryRepository::default();
        assert_eq!(repo.update_policy(), UpdatePolicy::Upsert);
    }
}
