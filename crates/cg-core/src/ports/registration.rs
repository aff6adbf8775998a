//! Aggregate registration ports
//!
//! The registration manager owns the character (or other aggregate root)
//! that receives committed selections, e.g. the generation manager. Both
//! operations may suspend: registering a selection can cascade into further
//! bookkeeping on the owning side.

use std::sync::Arc;

use async_trait::async_trait;

use crate::selection::ElementAggregate;

#[async_trait]
pub trait AggregateRegistrationPort: Send + Sync {
    /// Register a committed selection with the owning aggregate root.
    async fn register(&self, aggregate: Arc<ElementAggregate>) -> anyhow::Result<()>;

    /// Reverse a previous registration of exactly this aggregate instance.
    async fn unregister(&self, aggregate: &ElementAggregate) -> anyhow::Result<()>;
}

/// Hands out registration managers to handler factories.
///
/// Whether the returned manager is scoped per call or shared across handlers
/// is the provider's business; callers must not assume either.
pub trait AggregateRegistrationProviderPort: Send + Sync {
    fn aggregate_registration_manager(&self) -> Arc<dyn AggregateRegistrationPort>;
}
