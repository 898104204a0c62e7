//! Service context - dependency container for services
//!
//! Holds the repositories, the counter store, and the aggregate source the
//! services coordinate. Everything behind a trait object so tests can swap
//! in-memory implementations.

use std::sync::Arc;

use pipe_cache::SharedRedisPool;
use pipe_core::traits::{
    AggregateSource, CounterStore, LivecommentRepository, LivestreamRepository,
    ReactionRepository, ThemeRepository, TipRepository, UserRepository,
};
use pipe_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The counter store (cached aggregate side)
/// - The aggregate source (relational ground truth for rebuilds)
/// - The raw pools for connectivity probes
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    livestream_repo: Arc<dyn LivestreamRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    tip_repo: Arc<dyn TipRepository>,
    livecomment_repo: Arc<dyn LivecommentRepository>,
    theme_repo: Arc<dyn ThemeRepository>,

    // Dual-store seams
    counter_store: Arc<dyn CounterStore>,
    aggregate_source: Arc<dyn AggregateSource>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        user_repo: Arc<dyn UserRepository>,
        livestream_repo: Arc<dyn LivestreamRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        tip_repo: Arc<dyn TipRepository>,
        livecomment_repo: Arc<dyn LivecommentRepository>,
        theme_repo: Arc<dyn ThemeRepository>,
        counter_store: Arc<dyn CounterStore>,
        aggregate_source: Arc<dyn AggregateSource>,
    ) -> Self {
        Self {
            pool,
            redis_pool,
            user_repo,
            livestream_repo,
            reaction_repo,
            tip_repo,
            livecomment_repo,
            theme_repo,
            counter_store,
            aggregate_source,
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the livestream repository
    pub fn livestream_repo(&self) -> &dyn LivestreamRepository {
        self.livestream_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the tip repository
    pub fn tip_repo(&self) -> &dyn TipRepository {
        self.tip_repo.as_ref()
    }

    /// Get the livecomment repository
    pub fn livecomment_repo(&self) -> &dyn LivecommentRepository {
        self.livecomment_repo.as_ref()
    }

    /// Get the theme repository
    pub fn theme_repo(&self) -> &dyn ThemeRepository {
        self.theme_repo.as_ref()
    }

    // === Dual-store seams ===

    /// Get the counter store (cached aggregate side)
    pub fn counter_store(&self) -> &dyn CounterStore {
        self.counter_store.as_ref()
    }

    /// Get the aggregate source (relational ground truth)
    pub fn aggregate_source(&self) -> &dyn AggregateSource {
        self.aggregate_source.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("counter_store", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    livestream_repo: Option<Arc<dyn LivestreamRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    tip_repo: Option<Arc<dyn TipRepository>>,
    livecomment_repo: Option<Arc<dyn LivecommentRepository>>,
    theme_repo: Option<Arc<dyn ThemeRepository>>,
    counter_store: Option<Arc<dyn CounterStore>>,
    aggregate_source: Option<Arc<dyn AggregateSource>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn livestream_repo(mut self, repo: Arc<dyn LivestreamRepository>) -> Self {
        self.livestream_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn tip_repo(mut self, repo: Arc<dyn TipRepository>) -> Self {
        self.tip_repo = Some(repo);
        self
    }

    pub fn livecomment_repo(mut self, repo: Arc<dyn LivecommentRepository>) -> Self {
        self.livecomment_repo = Some(repo);
        self
    }

    pub fn theme_repo(mut self, repo: Arc<dyn ThemeRepository>) -> Self {
        self.theme_repo = Some(repo);
        self
    }

    pub fn counter_store(mut self, store: Arc<dyn CounterStore>) -> Self {
        self.counter_store = Some(store);
        self
    }

    pub fn aggregate_source(mut self, source: Arc<dyn AggregateSource>) -> Self {
        self.aggregate_source = Some(source);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.livestream_repo
                .ok_or_else(|| ServiceError::validation("livestream_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.tip_repo
                .ok_or_else(|| ServiceError::validation("tip_repo is required"))?,
            self.livecomment_repo
                .ok_or_else(|| ServiceError::validation("livecomment_repo is required"))?,
            self.theme_repo
                .ok_or_else(|| ServiceError::validation("theme_repo is required"))?,
            self.counter_store
                .ok_or_else(|| ServiceError::validation("counter_store is required"))?,
            self.aggregate_source
                .ok_or_else(|| ServiceError::validation("aggregate_source is required"))?,
        ))
    }
}
