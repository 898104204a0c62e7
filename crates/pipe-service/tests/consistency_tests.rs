//! Service-level consistency tests
//!
//! Exercise the rebuild and the incremental counter path against in-memory
//! repositories and an in-memory counter store, so the cache/ground-truth
//! equivalence can be checked without live backends.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use pipe_cache::{keys, MemoryCounterStore, RedisPool, RedisPoolConfig};
use pipe_core::traits::{
    AggregateSnapshot, AggregateSource, CounterStore, LivecommentRepository, LivestreamCount,
    LivestreamRepository, ReactionRepository, RepoResult, StoreResult, ThemeRepository,
    TipRepository, UserCount, UserFlag, UserRepository,
};
use pipe_core::{
    DomainError, Livecomment, Livestream, NewLivecomment, NewReaction, NewTip, Reaction, Theme,
    Tip, User,
};
use pipe_service::dto::{
    PostReactionRequest, PostTipRequest, UpdateThemeRequest,
};
use pipe_service::{
    ReactionService, RebuildService, ServiceContext, ServiceContextBuilder, StatisticsService,
    ThemeService, TipService,
};

// ============================================================================
// In-memory backend
// ============================================================================

/// Shared in-memory tables standing in for the relational store
#[derive(Default)]
struct MemoryBackend {
    next_id: AtomicI64,
    users: Mutex<Vec<User>>,
    livestreams: Mutex<Vec<Livestream>>,
    reactions: Mutex<Vec<Reaction>>,
    tips: Mutex<Vec<Tip>>,
    livecomments: Mutex<Vec<Livecomment>>,
    themes: Mutex<HashMap<i64, bool>>,
}

impl MemoryBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        })
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn add_user(&self, id: i64, name: &str) {
        self.users.lock().unwrap().push(User {
            id,
            name: name.to_string(),
            display_name: name.to_string(),
            description: String::new(),
        });
    }

    fn add_livestream(&self, id: i64, user_id: i64) {
        let now = Utc::now();
        self.livestreams.lock().unwrap().push(Livestream {
            id,
            user_id,
            title: format!("stream {id}"),
            description: String::new(),
            start_at: now,
            end_at: now + Duration::hours(2),
        });
    }

    fn seed_reaction(&self, user_id: i64, livestream_id: i64) {
        let id = self.assign_id();
        self.reactions.lock().unwrap().push(Reaction {
            id,
            user_id,
            livestream_id,
            emoji: "🎉".to_string(),
            created_at: Utc::now(),
        });
    }

    fn seed_tip(&self, user_id: i64, livestream_id: i64, amount: i64) {
        let id = self.assign_id();
        self.tips.lock().unwrap().push(Tip {
            id,
            user_id,
            livestream_id,
            amount,
            created_at: Utc::now(),
        });
    }
}

/// Repository and aggregate-source facade over `MemoryBackend`
struct MemoryRepo(Arc<MemoryBackend>);

#[async_trait]
impl UserRepository for MemoryRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().iter().find(|u| u.name == name).cloned())
    }
}

#[async_trait]
impl LivestreamRepository for MemoryRepo {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Livestream>> {
        Ok(self
            .0
            .livestreams
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Livestream>> {
        Ok(self
            .0
            .livestreams
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReactionRepository for MemoryRepo {
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction> {
        let row = Reaction {
            id: self.0.assign_id(),
            user_id: reaction.user_id,
            livestream_id: reaction.livestream_id,
            emoji: reaction.emoji.clone(),
            created_at: Utc::now(),
        };
        self.0.reactions.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_livestream(&self, livestream_id: i64) -> RepoResult<Vec<Reaction>> {
        let mut rows: Vec<_> = self
            .0
            .reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.livestream_id == livestream_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| std::cmp::Reverse(r.id));
        Ok(rows)
    }
}

#[async_trait]
impl TipRepository for MemoryRepo {
    async fn create(&self, tip: &NewTip) -> RepoResult<Tip> {
        let row = Tip {
            id: self.0.assign_id(),
            user_id: tip.user_id,
            livestream_id: tip.livestream_id,
            amount: tip.amount,
            created_at: Utc::now(),
        };
        self.0.tips.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_livestream(&self, livestream_id: i64) -> RepoResult<Vec<Tip>> {
        let mut rows: Vec<_> = self
            .0
            .tips
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.livestream_id == livestream_id)
            .cloned()
            .collect();
        rows.sort_by_key(|t| std::cmp::Reverse(t.id));
        Ok(rows)
    }
}

#[async_trait]
impl LivecommentRepository for MemoryRepo {
    async fn create(&self, comment: &NewLivecomment) -> RepoResult<Livecomment> {
        let row = Livecomment {
            id: self.0.assign_id(),
            user_id: comment.user_id,
            livestream_id: comment.livestream_id,
            comment: comment.comment.clone(),
            created_at: Utc::now(),
        };
        self.0.livecomments.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_livestream(
        &self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Livecomment>> {
        let mut rows: Vec<_> = self
            .0
            .livecomments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.livestream_id == livestream_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| std::cmp::Reverse(c.id));
        if let Some(limit) = limit {
            rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(rows)
    }
}

#[async_trait]
impl ThemeRepository for MemoryRepo {
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Theme>> {
        Ok(self
            .0
            .themes
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|&dark_mode| Theme::new(user_id, dark_mode)))
    }

    async fn upsert(&self, theme: &Theme) -> RepoResult<()> {
        self.0.themes.lock().unwrap().insert(theme.user_id, theme.dark_mode);
        Ok(())
    }
}

#[async_trait]
impl AggregateSource for MemoryRepo {
    async fn snapshot(&self) -> StoreResult<AggregateSnapshot> {
        let mut reactions_by_user: HashMap<i64, i64> = HashMap::new();
        let mut reactions_by_livestream: HashMap<i64, i64> = HashMap::new();
        for r in self.0.reactions.lock().unwrap().iter() {
            *reactions_by_user.entry(r.user_id).or_insert(0) += 1;
            *reactions_by_livestream.entry(r.livestream_id).or_insert(0) += 1;
        }

        let mut tips_by_user: HashMap<i64, i64> = HashMap::new();
        let mut tips_by_livestream: HashMap<i64, i64> = HashMap::new();
        for t in self.0.tips.lock().unwrap().iter() {
            *tips_by_user.entry(t.user_id).or_insert(0) += t.amount;
            *tips_by_livestream.entry(t.livestream_id).or_insert(0) += t.amount;
        }

        let themes = self
            .0
            .themes
            .lock()
            .unwrap()
            .iter()
            .map(|(&user_id, &value)| UserFlag { user_id, value })
            .collect();

        Ok(AggregateSnapshot {
            reactions_by_user: reactions_by_user
                .into_iter()
                .map(|(user_id, total)| UserCount { user_id, total })
                .collect(),
            reactions_by_livestream: reactions_by_livestream
                .into_iter()
                .map(|(livestream_id, total)| LivestreamCount {
                    livestream_id,
                    total,
                })
                .collect(),
            tips_by_user: tips_by_user
                .into_iter()
                .map(|(user_id, total)| UserCount { user_id, total })
                .collect(),
            tips_by_livestream: tips_by_livestream
                .into_iter()
                .map(|(livestream_id, total)| LivestreamCount {
                    livestream_id,
                    total,
                })
                .collect(),
            themes,
        })
    }
}

/// Counter store whose every operation fails, for drift-path tests
struct FailingStore;

#[async_trait]
impl CounterStore for FailingStore {
    async fn set_counter(&self, _key: &str, _value: i64) -> StoreResult<()> {
        Err(DomainError::CacheError("store down".to_string()))
    }

    async fn get_counter(&self, _key: &str) -> StoreResult<Option<i64>> {
        Err(DomainError::CacheError("store down".to_string()))
    }

    async fn incr_by(&self, _key: &str, _delta: i64) -> StoreResult<i64> {
        Err(DomainError::CacheError("store down".to_string()))
    }

    async fn set_flag(&self, _key: &str, _value: bool) -> StoreResult<()> {
        Err(DomainError::CacheError("store down".to_string()))
    }

    async fn get_flag(&self, _key: &str) -> StoreResult<Option<bool>> {
        Err(DomainError::CacheError("store down".to_string()))
    }

    async fn flush_all(&self) -> StoreResult<()> {
        Err(DomainError::CacheError("store down".to_string()))
    }
}

fn build_context(backend: &Arc<MemoryBackend>, store: Arc<dyn CounterStore>) -> ServiceContext {
    let repo = Arc::new(MemoryRepo(Arc::clone(backend)));
    // Lazy pool; never actually connects in these tests
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost:5432/unused")
        .unwrap();
    let redis_pool = Arc::new(RedisPool::new(RedisPoolConfig::default()).unwrap());

    ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(redis_pool)
        .user_repo(repo.clone())
        .livestream_repo(repo.clone())
        .reaction_repo(repo.clone())
        .tip_repo(repo.clone())
        .livecomment_repo(repo.clone())
        .theme_repo(repo.clone())
        .counter_store(store)
        .aggregate_source(repo)
        .build()
        .unwrap()
}

// ============================================================================
// Rebuild
// ============================================================================

#[tokio::test]
async fn test_rebuild_populates_counters_from_ground_truth() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");
    backend.add_user(2, "bob");
    backend.add_livestream(100, 1);
    backend.add_livestream(200, 2);

    backend.seed_reaction(1, 100);
    backend.seed_reaction(1, 200);
    backend.seed_reaction(2, 100);
    backend.seed_tip(1, 100, 500);
    backend.seed_tip(2, 100, 300);
    backend.themes.lock().unwrap().insert(2, true);

    let store = Arc::new(MemoryCounterStore::new());
    let ctx = build_context(&backend, store.clone());

    RebuildService::new(&ctx).rebuild().await.unwrap();

    assert_eq!(
        store.get_counter(&keys::total_reactions_key(1)).await.unwrap(),
        Some(2)
    );
    assert_eq!(
        store.get_counter(&keys::livestream_reactions_key(100)).await.unwrap(),
        Some(2)
    );
    assert_eq!(
        store.get_counter(&keys::total_tips_key(1)).await.unwrap(),
        Some(500)
    );
    assert_eq!(
        store.get_counter(&keys::livestream_tips_key(100)).await.unwrap(),
        Some(800)
    );
    assert_eq!(
        store.get_flag(&keys::theme_dark_key(2)).await.unwrap(),
        Some(true)
    );
    // No row for alice means no flag key either
    assert_eq!(store.get_flag(&keys::theme_dark_key(1)).await.unwrap(), None);
}

#[tokio::test]
async fn test_rebuild_is_idempotent() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");
    backend.add_livestream(100, 1);
    backend.seed_reaction(1, 100);
    backend.seed_tip(1, 100, 250);

    let store = Arc::new(MemoryCounterStore::new());
    let ctx = build_context(&backend, store.clone());
    let rebuild = RebuildService::new(&ctx);

    rebuild.rebuild().await.unwrap();
    let first = store.get_counter(&keys::livestream_tips_key(100)).await.unwrap();

    rebuild.rebuild().await.unwrap();
    let second = store.get_counter(&keys::livestream_tips_key(100)).await.unwrap();

    assert_eq!(first, Some(250));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_rebuild_wipes_stale_keys() {
    let backend = MemoryBackend::new();
    let store = Arc::new(MemoryCounterStore::new());
    store.set_counter("total_tip:999", 12345).await.unwrap();

    let ctx = build_context(&backend, store.clone());
    RebuildService::new(&ctx).rebuild().await.unwrap();

    // Empty relational store plus a successful rebuild means an empty cache
    assert_eq!(store.get_counter("total_tip:999").await.unwrap(), None);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_rebuild_reports_failure_when_store_is_down() {
    let backend = MemoryBackend::new();
    let ctx = build_context(&backend, Arc::new(FailingStore));

    let err = RebuildService::new(&ctx).rebuild().await.unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.error_code(), "INITIALIZATION_FAILED");
}

// ============================================================================
// Incremental path
// ============================================================================

#[tokio::test]
async fn test_incremental_updates_match_rebuild() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");
    backend.add_user(2, "bob");
    backend.add_livestream(100, 1);
    backend.seed_reaction(2, 100);
    backend.seed_tip(2, 100, 100);

    let store = Arc::new(MemoryCounterStore::new());
    let ctx = build_context(&backend, store.clone());
    RebuildService::new(&ctx).rebuild().await.unwrap();

    // Write through the services on top of the rebuilt baseline
    ReactionService::new(&ctx)
        .post_reaction(
            100,
            PostReactionRequest {
                user_id: 1,
                emoji: "👍".to_string(),
            },
        )
        .await
        .unwrap();
    TipService::new(&ctx)
        .post_tip(
            100,
            PostTipRequest {
                user_id: 1,
                amount: 400,
            },
        )
        .await
        .unwrap();

    let incr_reactions = store
        .get_counter(&keys::livestream_reactions_key(100))
        .await
        .unwrap();
    let incr_tips = store
        .get_counter(&keys::livestream_tips_key(100))
        .await
        .unwrap();

    // A fresh rebuild from ground truth must land on the same totals
    RebuildService::new(&ctx).rebuild().await.unwrap();
    assert_eq!(
        store.get_counter(&keys::livestream_reactions_key(100)).await.unwrap(),
        incr_reactions
    );
    assert_eq!(
        store.get_counter(&keys::livestream_tips_key(100)).await.unwrap(),
        incr_tips
    );
    assert_eq!(incr_reactions, Some(2));
    assert_eq!(incr_tips, Some(500));
}

#[tokio::test]
async fn test_concurrent_reactions_all_counted() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");
    backend.add_livestream(100, 1);

    let store = Arc::new(MemoryCounterStore::new());
    let ctx = build_context(&backend, store.clone());
    RebuildService::new(&ctx).rebuild().await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..25 {
                ReactionService::new(&ctx)
                    .post_reaction(
                        100,
                        PostReactionRequest {
                            user_id: 1,
                            emoji: "🎉".to_string(),
                        },
                    )
                    .await
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(
        store.get_counter(&keys::livestream_reactions_key(100)).await.unwrap(),
        Some(200)
    );
    assert_eq!(
        store.get_counter(&keys::total_reactions_key(1)).await.unwrap(),
        Some(200)
    );
    assert_eq!(backend.reactions.lock().unwrap().len(), 200);
}

#[tokio::test]
async fn test_cache_failure_does_not_fail_the_write() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");
    backend.add_livestream(100, 1);

    let ctx = build_context(&backend, Arc::new(FailingStore));

    let response = ReactionService::new(&ctx)
        .post_reaction(
            100,
            PostReactionRequest {
                user_id: 1,
                emoji: "👍".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(response.livestream_id, 100);
    // The relational row committed even though every counter update failed
    assert_eq!(backend.reactions.lock().unwrap().len(), 1);
}

// ============================================================================
// Validation and lookups
// ============================================================================

#[tokio::test]
async fn test_post_reaction_unknown_livestream() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");

    let ctx = build_context(&backend, Arc::new(MemoryCounterStore::new()));
    let err = ReactionService::new(&ctx)
        .post_reaction(
            999,
            PostReactionRequest {
                user_id: 1,
                emoji: "👍".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_tip_amount_must_be_positive() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");
    backend.add_livestream(100, 1);

    let store = Arc::new(MemoryCounterStore::new());
    let ctx = build_context(&backend, store.clone());

    for amount in [0, -50] {
        let err = TipService::new(&ctx)
            .post_tip(100, PostTipRequest { user_id: 1, amount })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_TIP_AMOUNT");
    }

    // Rejected tips leave no trace in either store
    assert!(backend.tips.lock().unwrap().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_statistics_default_to_zero() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");
    backend.add_livestream(100, 1);

    let ctx = build_context(&backend, Arc::new(MemoryCounterStore::new()));
    let stats = StatisticsService::new(&ctx)
        .user_statistics("alice")
        .await
        .unwrap();

    assert_eq!(stats.total_reactions, 0);
    assert_eq!(stats.total_tips, 0);

    let stats = StatisticsService::new(&ctx)
        .livestream_statistics(100)
        .await
        .unwrap();
    assert_eq!(stats.total_reactions, 0);
    assert_eq!(stats.total_tips, 0);
}

#[tokio::test]
async fn test_statistics_unknown_user() {
    let backend = MemoryBackend::new();
    let ctx = build_context(&backend, Arc::new(MemoryCounterStore::new()));

    let err = StatisticsService::new(&ctx)
        .user_statistics("nobody")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_theme_defaults_to_light_and_roundtrips() {
    let backend = MemoryBackend::new();
    backend.add_user(1, "alice");

    let store = Arc::new(MemoryCounterStore::new());
    let ctx = build_context(&backend, store.clone());
    let themes = ThemeService::new(&ctx);

    // Absent flag reads as light mode
    assert!(!themes.get_theme("alice").await.unwrap().dark_mode);

    themes
        .set_theme("alice", UpdateThemeRequest { dark_mode: true })
        .await
        .unwrap();
    assert!(themes.get_theme("alice").await.unwrap().dark_mode);
    assert_eq!(backend.themes.lock().unwrap().get(&1), Some(&true));

    // Latest write wins
    themes
        .set_theme("alice", UpdateThemeRequest { dark_mode: false })
        .await
        .unwrap();
    assert!(!themes.get_theme("alice").await.unwrap().dark_mode);

    // A rebuild from the relational row reproduces the flag
    RebuildService::new(&ctx).rebuild().await.unwrap();
    assert_eq!(
        store.get_flag(&keys::theme_dark_key(1)).await.unwrap(),
        Some(false)
    );
}
