//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, CACHE_GUARD,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Initialize Tests
// ============================================================================

#[tokio::test]
async fn test_initialize_reports_language() {
    if !check_test_env().await {
        return;
    }
    let _guard = CACHE_GUARD.write().await;

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_empty("/api/initialize").await.unwrap();
    let body: InitializeBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.language, "rust");
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_post_and_list_reactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let (viewer_id, _) = seed_user(&pool).await.unwrap();
    let (streamer_id, _) = seed_user(&pool).await.unwrap();
    let livestream_id = seed_livestream(&pool, streamer_id).await.unwrap();

    let request = PostReaction {
        user_id: viewer_id,
        emoji: "tada".to_string(),
    };
    let path = format!("/api/livestream/{livestream_id}/reaction");
    let response = server.post(&path, &request).await.unwrap();
    let reaction: ReactionBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(reaction.user_id, viewer_id);
    assert_eq!(reaction.livestream_id, livestream_id);
    assert_eq!(reaction.emoji, "tada");

    let response = server.get(&path).await.unwrap();
    let listed: Vec<ReactionBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|r| r.id == reaction.id));
}

#[tokio::test]
async fn test_post_reaction_unknown_livestream() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let (viewer_id, _) = seed_user(&pool).await.unwrap();

    let request = PostReaction {
        user_id: viewer_id,
        emoji: "tada".to_string(),
    };
    let response = server
        .post("/api/livestream/999999999/reaction", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_post_reaction_invalid_path() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = PostReaction {
        user_id: 1,
        emoji: "tada".to_string(),
    };
    let response = server
        .post("/api/livestream/not-a-number/reaction", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Tip Tests
// ============================================================================

#[tokio::test]
async fn test_post_tip_updates_statistics() {
    if !check_test_env().await {
        return;
    }
    let _guard = CACHE_GUARD.read().await;

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let (viewer_id, viewer_name) = seed_user(&pool).await.unwrap();
    let (streamer_id, _) = seed_user(&pool).await.unwrap();
    let livestream_id = seed_livestream(&pool, streamer_id).await.unwrap();

    let request = PostTip {
        user_id: viewer_id,
        amount: 500,
    };
    let path = format!("/api/livestream/{livestream_id}/tip");
    let response = server.post(&path, &request).await.unwrap();
    let tip: TipBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(tip.amount, 500);

    let path = format!("/api/livestream/{livestream_id}/statistics");
    let response = server.get(&path).await.unwrap();
    let stats: StatisticsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_tips, 500);
    assert_eq!(stats.total_reactions, 0);

    // Per-user totals are attributed to the tipping user.
    let path = format!("/api/user/{viewer_name}/statistics");
    let response = server.get(&path).await.unwrap();
    let stats: StatisticsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_tips, 500);
}

#[tokio::test]
async fn test_post_tip_rejects_non_positive_amount() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let (viewer_id, _) = seed_user(&pool).await.unwrap();
    let (streamer_id, _) = seed_user(&pool).await.unwrap();
    let livestream_id = seed_livestream(&pool, streamer_id).await.unwrap();

    let request = PostTip {
        user_id: viewer_id,
        amount: 0,
    };
    let path = format!("/api/livestream/{livestream_id}/tip");
    let response = server.post(&path, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Livecomment Tests
// ============================================================================

#[tokio::test]
async fn test_post_livecomment_does_not_move_counters() {
    if !check_test_env().await {
        return;
    }
    let _guard = CACHE_GUARD.read().await;

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let (viewer_id, _) = seed_user(&pool).await.unwrap();
    let (streamer_id, _) = seed_user(&pool).await.unwrap();
    let livestream_id = seed_livestream(&pool, streamer_id).await.unwrap();

    let request = PostLivecomment {
        user_id: viewer_id,
        comment: "hello stream".to_string(),
    };
    let path = format!("/api/livestream/{livestream_id}/livecomment");
    let response = server.post(&path, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/livestream/{livestream_id}/statistics");
    let response = server.get(&path).await.unwrap();
    let stats: StatisticsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_reactions, 0);
    assert_eq!(stats.total_tips, 0);
}

// ============================================================================
// Theme Tests
// ============================================================================

#[tokio::test]
async fn test_theme_defaults_and_roundtrips() {
    if !check_test_env().await {
        return;
    }
    let _guard = CACHE_GUARD.read().await;

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let (_, username) = seed_user(&pool).await.unwrap();

    let path = format!("/api/user/{username}/theme");
    let response = server.get(&path).await.unwrap();
    let theme: ThemeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!theme.dark_mode);

    let response = server.post(&path, &PostTheme { dark_mode: true }).await.unwrap();
    let theme: ThemeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(theme.dark_mode);

    let response = server.get(&path).await.unwrap();
    let theme: ThemeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(theme.dark_mode);
}

#[tokio::test]
async fn test_theme_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/user/no-such-user/theme").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Rebuild Tests
// ============================================================================

#[tokio::test]
async fn test_initialize_rebuilds_counters_from_rows() {
    if !check_test_env().await {
        return;
    }
    let _guard = CACHE_GUARD.write().await;

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let (viewer_id, viewer_name) = seed_user(&pool).await.unwrap();
    let (streamer_id, _) = seed_user(&pool).await.unwrap();
    let livestream_id = seed_livestream(&pool, streamer_id).await.unwrap();

    // Rows written behind the API are invisible until a rebuild.
    sqlx::query("INSERT INTO reactions (user_id, livestream_id, emoji) VALUES ($1, $2, 'heart')")
        .bind(viewer_id)
        .bind(livestream_id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO tips (user_id, livestream_id, amount) VALUES ($1, $2, 1200)")
        .bind(viewer_id)
        .bind(livestream_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = server.post_empty("/api/initialize").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let path = format!("/api/user/{viewer_name}/statistics");
    let response = server.get(&path).await.unwrap();
    let stats: StatisticsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_reactions, 1);
    assert_eq!(stats.total_tips, 1200);
}
