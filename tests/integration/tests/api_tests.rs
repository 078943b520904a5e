//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
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
// Admin Session Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_admin_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/admin/login", &serde_json::json!({ "password": "wrong" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/admin/posts", &CreatePostRequest::news())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Post CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePostRequest::news();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();
    let created: PostDetailResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.slug, request.slug);
    assert_eq!(created.post_type, "news");
    assert_eq!(created.views, 0);
    assert!(created.reading_time_minutes >= 1);

    let response = server
        .get(&format!("/api/v1/posts/{}", request.slug))
        .await
        .unwrap();
    let fetched: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn test_fetch_counts_views() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePostRequest::news();
    server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();

    let path = format!("/api/v1/posts/{}", request.slug);
    server.get(&path).await.unwrap();
    let response = server.get(&path).await.unwrap();
    let fetched: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The second fetch sees at least the first fetch's view
    assert!(fetched.views >= 1, "views = {}", fetched.views);
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/posts/this-slug-does-not-exist")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePostRequest::news();
    server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_review_keeps_specification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePostRequest::review();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();
    let created: PostDetailResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let spec = created.specification.expect("review should carry its specification");
    assert_eq!(spec.make, "Lotus");
    assert_eq!(spec.year, 2024);
}

#[tokio::test]
async fn test_incomplete_specification_is_rejected_before_write() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let mut request = CreatePostRequest::review();
    request.specification = Some(SpecificationRequest::missing_model());

    let response = server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Nothing was written: the slug is still free
    let response = server
        .get(&format!("/api/v1/posts/{}", request.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_recomputes_reading_time() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePostRequest::guide();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();
    let created: PostDetailResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.reading_time_minutes, 1);

    let long_content = vec!["word"; 450].join(" ");
    let response = server
        .patch_auth(
            &format!("/api/v1/admin/posts/{}", created.id),
            &token,
            &serde_json::json!({ "content": long_content }),
        )
        .await
        .unwrap();
    let updated: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // 450 words at 200 wpm
    assert_eq!(updated.reading_time_minutes, 3);
}

#[tokio::test]
async fn test_delete_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePostRequest::news();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &request)
        .await
        .unwrap();
    let created: PostDetailResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/admin/posts/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}", request.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Featured Post Tests
// ============================================================================

#[tokio::test]
async fn test_featuring_is_exclusive() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let first = CreatePostRequest::news();
    let second = CreatePostRequest::news();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &first)
        .await
        .unwrap();
    let first_post: PostDetailResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth("/api/v1/admin/posts", &token, &second)
        .await
        .unwrap();
    let second_post: PostDetailResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Feature the first, then the second; only the second may remain featured
    let response = server
        .put_auth(
            &format!("/api/v1/admin/posts/{}/featured", first_post.id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/admin/posts/{}/featured", second_post.id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/posts/front-page").await.unwrap();
    let page: FrontPageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let featured = page.featured.expect("a featured post must exist");
    assert_eq!(featured.id, second_post.id);
    // The featured post never repeats in the recent list
    assert!(page.posts.iter().all(|p| p.id != featured.id));
}

// ============================================================================
// Reaction Tests
// ============================================================================

async fn create_post(server: &TestServer, token: &str) -> (String, PostDetailResponse) {
    let request = CreatePostRequest::news();
    let response = server
        .post_auth("/api/v1/admin/posts", token, &request)
        .await
        .unwrap();
    let post: PostDetailResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request.slug, post)
}

#[tokio::test]
async fn test_like_then_unlike() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let (slug, _) = create_post(&server, &token).await;
    let viewer = format!("viewer-{}", unique_suffix());

    let path = format!("/api/v1/posts/{slug}/reactions/like");
    let response = server.put_as_viewer(&path, &viewer).await.unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((state.likes, state.dislikes), (1, 0));
    assert_eq!(state.viewer_reaction, "liked");

    // Repeating the reaction removes it
    let response = server.put_as_viewer(&path, &viewer).await.unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((state.likes, state.dislikes), (0, 0));
    assert_eq!(state.viewer_reaction, "none");
}

#[tokio::test]
async fn test_switch_reaction() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let (slug, _) = create_post(&server, &token).await;
    let viewer = format!("viewer-{}", unique_suffix());

    server
        .put_as_viewer(&format!("/api/v1/posts/{slug}/reactions/like"), &viewer)
        .await
        .unwrap();

    let response = server
        .put_as_viewer(&format!("/api/v1/posts/{slug}/reactions/dislike"), &viewer)
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!((state.likes, state.dislikes), (0, 1));
    assert_eq!(state.viewer_reaction, "disliked");
}

#[tokio::test]
async fn test_like_dislike_dislike_nets_to_zero() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let (slug, _) = create_post(&server, &token).await;
    let viewer = format!("viewer-{}", unique_suffix());

    for kind in ["like", "dislike", "dislike"] {
        server
            .put_as_viewer(&format!("/api/v1/posts/{slug}/reactions/{kind}"), &viewer)
            .await
            .unwrap();
    }

    let response = server
        .get_as_viewer(&format!("/api/v1/posts/{slug}/reactions"), &viewer)
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!((state.likes, state.dislikes), (0, 0));
    assert_eq!(state.viewer_reaction, "none");
}

#[tokio::test]
async fn test_counts_aggregate_across_viewers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let (slug, _) = create_post(&server, &token).await;

    let first = format!("viewer-{}", unique_suffix());
    let second = format!("viewer-{}", unique_suffix());

    server
        .put_as_viewer(&format!("/api/v1/posts/{slug}/reactions/like"), &first)
        .await
        .unwrap();
    let response = server
        .put_as_viewer(&format!("/api/v1/posts/{slug}/reactions/dislike"), &second)
        .await
        .unwrap();
    let state: ReactionStateResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!((state.likes, state.dislikes), (1, 1));
    // The second viewer sees their own standing, not the first's
    assert_eq!(state.viewer_reaction, "disliked");
}

#[tokio::test]
async fn test_unknown_reaction_kind_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let (slug, _) = create_post(&server, &token).await;

    let response = server
        .put_as_viewer(&format!("/api/v1/posts/{slug}/reactions/meh"), "viewer-x")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comments_roundtrip_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let (slug, _) = create_post(&server, &token).await;
    let viewer = format!("viewer-{}", unique_suffix());

    let path = format!("/api/v1/posts/{slug}/comments");
    for content in ["first", "second"] {
        let response = server
            .post_as_viewer(&path, &viewer, &AddCommentRequest::simple(content))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get(&path).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "second");
    assert_eq!(comments[1].content, "first");
}

#[tokio::test]
async fn test_empty_comment_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let (slug, _) = create_post(&server, &token).await;

    let response = server
        .post_as_viewer(
            &format!("/api/v1/posts/{slug}/comments"),
            "viewer-x",
            &AddCommentRequest::simple(""),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Subscriber Tests
// ============================================================================

#[tokio::test]
async fn test_subscribe_and_unsubscribe() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = format!("reader{}@example.com", unique_suffix());

    let response = server
        .post("/api/v1/subscribers", &serde_json::json!({ "email": email }))
        .await
        .unwrap();
    let subscriber: SubscriberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(subscriber.active);

    let response = server
        .delete(&format!("/api/v1/subscribers/{email}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Re-subscribing reactivates rather than conflicting
    let response = server
        .post("/api/v1/subscribers", &serde_json::json!({ "email": email }))
        .await
        .unwrap();
    let subscriber: SubscriberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(subscriber.active);
}

#[tokio::test]
async fn test_unsubscribe_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .delete("/api/v1/subscribers/nobody@example.com")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_subscribe_invalid_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/subscribers", &serde_json::json!({ "email": "not-an-email" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Analytics Tests
// ============================================================================

#[tokio::test]
async fn test_analytics_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    // Seed at least one post of each type
    for request in [
        CreatePostRequest::review(),
        CreatePostRequest::news(),
        CreatePostRequest::guide(),
    ] {
        server
            .post_auth("/api/v1/admin/posts", &token, &request)
            .await
            .unwrap();
    }

    let response = server.get_auth("/api/v1/admin/analytics", &token).await.unwrap();
    let analytics: AnalyticsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Fixed type order and counts summing to the total
    assert_eq!(analytics.posts_by_type.len(), 3);
    assert_eq!(analytics.posts_by_type[0].name, "Review");
    assert_eq!(analytics.posts_by_type[1].name, "News");
    assert_eq!(analytics.posts_by_type[2].name, "Guide");
    let counted: usize = analytics.posts_by_type.iter().map(|t| t.count).sum();
    assert_eq!(counted, analytics.totals.total_posts);

    // 30-day schedule, oldest to newest; everything seeded today lands last
    assert_eq!(analytics.schedule.len(), 30);
    assert!(analytics.schedule.last().unwrap().count >= 3);

    assert_eq!(analytics.trend.len(), 7);
    assert_eq!(analytics.suggestions.len(), 4);
    assert!(analytics.best_posting_hour.ends_with(":00"));
}

#[tokio::test]
async fn test_analytics_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/admin/analytics").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
