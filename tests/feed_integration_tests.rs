use sentiview::feed::{FetchError, HttpPostSource, PostId, PostSource};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const FEED_PATH: &str = "/reddit-sentiment";

fn source_for(server: &MockServer) -> HttpPostSource {
    HttpPostSource::new(format!("{}{}", server.uri(), FEED_PATH))
}

async fn mount_json(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "application/json")
                .set_body_string(body.to_string()),
        )
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_fetch_decodes_posts_in_server_order() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        r#"[
            {"id": 3, "title": "Third", "sentiment": "NEGATIVE", "created_at": "2024-01-03T00:00:00"},
            {"id": 1, "title": "First", "sentiment": "POSITIVE", "created_at": "2024-01-01T00:00:00"},
            {"id": 2, "title": "Second", "sentiment": "POSITIVE", "created_at": "2024-01-02T00:00:00"}
        ]"#,
    )
    .await;

    let posts = source_for(&server).fetch_posts().await.unwrap();

    let ids: Vec<PostId> = posts.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![PostId::Int(3), PostId::Int(1), PostId::Int(2)]);
    assert_eq!(posts[0].title, "Third");
    assert_eq!(posts[0].sentiment, "NEGATIVE");
    assert_eq!(posts[0].created_at, "2024-01-03T00:00:00");
}

#[tokio::test]
async fn test_fetch_empty_array_is_success() {
    let server = MockServer::start().await;
    mount_json(&server, 200, "[]").await;

    let posts = source_for(&server).fetch_posts().await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_fetch_ignores_unknown_fields() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        r#"[{"id": "a1", "title": "T", "sentiment": "positive", "created_at": "2024-01-01T00:00:00Z", "score": 0.98}]"#,
    )
    .await;

    let posts = source_for(&server).fetch_posts().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, PostId::Text("a1".to_string()));
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    let server = MockServer::start().await;
    mount_json(&server, 203, "[]").await;

    assert!(source_for(&server).fetch_posts().await.is_ok());
}

// ============================================================================
// HTTP status failures
// ============================================================================

#[tokio::test]
async fn test_fetch_500_is_status_failure() {
    let server = MockServer::start().await;
    mount_json(&server, 500, r#"{"detail": "Internal Server Error"}"#).await;

    let err = source_for(&server).fetch_posts().await.unwrap_err();
    assert_eq!(err, FetchError::Status(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_fetch_404_is_status_failure() {
    let server = MockServer::start().await;
    // Nothing mounted: wiremock answers 404

    let err = source_for(&server).fetch_posts().await.unwrap_err();
    assert_eq!(err, FetchError::Status(404));
}

// ============================================================================
// Transport failures
// ============================================================================

#[tokio::test]
async fn test_fetch_malformed_json_is_transport_failure() {
    let server = MockServer::start().await;
    mount_json(&server, 200, "[{\"id\": 1, \"title\": ").await;

    let err = source_for(&server).fetch_posts().await.unwrap_err();
    match err {
        FetchError::Transport(msg) => assert!(msg.starts_with("invalid response body")),
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_wrong_shape_is_transport_failure() {
    let server = MockServer::start().await;
    mount_json(&server, 200, r#"{"posts": []}"#).await;

    let err = source_for(&server).fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_missing_field_is_transport_failure() {
    let server = MockServer::start().await;
    mount_json(&server, 200, r#"[{"id": 1, "title": "T", "sentiment": "POSITIVE"}]"#).await;

    let err = source_for(&server).fetch_posts().await.unwrap_err();
    match err {
        FetchError::Transport(msg) => assert!(msg.contains("created_at")),
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    // Server dropped: nothing listens on the port any more
    let source = HttpPostSource::new(format!("{uri}{FEED_PATH}"));

    let err = source.fetch_posts().await.unwrap_err();
    match err {
        FetchError::Transport(msg) => assert!(!msg.is_empty()),
        other => panic!("expected transport failure, got {other:?}"),
    }
}
