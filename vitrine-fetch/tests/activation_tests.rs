//! End-to-end activation tests over real HTTP.
//!
//! Each test stands up a mock server for the primary and fallback
//! endpoints and drives one full activation through the pipeline.

use mockito::ServerGuard;

use vitrine_fetch::{Activation, FeedPipeline, FetchError, SourcePlan};

const VALID_BODY: &str = r#"{"projects":[{"id":1,"name":"x","full_name":"u/x","description":"d","html_url":"h","language":"Go","stargazers_count":3,"forks_count":1,"created_at":"2024-01-01T00:00:00Z","updated_at":"2024-06-01T00:00:00Z","topics":[]}],"lastUpdated":"2025-01-01"}"#;

async fn server() -> ServerGuard {
    mockito::Server::new_async().await
}

fn pipeline_for(server: &ServerGuard) -> FeedPipeline {
    FeedPipeline::new(SourcePlan::for_base(&server.url()).unwrap())
}

#[tokio::test]
async fn test_valid_primary_succeeds() {
    let mut server = server().await;
    let primary = server
        .mock("GET", "/api/projects")
        .with_status(200)
        .with_body(VALID_BODY)
        .expect(1)
        .create_async()
        .await;
    // First success short-circuits: the fallback is never contacted.
    let fallback = server
        .mock("GET", "/api/projects.json")
        .expect(0)
        .create_async()
        .await;

    let mut activation = Activation::new();
    activation.run(&pipeline_for(&server)).await;

    let outcome = activation.outcome();
    assert!(outcome.error_message().is_none());
    assert_eq!(outcome.records().len(), 1);
    assert_eq!(outcome.records()[0].name, "x");
    assert_eq!(outcome.last_updated(), "2025-01-01");

    primary.assert_async().await;
    fallback.assert_async().await;
}

#[tokio::test]
async fn test_fallback_serves_after_primary_error() {
    let mut server = server().await;
    // 500 stands in for the primary being unreachable.
    let primary = server
        .mock("GET", "/api/projects")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/api/projects.json")
        .with_status(200)
        .with_body(VALID_BODY)
        .expect(1)
        .create_async()
        .await;

    let mut activation = Activation::new();
    activation.run(&pipeline_for(&server)).await;

    let outcome = activation.outcome();
    assert!(outcome.error_message().is_none());
    assert_eq!(outcome.records().len(), 1);

    // Primary attempted exactly once; no retry before falling back.
    primary.assert_async().await;
    fallback.assert_async().await;
}

#[tokio::test]
async fn test_both_sources_404_exhausts() {
    let mut server = server().await;
    server
        .mock("GET", "/api/projects")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/api/projects.json")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let mut activation = Activation::new();
    activation.run(&pipeline_for(&server)).await;

    match activation.outcome().failure() {
        Some(FetchError::SourcesExhausted { label, message }) => {
            assert_eq!(label, "fallback");
            assert!(message.contains("404"));
        }
        other => panic!("expected SourcesExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_trailer_recovered() {
    let mut server = server().await;
    server
        .mock("GET", "/api/projects")
        .with_status(200)
        .with_body("{\"projects\":[]} HTTP Status: 200")
        .create_async()
        .await;

    let mut activation = Activation::new();
    activation.run(&pipeline_for(&server)).await;

    let outcome = activation.outcome();
    assert!(outcome.error_message().is_none());
    assert_eq!(outcome.records().len(), 0);
}

#[tokio::test]
async fn test_blank_body_fails_empty_payload() {
    let mut server = server().await;
    server
        .mock("GET", "/api/projects")
        .with_status(200)
        .with_body("  \n ")
        .create_async()
        .await;

    let mut activation = Activation::new();
    activation.run(&pipeline_for(&server)).await;

    let outcome = activation.outcome();
    assert!(matches!(outcome.failure(), Some(FetchError::EmptyPayload)));
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Empty response received")
    );
}

#[tokio::test]
async fn test_wrong_shape_fails_validation() {
    let mut server = server().await;
    server
        .mock("GET", "/api/projects")
        .with_status(200)
        .with_body("{\"foo\":1}")
        .create_async()
        .await;

    let mut activation = Activation::new();
    activation.run(&pipeline_for(&server)).await;

    assert!(matches!(
        activation.outcome().failure(),
        Some(FetchError::ProjectsNotArray)
    ));
}

#[tokio::test]
async fn test_malformed_json_fails_decode() {
    let mut server = server().await;
    server
        .mock("GET", "/api/projects")
        .with_status(200)
        .with_body("{\"projects\": [oops")
        .create_async()
        .await;

    let mut activation = Activation::new();
    activation.run(&pipeline_for(&server)).await;

    assert!(matches!(
        activation.outcome().failure(),
        Some(FetchError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_terminal_outcome_is_one_shot() {
    let mut server = server().await;
    // A second run must not re-contact the source once terminal.
    let primary = server
        .mock("GET", "/api/projects")
        .with_status(200)
        .with_body(VALID_BODY)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/api/projects.json")
        .expect(0)
        .create_async()
        .await;

    let pipeline = pipeline_for(&server);
    let mut activation = Activation::new();
    activation.run(&pipeline).await;
    activation.run(&pipeline).await;

    assert_eq!(activation.outcome().records().len(), 1);
    primary.assert_async().await;
}
