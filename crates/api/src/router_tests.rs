//! Handler tests that drive the real router over a mock provider.
//!
//! `tower::ServiceExt::oneshot` feeds one request through the full axum
//! stack, so routing, state extraction and status mapping are all covered
//! without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gateway::mock::MockProvider;
use gateway::{ConnectionProvider, ProcedureGateway};

use crate::router;

fn app_over(provider: &Arc<MockProvider>) -> axum::Router {
    router(Arc::new(ProcedureGateway::new(
        Arc::clone(provider) as Arc<dyn ConnectionProvider>,
    )))
}

async fn send(app: axum::Router, method: &str, path: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

#[tokio::test]
async fn run_import_returns_empty_200_when_the_store_succeeds() {
    let provider = Arc::new(MockProvider::healthy());

    let (status, body) = send(app_over(&provider), "POST", "/etl/run").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(provider.statements(), vec!["CALL fin.etl_import_payments()"]);
}

#[tokio::test]
async fn commit_transfer_returns_empty_500_and_leaks_nothing_when_the_store_fails() {
    let provider = Arc::new(MockProvider::failing("serialization failure"));

    let (status, body) = send(app_over(&provider), "POST", "/etl/commit").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty(), "failures must not carry a structured body");
    assert_eq!(provider.outstanding_count(), 0, "connection leaked");
}

#[tokio::test]
async fn refused_connections_also_map_to_500() {
    let provider = Arc::new(MockProvider::refusing("pool exhausted"));

    let (status, body) = send(app_over(&provider), "POST", "/etl/run").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn etl_routes_are_post_only() {
    let provider = Arc::new(MockProvider::healthy());

    let (status, _) = send(app_over(&provider), "GET", "/etl/run").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(provider.acquired_count(), 0);
}

#[tokio::test]
async fn healthz_reports_ok_without_touching_the_store() {
    let provider = Arc::new(MockProvider::refusing("down"));

    let (status, body) = send(app_over(&provider), "GET", "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"status":"ok"}"#);
}
