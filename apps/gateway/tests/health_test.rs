//! # ヘルスチェック API の統合テスト

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
};
use contentgate_gateway::{
    app_builder::{AppDeps, build_app},
    client::{ContentPage, ContentServiceClient, ContentServiceError, TranslatedQuery},
};
use contentgate_infra::NoopNotificationSender;
use http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

struct UnreachableContentServiceClient;

#[async_trait]
impl ContentServiceClient for UnreachableContentServiceClient {
    async fn find(&self, _: &TranslatedQuery) -> Result<ContentPage, ContentServiceError> {
        Err(ContentServiceError::Unavailable("not under test".to_string()))
    }
}

/// 到達不能なコンテンツサービス URL を設定したテスト用アプリを構築する
fn test_app() -> Router {
    build_app(AppDeps {
        content_service_client: Arc::new(UnreachableContentServiceClient),
        notification_sender: Arc::new(NoopNotificationSender),
        http_client: reqwest::Client::new(),
        content_service_url: "http://127.0.0.1:1".to_string(),
        public_dir: PathBuf::from("does-not-exist"),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_healthは常にhealthyを返す() {
    let (status, body) = get(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_コンテンツサービス到達不能時はnot_readyを返す() {
    let (status, body) = get(test_app(), "/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["content_service"], "error");
}
