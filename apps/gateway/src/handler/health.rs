//! # ヘルスチェックハンドラ
//!
//! ゲートウェイの稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（コンテンツサービスへの到達性を確認）

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use contentgate_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

/// ゲートウェイのヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub http_client:         reqwest::Client,
    pub content_service_url: String,
}

/// ゲートウェイの Readiness Check エンドポイント
///
/// コンテンツサービスへの到達性をチェックする。
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let content_result =
        check_content_service(&state.http_client, &state.content_service_url).await;

    let mut checks = HashMap::new();
    checks.insert("content_service".to_string(), content_result);

    let all_ok = checks.values().all(|s| matches!(s, CheckStatus::Ok));
    let status = if all_ok {
        ReadinessStatus::Ready
    } else {
        ReadinessStatus::NotReady
    };
    let http_status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(ReadinessResponse { status, checks }))
}

/// コンテンツサービスへの到達性を確認する（タイムアウト: 5 秒）
///
/// 最小のページで `/contents` を叩き、HTTP レスポンスが返れば到達可能とみなす
/// （ステータスコードは問わない）。
async fn check_content_service(client: &reqwest::Client, base_url: &str) -> CheckStatus {
    let url = format!("{}/contents", base_url.trim_end_matches('/'));
    let request = client.get(&url).query(&[("page[limit]", "1")]);

    match tokio::time::timeout(Duration::from_secs(5), request.send()).await {
        Ok(Ok(_)) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: content service request failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: content service check timed out");
            CheckStatus::Error
        }
    }
}
