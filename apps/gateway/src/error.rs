//! # ゲートウェイ エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//! 各ハンドラが共通で使うレスポンスヘルパーを集約する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contentgate_shared::ErrorResponse;

use crate::client::ContentServiceError;

// --- IntoResponse for ContentServiceError ---

impl IntoResponse for ContentServiceError {
    fn into_response(self) -> Response {
        match self {
            ContentServiceError::Unavailable(_) => service_unavailable_response(
                "コンテンツサービスが一時的に利用できません",
            ),
            ContentServiceError::MalformedResponse(_) => bad_gateway_response(
                "コンテンツサービスから不正なレスポンスを受信しました",
            ),
        }
    }
}

/// コンテンツサービスエラーをログ付きでレスポンスに変換する
///
/// 障害の詳細はログにのみ出力し、レスポンスには含めない。
pub fn log_and_convert_content_error(context: &str, err: ContentServiceError) -> Response {
    tracing::error!(
        error.category = "external_service",
        error.kind = "service_communication",
        "{}で内部エラー: {}",
        context,
        err
    );
    err.into_response()
}

// --- レスポンスヘルパー ---

/// バリデーションエラーレスポンス
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation_error(detail)),
    )
        .into_response()
}

/// 内部エラーレスポンス
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error()),
    )
        .into_response()
}

/// 502 Bad Gateway レスポンス
pub fn bad_gateway_response(detail: &str) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse::bad_gateway(detail)),
    )
        .into_response()
}

/// 503 Service Unavailable レスポンス
pub fn service_unavailable_response(detail: &str) -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse::service_unavailable(detail)),
    )
        .into_response()
}
