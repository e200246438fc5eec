//! # ゲートウェイ アプリケーション構築
//!
//! DI（クライアント・State）の注入とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//! 統合テストはスタブの依存を注入して同じルーターを構築する。

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use contentgate_infra::NotificationSender;
use contentgate_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    client::ContentServiceClient,
    handler::{
        ContentState,
        MailState,
        ReadinessState,
        find_contents,
        health_check,
        readiness_check,
        send_mail,
    },
    middleware::request_id::store_request_id,
};

/// ルーター構築に必要な依存一式
pub struct AppDeps {
    pub content_service_client: Arc<dyn ContentServiceClient>,
    pub notification_sender:    Arc<dyn NotificationSender>,
    pub http_client:            reqwest::Client,
    pub content_service_url:    String,
    pub public_dir:             PathBuf,
}

/// ゲートウェイのルーターを構築する
///
/// ルートにマッチしないパスは public ディレクトリの静的ファイル配信に
/// フォールバックする（favicon 含む）。
pub fn build_app(deps: AppDeps) -> Router {
    let content_state = Arc::new(ContentState {
        content_service_client: deps.content_service_client,
    });
    let mail_state = Arc::new(MailState {
        notification_sender: deps.notification_sender,
    });
    let readiness_state = Arc::new(ReadinessState {
        http_client:         deps.http_client,
        content_service_url: deps.content_service_url,
    });

    // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が
    // 付与されログに自動注入される（レイヤー順序が重要: 下に書いたものが外側）
    // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成
    //    （またはクライアント提供値を使用）
    // 2. TraceLayer: カスタムスパンに request_id を含める
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに x-request-id をコピー
    // 4. store_request_id: task-local に保存し、アップストリームへの
    //    ヘッダー伝播に使用
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/contents", get(find_contents))
                .with_state(content_state),
        )
        .merge(
            Router::new()
                .route("/mails", post(send_mail))
                .with_state(mail_state),
        )
        .fallback_service(ServeDir::new(deps.public_dir))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(from_fn(store_request_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
