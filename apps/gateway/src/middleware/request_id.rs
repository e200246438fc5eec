//! # Request ID 伝播ミドルウェア
//!
//! ゲートウェイ → アップストリーム間の Request ID 伝播を実現する。
//!
//! ## 仕組み
//!
//! 1. [`store_request_id`] ミドルウェアが `SetRequestIdLayer` の設定した
//!    [`RequestId`](tower_http::request_id::RequestId) を task-local に保存する
//! 2. [`inject_request_id`] ヘルパーが task-local から Request ID を取得し、
//!    reqwest の `RequestBuilder` に `x-request-id` ヘッダーとして付与する
//!
//! Request ID は横断的関心事であり、クライアントの全メソッドに引数として
//! 渡すと侵襲的になるため、task-local による暗黙的な伝播を選択した。

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use contentgate_shared::observability::REQUEST_ID_HEADER;
use tower_http::request_id::RequestId;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// 現在のリクエストの Request ID を取得する
///
/// task-local に保存された Request ID を返す。
/// task-local スコープ外（テスト等）では `None` を返す。
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok()
}

/// Request ID を task-local に保存するミドルウェア
///
/// `SetRequestIdLayer` が設定した `RequestId` をリクエスト extensions から
/// 取得し、task-local に保存する。これによりクライアントコードから
/// `current_request_id()` で Request ID にアクセスできる。
pub async fn store_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_string();

    REQUEST_ID.scope(request_id, next.run(request)).await
}

/// reqwest リクエストビルダーに `x-request-id` ヘッダーを付与する
///
/// task-local に保存された Request ID があればヘッダーとして付与する。
/// task-local スコープ外の場合はビルダーをそのまま返す。
pub fn inject_request_id(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match current_request_id() {
        Some(id) => builder.header(REQUEST_ID_HEADER, id),
        None => builder,
    }
}
