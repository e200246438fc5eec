//! # メール送信ハンドラ
//!
//! `POST /mails` でトランザクショナルメールの送信を受け付ける。
//! 送信は [`NotificationSender`] に委譲し、リトライ・配送保証は
//! トランスポート側の責務とする。

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use contentgate_infra::{EmailMessage, NotificationSender};
use contentgate_shared::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::error::internal_error_response;

/// メール送信 API の共有状態
pub struct MailState {
    pub notification_sender: Arc<dyn NotificationSender>,
}

/// メール送信リクエスト
#[derive(Debug, Deserialize)]
pub struct SendMailRequest {
    /// 送信先メールアドレス
    pub email:   String,
    /// 件名
    pub subject: String,
    /// 本文（HTML とプレーンテキストの両方）
    pub content: MailContent,
}

/// メール本文
#[derive(Debug, Deserialize)]
pub struct MailContent {
    pub html: String,
    pub text: String,
}

/// メール送信レスポンスデータ
#[derive(Debug, Serialize)]
pub struct SendMailData {
    /// 送信を受け付けたアドレス
    pub accepted: Vec<String>,
}

/// メールを送信する
///
/// 送信成功で 202 Accepted を返す。失敗は詳細をログに残し、
/// レスポンスには内部情報を含めない。
#[tracing::instrument(skip_all)]
pub async fn send_mail(
    State(state): State<Arc<MailState>>,
    Json(req): Json<SendMailRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SendMailData>>), Response> {
    let message = EmailMessage {
        to:        req.email.clone(),
        subject:   req.subject,
        html_body: req.content.html,
        text_body: req.content.text,
    };

    match state.notification_sender.send_email(&message).await {
        Ok(()) => Ok((
            StatusCode::ACCEPTED,
            Json(ApiResponse::new(SendMailData {
                accepted: vec![req.email],
            })),
        )),
        Err(e) => {
            tracing::error!(
                error.category = "infrastructure",
                error.kind = "notification",
                "メール送信で内部エラー: {}",
                e
            );
            Err(internal_error_response())
        }
    }
}
