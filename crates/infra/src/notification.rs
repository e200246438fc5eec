//! # 通知送信
//!
//! メール送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（lettre 経由の実送信）、Noop（テスト・通知無効化時）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択
//!
//! リトライや配送保証は SMTP トランスポート側の責務であり、
//! このモジュールは 1 回の送信要求のみを扱う。

mod noop;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
pub use smtp::SmtpNotificationSender;
use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// メールメッセージ
///
/// ゲートウェイのメール送信 API の入力から組み立てられ、
/// `NotificationSender` に渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// メール送信トレイト
///
/// メール送信の具体的な方法を抽象化する。
/// SMTP / Noop の 2 実装を環境変数で切り替える。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
