//! # HTTP ハンドラ
//!
//! ゲートウェイの各エンドポイントのハンドラを集約する。
//!
//! - `content`: コンテンツ検索（`GET /contents`）
//! - `mail`: メール送信（`POST /mails`）
//! - `health`: ヘルスチェック（`GET /health`, `GET /health/ready`）

pub mod content;
pub mod health;
pub mod mail;

pub use content::{ContentState, find_contents};
pub use health::{ReadinessState, health_check, readiness_check};
pub use mail::{MailState, send_mail};
