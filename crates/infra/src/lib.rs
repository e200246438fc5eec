//! # Contentgate インフラストラクチャ
//!
//! 外部システムとの接続を担当するクレート。
//! 現在はメール通知（SMTP / Noop）のみを提供する。

pub mod notification;

pub use notification::{
    EmailMessage,
    NoopNotificationSender,
    NotificationError,
    NotificationSender,
    SmtpNotificationSender,
};
