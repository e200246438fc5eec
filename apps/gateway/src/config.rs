//! # ゲートウェイ設定
//!
//! 環境変数からゲートウェイサーバーの設定を読み込む。

use std::{env, path::PathBuf};

/// 通知バックエンドの種別
///
/// 環境変数 `NOTIFICATION_BACKEND` で切り替える。
/// 値が未設定または不正な場合は [`Noop`](NotificationBackend::Noop) に
/// フォールバックする（メールを送らない方向に倒す）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationBackend {
    /// lettre 経由の SMTP 送信
    Smtp,
    /// ログ出力のみ（テスト・通知無効化時）
    #[default]
    Noop,
}

impl NotificationBackend {
    /// 文字列からバックエンド種別をパースする
    pub fn parse(s: &str) -> Self {
        match s {
            "smtp" => Self::Smtp,
            "noop" => Self::Noop,
            other => {
                eprintln!("WARNING: unknown NOTIFICATION_BACKEND={other:?}, falling back to noop");
                Self::Noop
            }
        }
    }

    /// 環境変数 `NOTIFICATION_BACKEND` から読み取る
    pub fn from_env() -> Self {
        match env::var("NOTIFICATION_BACKEND") {
            Ok(val) => Self::parse(&val),
            Err(_) => Self::default(),
        }
    }
}

/// SMTP 接続設定
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP サーバーのホスト名
    pub host:         String,
    /// SMTP サーバーのポート番号
    pub port:         u16,
    /// 送信元メールアドレス
    pub from_address: String,
}

/// ゲートウェイサーバーの設定
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// コンテンツサービスのベース URL
    pub content_service_url: String,
    /// 静的ファイルの配信ディレクトリ
    pub public_dir: PathBuf,
    /// 通知バックエンド
    pub notification_backend: NotificationBackend,
    /// SMTP 設定（`NOTIFICATION_BACKEND=smtp` のときのみ必須）
    pub smtp: Option<SmtpConfig>,
}

impl GatewayConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, env::VarError> {
        let notification_backend = NotificationBackend::from_env();

        let smtp = match notification_backend {
            NotificationBackend::Smtp => Some(SmtpConfig {
                host:         env::var("SMTP_HOST")
                    .expect("SMTP_HOST が設定されていません（NOTIFICATION_BACKEND=smtp には必須）"),
                port:         env::var("SMTP_PORT")
                    .expect("SMTP_PORT が設定されていません（NOTIFICATION_BACKEND=smtp には必須）")
                    .parse()
                    .expect("SMTP_PORT は有効なポート番号である必要があります"),
                from_address: env::var("MAIL_FROM")
                    .expect("MAIL_FROM が設定されていません（NOTIFICATION_BACKEND=smtp には必須）"),
            }),
            NotificationBackend::Noop => None,
        };

        Ok(Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .expect("GATEWAY_PORT が設定されていません")
                .parse()
                .expect("GATEWAY_PORT は有効なポート番号である必要があります"),
            content_service_url: env::var("CONTENT_SERVICE_URL")
                .expect("CONTENT_SERVICE_URL が設定されていません"),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            notification_backend,
            smtp,
        })
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、
    // パース関数のみを検証する

    use super::*;

    #[test]
    fn test_notification_backend_smtpをパースする() {
        assert_eq!(NotificationBackend::parse("smtp"), NotificationBackend::Smtp);
    }

    #[test]
    fn test_notification_backend_noopをパースする() {
        assert_eq!(NotificationBackend::parse("noop"), NotificationBackend::Noop);
    }

    #[test]
    fn test_notification_backend_不正な値でnoopにフォールバックする() {
        assert_eq!(NotificationBackend::parse("ses"), NotificationBackend::Noop);
        assert_eq!(NotificationBackend::parse(""), NotificationBackend::Noop);
        assert_eq!(NotificationBackend::parse("SMTP"), NotificationBackend::Noop);
    }

    #[test]
    fn test_notification_backend_デフォルトはnoop() {
        assert_eq!(NotificationBackend::default(), NotificationBackend::Noop);
    }
}
