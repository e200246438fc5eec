//! # コンテンツゲートウェイ サーバー
//!
//! REST API を公開し、コンテンツ検索をアップストリームの
//! コンテンツリポジトリサービスへ転送するゲートウェイサーバー。
//!
//! ## 役割
//!
//! - **クエリ変換**: 受信したページネーション・フィルタパラメータを
//!   アップストリームの JSON:API 流儀の規約へ書き換える
//! - **エンベロープ変換**: アップストリームのページネーション付き
//!   レスポンスをゲートウェイ自身の規約へ変換する
//! - **メール送信**: トランザクショナルメールを SMTP トランスポートへ委譲する
//! - **静的配信**: public ディレクトリ（favicon 含む）をフォールバックで配信する
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Client     │────▶│   Gateway    │────▶│ Content Service  │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │ SMTP Relay   │
//!                      └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `GATEWAY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `GATEWAY_PORT` | **Yes** | ポート番号 |
//! | `CONTENT_SERVICE_URL` | **Yes** | コンテンツサービスのベース URL |
//! | `PUBLIC_DIR` | No | 静的ファイルディレクトリ（デフォルト: `public`） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` / `noop`（デフォルト: `noop`） |
//! | `SMTP_HOST` / `SMTP_PORT` / `MAIL_FROM` | smtp 時のみ | SMTP 接続設定 |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |

use std::{net::SocketAddr, sync::Arc};

use contentgate_gateway::{
    app_builder::{AppDeps, build_app},
    client::{ContentServiceClient, ContentServiceClientImpl},
    config::{GatewayConfig, NotificationBackend},
};
use contentgate_infra::{NoopNotificationSender, NotificationSender, SmtpNotificationSender};
use contentgate_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("gateway");
    contentgate_shared::observability::init_tracing(tracing_config);
    let _app_span = tracing::info_span!("app", service = "gateway").entered();

    // 設定読み込み
    let config = GatewayConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "コンテンツゲートウェイを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存関係の初期化
    let content_service_client: Arc<dyn ContentServiceClient> =
        Arc::new(ContentServiceClientImpl::new(&config.content_service_url));

    let notification_sender: Arc<dyn NotificationSender> = match config.notification_backend {
        NotificationBackend::Smtp => {
            let smtp = config
                .smtp
                .as_ref()
                .expect("NOTIFICATION_BACKEND=smtp には SMTP 設定が必要です");
            tracing::info!("通知バックエンド: smtp ({}:{})", smtp.host, smtp.port);
            Arc::new(SmtpNotificationSender::new(
                &smtp.host,
                smtp.port,
                smtp.from_address.clone(),
            ))
        }
        NotificationBackend::Noop => {
            tracing::info!("通知バックエンド: noop（メールは送信されません）");
            Arc::new(NoopNotificationSender)
        }
    };

    // ルーター構築
    let app = build_app(AppDeps {
        content_service_client,
        notification_sender,
        http_client: reqwest::Client::new(),
        content_service_url: config.content_service_url.clone(),
        public_dir: config.public_dir.clone(),
    });

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("コンテンツゲートウェイが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
