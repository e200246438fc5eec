//! # コンテンツサービスクライアント
//!
//! ゲートウェイからアップストリームのコンテンツリポジトリサービスへの
//! 通信を担当する。アップストリームは JSON:API 流儀の
//! フィルタ・ページネーション規約（`page[limit]` / `filter[field]=["v"]`）を話す。
//!
//! ## 構成
//!
//! - [`query`]: 受信クエリをアップストリーム規約へ正規化する（同期・純粋）
//! - [`envelope`]: アップストリームのエンベロープをゲートウェイ規約へ変換する
//! - [`client_impl`]: `GET /contents` を 1 往復発行するクライアント本体
//!
//! 正規化 → 取得は直列に合成され、リクエストごとに独立している。
//! リトライ・キャッシュ・タイムアウト上書きは行わない（トランスポートの責務）。

mod client_impl;
mod envelope;
mod error;
mod query;

pub use client_impl::{ContentServiceClient, ContentServiceClientImpl};
pub use envelope::{ContentPage, PageMeta, reshape};
pub use error::ContentServiceError;
pub use query::{FindQuery, InvalidQuery, TranslatedQuery, normalize};
