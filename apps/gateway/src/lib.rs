//! # コンテンツゲートウェイ ライブラリ
//!
//! REST API を公開し、コンテンツ検索をアップストリームの
//! コンテンツリポジトリサービスへ転送するゲートウェイのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: DI とルーター構築
//! - `client`: 外部 API クライアント（コンテンツサービス）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーレスポンス変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（Request ID 伝播）

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
