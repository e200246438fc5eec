//! # 外部 API クライアント
//!
//! アップストリームのコンテンツサービスとの通信を担当する。

pub mod content_service;

pub use content_service::{
    ContentPage,
    ContentServiceClient,
    ContentServiceClientImpl,
    ContentServiceError,
    FindQuery,
    InvalidQuery,
    TranslatedQuery,
    normalize,
};
