//! コンテンツサービスクライアントエラー

use thiserror::Error;

/// コンテンツサービスクライアントエラー
///
/// 取得系の失敗のみを表す。正規化の失敗は
/// [`InvalidQuery`](super::InvalidQuery) としてネットワーク呼び出しの前に返る。
#[derive(Debug, Clone, Error)]
pub enum ContentServiceError {
    /// アップストリームへのネットワーク呼び出しが失敗
    /// （接続拒否・DNS 失敗・トランスポートレベルのタイムアウト・非 2xx ステータス）
    #[error("コンテンツサービスに接続できません: {0}")]
    Unavailable(String),

    /// アップストリームのボディが期待するエンベロープ形状としてパースできない
    #[error("コンテンツサービスのレスポンスが不正です: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ContentServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ContentServiceError::MalformedResponse(err.to_string())
        } else {
            ContentServiceError::Unavailable(err.to_string())
        }
    }
}
