//! ContentServiceClient トレイトとクライアント実装の構造体

use async_trait::async_trait;

use super::{
    envelope::{ContentPage, parse_envelope},
    error::ContentServiceError,
    query::TranslatedQuery,
};
use crate::middleware::request_id::inject_request_id;

/// コンテンツサービスクライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait ContentServiceClient: Send + Sync {
    /// 正規化済みクエリでコンテンツを検索する
    ///
    /// アップストリームの `GET /contents` を 1 回だけ呼び出す。
    /// リトライもフォールバック値もなく、失敗はそのまま呼び出し元へ返る。
    async fn find(&self, translated: &TranslatedQuery)
    -> Result<ContentPage, ContentServiceError>;
}

/// コンテンツサービスクライアント実装
#[derive(Clone)]
pub struct ContentServiceClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl ContentServiceClientImpl {
    /// 新しい ContentServiceClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: コンテンツサービスのベース URL（例: `http://localhost:4040`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentServiceClient for ContentServiceClientImpl {
    async fn find(
        &self,
        translated: &TranslatedQuery,
    ) -> Result<ContentPage, ContentServiceError> {
        let url = format!("{}/contents", self.base_url);

        // 角括弧・引用符はフォームエンコードでパーセントエスケープされる。
        // アップストリームは RFC 3986 に従ってデコードするため問題ない
        // （元実装の querystring 直列化と同じワイヤ表現になる）。
        let request = inject_request_id(self.client.get(&url).query(translated));

        let response = request.send().await?;
        parse_envelope(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urlの末尾スラッシュは除去される() {
        let client = ContentServiceClientImpl::new("http://localhost:4040/");
        assert_eq!(client.base_url, "http://localhost:4040");
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentServiceClientImpl>();
    }
}
