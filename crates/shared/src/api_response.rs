//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式 `{ "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 公開 API の統一レスポンス型
///
/// コンテンツ検索以外の公開エンドポイント（メール送信等）は
/// `{ "data": T }` 形式でレスポンスを返す。
/// コンテンツ検索はアップストリームのエンベロープ形状を踏襲するため、
/// この型を使用しない。
///
/// ## 使用例
///
/// ```
/// use contentgate_shared::ApiResponse;
///
/// let response = ApiResponse::new("hello");
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
