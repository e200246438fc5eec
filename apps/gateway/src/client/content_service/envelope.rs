//! # レスポンスエンベロープ変換
//!
//! アップストリームのページネーション付きエンベロープ（`meta.page`）を、
//! ゲートウェイ自身のページネーション規約（トップレベルの
//! `total` / `limit` / `skip`）へ変換する。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ContentServiceError;

/// アップストリームの `meta.page` オブジェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub total:  u64,
    pub limit:  u64,
    pub offset: u64,
}

/// ゲートウェイのレスポンスエンベロープ
///
/// アップストリームのボディをそのまま保持し、`meta.page` が存在する場合のみ
/// トップレベルに `total` / `limit` / `skip` を付与する。
/// `meta.page` がない場合、3 キーは出力に一切現れない（null にもならない）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentPage {
    /// アップストリームのボディ（`meta` を含め無加工）
    #[serde(flatten)]
    pub body: serde_json::Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip:  Option<u64>,
}

/// パース済みボディをゲートウェイエンベロープへ変換する
///
/// `meta.page` が存在すれば `total ← total` / `limit ← limit` /
/// `skip ← offset` を写す。存在しなければボディを無変更で返す。
/// トップレベルがオブジェクトでないボディ、および形の崩れた `meta.page` は
/// `MalformedResponse` になる。
pub fn reshape(body: Value) -> Result<ContentPage, ContentServiceError> {
    let Value::Object(map) = body else {
        return Err(ContentServiceError::MalformedResponse(
            "トップレベルが JSON オブジェクトではありません".to_string(),
        ));
    };

    let page = match map.get("meta").and_then(|meta| meta.get("page")) {
        Some(raw) => Some(serde_json::from_value::<PageMeta>(raw.clone()).map_err(|e| {
            ContentServiceError::MalformedResponse(format!("meta.page が不正: {e}"))
        })?),
        None => None,
    };

    Ok(ContentPage {
        body: map,
        total: page.map(|p| p.total),
        limit: page.map(|p| p.limit),
        skip: page.map(|p| p.offset),
    })
}

/// HTTP レスポンスをゲートウェイエンベロープへ変換する
///
/// 非 2xx は `Unavailable`、JSON として読めないボディは
/// `MalformedResponse` になる。
pub(super) async fn parse_envelope(
    response: reqwest::Response,
) -> Result<ContentPage, ContentServiceError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ContentServiceError::Unavailable(format!(
            "予期しないステータス {status}: {body}"
        )));
    }

    let body = response.json::<Value>().await?;
    reshape(body)
}
