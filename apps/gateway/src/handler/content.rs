//! # コンテンツ検索ハンドラ
//!
//! `GET /contents` を受け取り、クエリをアップストリーム規約へ正規化して
//! コンテンツサービスへ転送する。
//!
//! ## 受信ワイヤ形式
//!
//! - `limit` / `skip`: 数値
//! - `query`: 自由テキスト
//! - `filter[<field>]=<value>`: 繰り返し可。同一フィールドの複数指定は
//!   OR 条件の候補値として配列に積まれる
//! - 上記以外のパラメータは無視され、アップストリームへ転送されない

use std::{
    collections::btree_map::Entry,
    sync::Arc,
};

use axum::{
    Json,
    extract::{RawQuery, State},
    response::Response,
};
use serde_json::Value;

use crate::{
    client::{ContentPage, ContentServiceClient, FindQuery, normalize},
    error::{log_and_convert_content_error, validation_error_response},
};

/// コンテンツ検索 API の共有状態
pub struct ContentState {
    pub content_service_client: Arc<dyn ContentServiceClient>,
}

/// コンテンツを検索する
///
/// 正規化はネットワーク呼び出しの前に同期的に行われ、失敗は 400 で
/// 即座に返る（フェイルファスト）。取得の失敗は 502 / 503 に変換される。
#[tracing::instrument(skip_all)]
pub async fn find_contents(
    State(state): State<Arc<ContentState>>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ContentPage>, Response> {
    let find_query = parse_find_query(raw.as_deref().unwrap_or(""))
        .map_err(|detail| validation_error_response(&detail))?;

    let translated =
        normalize(find_query).map_err(|e| validation_error_response(&e.to_string()))?;

    match state.content_service_client.find(&translated).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => Err(log_and_convert_content_error("コンテンツ検索", e)),
    }
}

/// 生のクエリ文字列を [`FindQuery`] へパースする
///
/// `filter[<field>]` の繰り返しは配列に積む。認識しないキーは落とす。
fn parse_find_query(raw: &str) -> Result<FindQuery, String> {
    let mut query = FindQuery::default();

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "limit" => {
                let limit = value
                    .parse::<u64>()
                    .map_err(|_| format!("limit が数値ではありません: {value}"))?;
                query.limit = Some(limit);
            }
            "skip" => {
                let skip = value
                    .parse::<u64>()
                    .map_err(|_| format!("skip が数値ではありません: {value}"))?;
                query.skip = Some(skip);
            }
            "query" => {
                query.query = Some(value.into_owned());
            }
            other => {
                let Some(field) = other
                    .strip_prefix("filter[")
                    .and_then(|rest| rest.strip_suffix(']'))
                else {
                    continue;
                };

                let candidate = Value::String(value.into_owned());
                match query.filter.entry(field.to_string()) {
                    Entry::Vacant(vacant) => {
                        vacant.insert(candidate);
                    }
                    Entry::Occupied(mut occupied) => match occupied.get_mut() {
                        Value::Array(candidates) => candidates.push(candidate),
                        scalar => {
                            let first = scalar.take();
                            *scalar = Value::Array(vec![first, candidate]);
                        }
                    },
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_limitとskipがパースされる() {
        let query = parse_find_query("limit=10&skip=20").unwrap();

        assert_eq!(query.limit, Some(10));
        assert_eq!(query.skip, Some(20));
    }

    #[test]
    fn test_数値でないlimitはエラー() {
        let result = parse_find_query("limit=abc");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("limit"));
    }

    #[test]
    fn test_単一のfilterはスカラーになる() {
        let query = parse_find_query("filter%5Btype%5D=article").unwrap();

        assert_eq!(query.filter.get("type"), Some(&json!("article")));
    }

    #[test]
    fn test_繰り返しのfilterは配列に積まれる() {
        let query =
            parse_find_query("filter%5Btype%5D=article&filter%5Btype%5D=video").unwrap();

        assert_eq!(query.filter.get("type"), Some(&json!(["article", "video"])));
    }

    #[test]
    fn test_3回以上の繰り返しも配列へ追加される() {
        let query = parse_find_query("filter%5Bt%5D=a&filter%5Bt%5D=b&filter%5Bt%5D=c").unwrap();

        assert_eq!(query.filter.get("t"), Some(&json!(["a", "b", "c"])));
    }

    #[test]
    fn test_パーセントエンコードされた値がデコードされる() {
        let query = parse_find_query("query=freie%20Suche&filter%5Bname%5D=a%2Bb").unwrap();

        assert_eq!(query.query, Some("freie Suche".to_string()));
        assert_eq!(query.filter.get("name"), Some(&json!("a+b")));
    }

    #[test]
    fn test_認識しないキーは落とされる() {
        let query = parse_find_query("limit=5&unknown=1&$sort=name").unwrap();

        assert_eq!(query.limit, Some(5));
        assert!(query.filter.is_empty());
        assert_eq!(query.query, None);
    }

    #[test]
    fn test_空のクエリ文字列で空のfind_queryを返す() {
        let query = parse_find_query("").unwrap();

        assert_eq!(query, FindQuery::default());
    }
}
