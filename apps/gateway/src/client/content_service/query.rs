//! # クエリ正規化
//!
//! 受信したページネーション・フィルタパラメータを、アップストリームの
//! コンテンツサービスが期待するワイヤ形式へ書き換える。
//!
//! | 受信キー       | 変換後キー        | 値の形式                       |
//! |----------------|-------------------|--------------------------------|
//! | `limit`        | `page[limit]`     | 数値の文字列表現               |
//! | `skip`         | `page[offset]`    | 数値の文字列表現               |
//! | `query`        | `query`           | そのまま（空文字列は転送しない）|
//! | `filter.<f>`   | `filter[<f>]`     | `["v1"],["v2"]`（カンマ結合）  |
//!
//! 変換後のマッピングには上記 4 種類のキー形状のみが残る。

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// 正規化エラー
///
/// 正規化は I/O を行わないため、エラーはネットワーク呼び出しの前に
/// 同期的に呼び出し元へ返る。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQuery {
    /// filter 値がスカラーでもスカラーの配列でもない
    ///
    /// オブジェクトやネストした配列は契約外。アップストリームの挙動を
    /// 推測せず、転送前に拒否する。
    #[error("filter[{0}] の値はスカラーまたはスカラーの配列で指定してください")]
    FilterShape(String),
}

/// 受信クエリ
///
/// 1 回の検索リクエストの間だけ存在し、正規化後は破棄される。
/// `filter` の各エントリはスカラー、またはスカラーの配列
/// （配列要素は OR 条件の候補値）をとる。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    /// 最大取得件数
    pub limit:  Option<u64>,
    /// 行オフセット
    pub skip:   Option<u64>,
    /// 自由テキスト検索文字列
    pub query:  Option<String>,
    /// フィールド名 → スカラーまたはスカラーの配列
    pub filter: BTreeMap<String, Value>,
}

/// 正規化済みクエリ
///
/// アップストリーム固有のパラメータ名から文字列値へのマッピング。
/// キーは `page[limit]` / `page[offset]` / `query` / `filter[<field>]` のみ。
pub type TranslatedQuery = BTreeMap<String, String>;

/// 受信クエリをアップストリーム規約へ正規化する
///
/// 変換はフィールドごとに以下の規則で行う:
///
/// 1. `limit` / `skip` は（フィルタの有無にかかわらず）先に
///    `page[limit]` / `page[offset]` へ写し、元のキーは残さない。
/// 2. `query` が空文字列の場合はキーごと落とす。アップストリームでは
///    「空文字列での検索」と「検索なし」の挙動が異なるため、送らない。
/// 3. 空配列のフィルタは「制約なし」を意味するので転送しない
///    （「何にもマッチしない」ではない）。
/// 4. 残ったフィルタは `filter[<field>]` にリネームし、値を
///    `["v"]` 形式の引用・角括弧トークンへ直列化する。配列は
///    トークンをカンマ（空白なし）で結合する。
pub fn normalize(query: FindQuery) -> Result<TranslatedQuery, InvalidQuery> {
    let mut translated = TranslatedQuery::new();

    if let Some(limit) = query.limit {
        translated.insert("page[limit]".to_string(), limit.to_string());
    }
    if let Some(skip) = query.skip {
        translated.insert("page[offset]".to_string(), skip.to_string());
    }

    match query.query {
        Some(text) if !text.is_empty() => {
            translated.insert("query".to_string(), text);
        }
        // 空文字列・未指定は転送しない
        _ => {}
    }

    for (field, value) in query.filter {
        let serialized = match value {
            Value::Array(candidates) => {
                if candidates.is_empty() {
                    continue;
                }
                let tokens = candidates
                    .iter()
                    .map(|candidate| scalar_token(&field, candidate))
                    .collect::<Result<Vec<_>, _>>()?;
                tokens.join(",")
            }
            scalar => scalar_token(&field, &scalar)?,
        };
        translated.insert(format!("filter[{field}]"), serialized);
    }

    Ok(translated)
}

/// スカラー値を `["<value>"]` 形式のトークンへ直列化する
///
/// アップストリームの JSON:API 実装は角括弧と二重引用符で囲まれた
/// カンマ区切り値を期待する。
fn scalar_token(field: &str, value: &Value) -> Result<String, InvalidQuery> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            return Err(InvalidQuery::FilterShape(field.to_string()));
        }
    };
    Ok(format!("[\"{text}\"]"))
}
