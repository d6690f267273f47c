//! APIレスポンスパーサー

use crate::error::{Error, Result};
use crate::types::SearchResponse;

/// 検索APIのレスポンス本文をパース
///
/// # Returns
/// * `Ok(SearchResponse)` - パース成功（`products` 欠落時は空）
/// * `Err` - JSONとして不正、またはオブジェクトでない場合
///
/// # Examples
/// ```
/// use ingredient_barcode_common::parse_search_response;
///
/// let response = parse_search_response(r#"{"products":[{"code":"123"}]}"#).unwrap();
/// assert_eq!(response.products.len(), 1);
/// ```
pub fn parse_search_response(body: &str) -> Result<SearchResponse> {
    let value: serde_json::Value = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("検索レスポンスのJSONパースエラー: {}", e)))?;

    // 構造体は配列からもデシリアライズできてしまうため、先にオブジェクトか確認する
    if !value.is_object() {
        return Err(Error::Parse("検索レスポンスがJSONオブジェクトではありません".into()));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("検索レスポンスのJSONパースエラー: {}", e)))
}
