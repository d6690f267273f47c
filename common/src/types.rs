//! 検索結果の型定義
//!
//! CLIとテストで共有される型:
//! - SearchResponse / Product: Open Food Facts 検索APIのレスポンス
//! - LookupResult: 食材1件ごとの最終出力

use serde::{Deserialize, Deserializer, Serialize};

/// 検索APIのレスポンス（`products` 以外のキーは読み捨てる）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// `products` が欠落・null の場合は空配列として扱う
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
}

/// 検索ヒットした商品
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "string_or_number")]
    pub product_name: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub code: Option<String>,
}

/// 食材1件の照会結果
///
/// 生成後は変更しない。出力順は入力順と一致する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// 入力した食材名（そのまま）
    pub ingredient: String,
    /// 商品名（なければ "N/A"）
    pub product_name: String,
    /// バーコード（なければ "N/A"）
    pub barcode: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// バーコードが数値で返ってくる商品がある。
// 真偽値・配列・オブジェクトは欠落扱い（1件の異常値で全体を止めない）
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
