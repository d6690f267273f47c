//! 照会結果の組み立て
//!
//! 欠落フィールドは必ずセンチネル値に置き換える。

use crate::types::{LookupResult, Product, SearchResponse};

/// フィールド欠落時のセンチネル
pub const NOT_AVAILABLE: &str = "N/A";

/// 検索結果0件時の商品名
pub const NO_PRODUCT_FOUND: &str = "Aucun produit trouvé";

impl Product {
    /// 商品名（欠落時は "N/A"）
    pub fn name_or_default(&self) -> &str {
        self.product_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// バーコード（欠落時は "N/A"）
    pub fn code_or_default(&self) -> &str {
        self.code.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

impl LookupResult {
    /// 検索レスポンスから結果を生成
    ///
    /// 先頭の商品のみを採用し、0件なら `not_found` を返す。
    pub fn from_response(ingredient: impl Into<String>, response: &SearchResponse) -> Self {
        match response.products.first() {
            Some(product) => Self::from_product(ingredient, product),
            None => Self::not_found(ingredient),
        }
    }

    pub fn from_product(ingredient: impl Into<String>, product: &Product) -> Self {
        Self {
            ingredient: ingredient.into(),
            product_name: product.name_or_default().to_string(),
            barcode: product.code_or_default().to_string(),
        }
    }

    pub fn not_found(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            product_name: NO_PRODUCT_FOUND.to_string(),
            barcode: NOT_AVAILABLE.to_string(),
        }
    }

    /// 商品が見つかったかどうか
    pub fn is_found(&self) -> bool {
        !(self.product_name == NO_PRODUCT_FOUND && self.barcode == NOT_AVAILABLE)
    }
}
