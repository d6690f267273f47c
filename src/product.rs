//! バーコードによる商品詳細
//!
//! レスポンスは `{"product": {...}}` 形式、または商品オブジェクトそのもの。

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDetails {
    pub barcode: String,
    pub product_name: String,
    pub base_quantity: f64,
    pub unit: String,
    pub categories: Vec<String>,
    pub image_url: String,
}

impl ProductDetails {
    /// APIレスポンスから生成
    ///
    /// 商品名は `product_name_<language>` → `product_name_fr` → `product_name` の順に採用。
    pub fn from_json(data: &Value, language: &str) -> Self {
        let product = data.get("product").unwrap_or(data);

        let name_key = format!("product_name_{}", language);
        let product_name = first_str(product, &[name_key.as_str(), "product_name_fr", "product_name"]);

        let categories = str_field(product, "categories")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            barcode: code_field(product),
            product_name,
            base_quantity: base_quantity(product),
            unit: first_str(product, &["product_quantity_unit"]),
            categories,
            image_url: first_str(product, &["image_front_url", "image_url"]),
        }
    }
}

impl fmt::Display for ProductDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} → {}", self.barcode, self.product_name)?;
        writeln!(f, "  quantité: {} {}", self.base_quantity, self.unit)?;
        writeln!(f, "  catégories: {}", self.categories.join(", "))?;
        write!(f, "  image: {}", self.image_url)
    }
}

fn str_field<'a>(product: &'a Value, key: &str) -> Option<&'a str> {
    product.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn first_str(product: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| str_field(product, key))
        .unwrap_or_default()
        .to_string()
}

fn code_field(product: &Value) -> String {
    match product.get("code") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn base_quantity(product: &Value) -> f64 {
    lazy_static::lazy_static! {
        // "500 g" → 500
        static ref LEADING_DIGITS_RE: Regex = Regex::new(r"^(\d+)").unwrap();
    }

    match product.get("product_quantity") {
        Some(Value::Number(n)) => return n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            if let Ok(value) = s.trim().parse::<f64>() {
                return value;
            }
        }
        _ => {}
    }

    str_field(product, "quantity")
        .and_then(|q| LEADING_DIGITS_RE.captures(q))
        .and_then(|cap| cap[1].parse::<f64>().ok())
        .unwrap_or(0.0)
}
