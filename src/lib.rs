//! ingredient-barcode
//!
//! 食材名で Open Food Facts を検索し、最上位の商品名とバーコードを取得する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod product;
pub mod report;
pub mod runner;

pub use client::{OpenFoodFactsClient, SearchPage};
pub use error::{LookupError, Result};
pub use ingredient_barcode_common::LookupResult;
pub use product::ProductDetails;
pub use runner::LookupRunner;
