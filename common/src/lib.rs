//! ingredient-barcode Common Library
//!
//! CLIとテストで共有される型とユーティリティ

pub mod error;
pub mod ingredients;
pub mod lookup;
pub mod parser;
pub mod report;
pub mod types;

pub use error::{Error, Result};
pub use ingredients::{default_ingredients, parse_ingredient_list, DEFAULT_INGREDIENTS};
pub use lookup::{NOT_AVAILABLE, NO_PRODUCT_FOUND};
pub use parser::parse_search_response;
pub use report::format_line;
pub use types::{LookupResult, Product, SearchResponse};
