//! 結果行のフォーマット

use crate::types::LookupResult;
use std::fmt;

/// `<食材> → <商品名> (code-barres: <バーコード>)`
pub fn format_line(result: &LookupResult) -> String {
    result.to_string()
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} (code-barres: {})",
            self.ingredient, self.product_name, self.barcode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_found() {
        let result = LookupResult {
            ingredient: "saumon".to_string(),
            product_name: "Saumon fumé".to_string(),
            barcode: "1234567890123".to_string(),
        };
        assert_eq!(
            format_line(&result),
            "saumon → Saumon fumé (code-barres: 1234567890123)"
        );
    }

    #[test]
    fn test_format_not_found() {
        let result = LookupResult::not_found("ingrédient-inexistant-xyz");
        assert_eq!(
            format_line(&result),
            "ingrédient-inexistant-xyz → Aucun produit trouvé (code-barres: N/A)"
        );
    }
}
