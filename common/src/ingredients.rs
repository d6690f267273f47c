//! 食材リスト

/// 組み込みの食材リスト（照会順）
pub const DEFAULT_INGREDIENTS: &[&str] = &[
    "poitrine de poulet",
    "entrecôte de boeuf",
    "filet de porc",
    "saumon",
    "moules",
    "jambon cru",
    "pommes de terre",
    "carottes",
    "oignons",
    "ail",
    "tomates",
    "courgettes",
    "salade",
    "citron",
    "pommes",
    "bananes",
    "oranges",
    "lait entier",
    "crème fraîche",
    "beurre",
    "fromage râpé",
    "pâtes",
    "riz",
    "farine",
    "sucre",
    "huile d'olive",
    "vinaigre balsamique",
    "tomates pelées",
    "olives",
    "moutarde de Dijon",
    "pain",
    "chocolat pâtissier",
    "oeufs",
];

/// 組み込みリストを所有型で取得
pub fn default_ingredients() -> Vec<String> {
    DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()).collect()
}

/// 1行1食材のテキストを読み込む
///
/// 空行のみ除外する。空白だけの行や重複はそのまま残す。
pub fn parse_ingredient_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_order() {
        let list = default_ingredients();
        assert_eq!(list.len(), 33);
        assert_eq!(list.first().map(String::as_str), Some("poitrine de poulet"));
        assert_eq!(list.last().map(String::as_str), Some("oeufs"));
    }

    #[test]
    fn test_parse_list_keeps_order_and_duplicates() {
        let list = parse_ingredient_list("riz\nsaumon\nriz\n");
        assert_eq!(list, vec!["riz", "saumon", "riz"]);
    }

    #[test]
    fn test_parse_list_crlf_and_blank_lines() {
        let list = parse_ingredient_list("ail\r\n\r\n  \r\ncitron");
        assert_eq!(list, vec!["ail", "  ", "citron"]);
    }

    #[test]
    fn test_parse_list_empty() {
        assert!(parse_ingredient_list("").is_empty());
    }
}
