use crate::error::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ingredient_barcode_common::{default_ingredients, parse_ingredient_list};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ingredient-barcode", version)]
#[command(about = "食材名から Open Food Facts の商品名・バーコードを照会", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 食材リストを照会（省略時は組み込みリスト）
    Lookup(LookupArgs),

    /// バーコードで商品詳細を取得
    Product {
        /// バーコード（EAN/GTIN）
        #[arg(required = true)]
        barcode: String,

        /// 出力形式 (text/json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// キーワード検索の結果を一覧表示
    Search {
        /// 検索語
        #[arg(required = true)]
        query: String,

        /// ページ番号
        #[arg(long, default_value = "1")]
        page: u32,

        /// ページあたりの件数
        #[arg(long, default_value = "20")]
        page_size: u32,
    },

    /// 組み込みの食材リストを表示
    Ingredients,

    /// 設定を表示/編集
    Config {
        /// 接続先URLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 商品名の優先言語を設定 (fr/en/...)
        #[arg(long)]
        set_language: Option<String>,

        /// タイムアウト秒数を設定（0で解除）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct LookupArgs {
    /// 照会する食材（入力順に出力）
    pub ingredients: Vec<String>,

    /// 食材リストファイル（1行1食材）
    #[arg(short, long, conflicts_with = "ingredients")]
    pub file: Option<PathBuf>,

    /// 出力形式 (text/json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl LookupArgs {
    /// 照会対象の食材リストを決定
    ///
    /// 引数 → ファイル → 組み込みリストの順。
    pub fn resolve_ingredients(&self) -> Result<Vec<String>> {
        if !self.ingredients.is_empty() {
            return Ok(self.ingredients.clone());
        }

        match &self.file {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(parse_ingredient_list(&content))
            }
            None => Ok(default_ingredients()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["ingredient-barcode"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_lookup_args() {
        let cli = Cli::try_parse_from([
            "ingredient-barcode", "lookup", "saumon", "riz", "--format", "json", "-v",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Lookup(args)) => {
                assert_eq!(args.ingredients, vec!["saumon", "riz"]);
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.file.is_none());
            }
            _ => panic!("lookup が解析されない"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_file_conflicts_with_ingredients() {
        let result =
            Cli::try_parse_from(["ingredient-barcode", "lookup", "saumon", "--file", "list.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_default_list() {
        let list = LookupArgs::default().resolve_ingredients().unwrap();
        assert_eq!(list.len(), 33);
        assert_eq!(list[3], "saumon");
    }

    #[test]
    fn test_resolve_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("courses.txt");
        std::fs::write(&path, "beurre\n\nsaumon\n").unwrap();

        let args = LookupArgs {
            file: Some(path),
            ..Default::default()
        };
        assert_eq!(args.resolve_ingredients().unwrap(), vec!["beurre", "saumon"]);
    }

    #[test]
    fn test_resolve_missing_file() {
        let args = LookupArgs {
            file: Some(PathBuf::from("/nonexistent/courses.txt")),
            ..Default::default()
        };
        assert!(args.resolve_ingredients().is_err());
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["ingredient-barcode", "search", "beurre"]).unwrap();
        match cli.command {
            Some(Commands::Search { query, page, page_size }) => {
                assert_eq!(query, "beurre");
                assert_eq!(page, 1);
                assert_eq!(page_size, 20);
            }
            _ => panic!("search が解析されない"),
        }
    }
}
