//! 食材の一括照会
//!
//! 入力順に1件ずつ検索し、全件そろってから結果を返す。
//! 1件でも失敗したらその時点で中断する（部分結果は返さない）。

use crate::client::{OpenFoodFactsClient, SearchPage};
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use ingredient_barcode_common::LookupResult;
use tracing::{debug, info};

pub struct LookupRunner<'a> {
    client: &'a OpenFoodFactsClient,
    progress: ProgressBar,
}

impl<'a> LookupRunner<'a> {
    pub fn new(client: &'a OpenFoodFactsClient) -> Self {
        Self {
            client,
            progress: ProgressBar::hidden(),
        }
    }

    /// 標準エラーに進捗バーを表示する
    pub fn with_progress(mut self, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
            bar.set_style(style.progress_chars("=> "));
        }
        self.progress = bar;
        self
    }

    /// 食材1件を照会
    pub async fn fetch_one(&self, ingredient: &str) -> Result<LookupResult> {
        let response = self.client.search(ingredient, SearchPage::default()).await?;
        let result = LookupResult::from_response(ingredient, &response);

        debug!(
            ingredient,
            product = %result.product_name,
            barcode = %result.barcode,
            "lookup done"
        );
        Ok(result)
    }

    /// リスト全体を入力順に照会
    pub async fn run<S: AsRef<str>>(&self, ingredients: &[S]) -> Result<Vec<LookupResult>> {
        let mut results = Vec::with_capacity(ingredients.len());

        for ingredient in ingredients {
            let ingredient = ingredient.as_ref();
            self.progress.set_message(ingredient.to_string());

            match self.fetch_one(ingredient).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    self.progress.abandon();
                    return Err(e);
                }
            }
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();

        let found = results.iter().filter(|r| r.is_found()).count();
        info!(total = results.len(), found, "lookup run finished");
        Ok(results)
    }
}
