//! Open Food Facts APIクライアント
//!
//! - 検索: `GET /cgi/search.pl`
//! - 商品詳細: `GET /api/v2/product/{barcode}.json`
//!
//! リトライは行わない。通信・ステータス・パースの失敗はそのまま呼び出し元へ返す。

use crate::config::Config;
use crate::error::{LookupError, Result};
use ingredient_barcode_common::{parse_search_response, SearchResponse};
use reqwest::{header, Client, Response, StatusCode, Url};
use tracing::debug;

const SEARCH_PATH: &str = "/cgi/search.pl";

/// 検索パラメータ
#[derive(Debug, Clone, Copy)]
pub struct SearchPage {
    pub page: u32,
    pub page_size: u32,
}

impl Default for SearchPage {
    /// 最上位の1件のみ
    fn default() -> Self {
        Self { page: 1, page_size: 1 }
    }
}

pub struct OpenFoodFactsClient {
    http: Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 接続先だけを指定して生成（その他は既定値）
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let config = Config {
            base_url: base_url.into(),
            ..Config::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 食材名で検索
    pub async fn search(&self, terms: &str, page: SearchPage) -> Result<SearchResponse> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);

        let mut query: Vec<(&str, String)> = vec![
            ("search_terms", terms.to_string()),
            ("search_simple", "1".into()),
            ("action", "process".into()),
            ("json", "1".into()),
            ("page_size", page.page_size.to_string()),
        ];
        if page.page > 1 {
            query.push(("page", page.page.to_string()));
        }

        debug!(terms, page = page.page, page_size = page.page_size, "search request");

        let response = self.http.get(&url).query(&query).send().await?;
        let body = ensure_success(response)?.text().await?;

        let parsed = parse_search_response(&body)?;
        debug!(terms, hits = parsed.products.len(), "search response");
        Ok(parsed)
    }

    /// バーコードで商品を取得
    ///
    /// 404 または `"status": 0` の場合は `Ok(None)`。
    pub async fn product(&self, barcode: &str) -> Result<Option<serde_json::Value>> {
        let url = self.product_url(barcode)?;
        debug!(barcode, "product request");

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(barcode, "product not found (404)");
            return Ok(None);
        }

        let body = ensure_success(response)?.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        if value.get("status").and_then(|s| s.as_i64()) == Some(0) {
            debug!(barcode, "product not found (status 0)");
            return Ok(None);
        }

        Ok(Some(value))
    }

    /// バーコードはパスセグメントとしてエンコードする（`/` や `?` を含んでも宛先が変わらない）
    pub(crate) fn product_url(&self, barcode: &str) -> Result<Url> {
        let invalid = || LookupError::Config(format!("URLが不正です: {}", self.base_url));

        let file_name = format!("{}.json", barcode);
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["api", "v2", "product", file_name.as_str()]);
        Ok(url)
    }
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(LookupError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}
