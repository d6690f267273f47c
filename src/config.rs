use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 接続先を上書きする環境変数
pub const BASE_URL_ENV: &str = "INGREDIENT_BARCODE_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// 商品詳細で優先する商品名の言語
    pub language: String,
    /// 未設定ならHTTPクライアントの既定値
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            language: "fr".into(),
            timeout_seconds: None,
            user_agent: format!("ingredient-barcode/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        // 環境変数を優先
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LookupError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ingredient-barcode").join("config.json"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let url = url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(LookupError::Config(format!("URLが不正です: {}", url)));
        }
        self.base_url = url;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://world.openfoodfacts.org");
        assert_eq!(config.language, "fr");
        assert!(config.timeout().is_none());
        assert!(config.user_agent.starts_with("ingredient-barcode/"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.language = "en".into();
        config.timeout_seconds = Some(15);
        config.save_to(&path).expect("保存失敗");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.language, "en");
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"language": "de"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language, "de");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_corrupted_file_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, LookupError::JsonParse(_)));
    }

    #[test]
    fn test_set_base_url() {
        let mut config = Config::default();
        config.set_base_url("http://localhost:8080/".into()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");

        assert!(config.set_base_url("ftp://example.org".into()).is_err());
    }
}
