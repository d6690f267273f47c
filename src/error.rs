use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("APIがエラーステータスを返しました: {status} ({url})")]
    Status { status: u16, url: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] ingredient_barcode_common::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
