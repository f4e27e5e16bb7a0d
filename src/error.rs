use thiserror::Error;

#[derive(Error, Debug)]
pub enum BharatVoxError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API key is not set. Pass --api-key or set BHARATVOX_API_KEY")]
    MissingApiKey,

    #[error("Language is required. Pass --language (one of: Tamil, English, Hindi, Malayalam, Telugu)")]
    MissingLanguage,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Cannot submit: {0}")]
    FormIncomplete(String),

    /// サーバー/通信エラー（メッセージをそのまま表示）
    #[error("{0}")]
    Analysis(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Client(#[from] bharatvox_common::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BharatVoxError>;
