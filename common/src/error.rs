//! エラー型定義
//!
//! Displayの文言はそのままユーザーに表示される

use thiserror::Error;

/// メッセージが空のときに表示する汎用メッセージ
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while analyzing the voice";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select a valid MP3 file")]
    InvalidFileType,

    #[error("File size must be less than 10MB")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Failed to read file")]
    Read(String),

    #[error("Invalid base64 audio data: {0}")]
    Decode(#[from] base64::DecodeError),

    /// サーバーが返したエラーメッセージ（そのまま表示）
    #[error("{0}")]
    Api(String),

    /// 通信失敗（fetch/reqwestのエラー文言）
    #[error("{0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// ユーザーに表示するメッセージ
    ///
    /// 空文字になる場合は汎用メッセージにフォールバックする
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
