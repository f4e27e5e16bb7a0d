//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use bharatvox::audio;
use bharatvox::error::BharatVoxError;
use bharatvox_common::Error;
use std::path::Path;

/// 存在しないファイルを指定した場合
#[test]
fn test_describe_nonexistent_file() {
    let result = audio::describe_file(Path::new("/nonexistent/path/12345.mp3"));
    assert!(matches!(result, Err(BharatVoxError::FileNotFound(_))));
}

/// BharatVoxErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BharatVoxError::Config("bad config".to_string()),
        BharatVoxError::MissingApiKey,
        BharatVoxError::MissingLanguage,
        BharatVoxError::FileNotFound("voice.mp3".to_string()),
        BharatVoxError::FormIncomplete("missing API key".to_string()),
        BharatVoxError::Analysis("invalid key".to_string()),
        BharatVoxError::Prompt("not a terminal".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }
}

/// サーバーのメッセージはそのまま表示される
#[test]
fn test_analysis_message_verbatim() {
    let err = BharatVoxError::Analysis("invalid key".to_string());
    assert_eq!(err.to_string(), "invalid key");
}

/// 共通エラーはDisplayを透過する
#[test]
fn test_client_error_transparent() {
    let err: BharatVoxError = Error::InvalidFileType.into();
    assert_eq!(err.to_string(), "Please select a valid MP3 file");

    let err: BharatVoxError = Error::FileTooLarge { size: 1, limit: 0 }.into();
    assert_eq!(err.to_string(), "File size must be less than 10MB");
}

/// IOエラーからの変換
#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let error: BharatVoxError = io_error.into();
    assert!(matches!(error, BharatVoxError::Io(_)));
    assert!(error.to_string().contains("access denied"));
}

/// JSONエラーからの変換
#[test]
fn test_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: BharatVoxError = json_error.into();
    assert!(matches!(error, BharatVoxError::JsonParse(_)));
}
