//! バイナリを実行してエラー表示を確認する結合テスト

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::path::Path;
use std::process::Output;
use tempfile::{tempdir, TempDir};
use tokio::process::Command;

/// 常に同じエラーを返すモックサーバーを起動しベースURLを返す
async fn spawn_error_server(status: StatusCode, response: Value) -> String {
    let app = Router::new().route(
        "/api/voice-detection",
        post(move || {
            let response = response.clone();
            async move { (status, Json(response)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path.display().to_string()
}

/// 設定ファイル・環境変数の影響を受けないように実行する
async fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bharatvox"))
        .args(args)
        .env("HOME", home)
        .env_remove("BHARATVOX_API_KEY")
        .env_remove("BHARATVOX_API_BASE_URL")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("バイナリの起動に失敗")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[tokio::test]
async fn test_non_mp3_prints_user_message() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "voice.wav", b"RIFF\x24\x00\x00\x00WAVE");

    let output = run_cli(dir.path(), &["analyze", &path, "-l", "tamil", "--api-key", "k"]).await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error: Please select a valid MP3 file"), "stderr: {}", err);
    assert!(!err.contains("InvalidFileType"), "stderr: {}", err);
}

#[tokio::test]
async fn test_oversized_prints_user_message() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "big.mp3", &vec![0u8; 11_000_000]);

    let output = run_cli(dir.path(), &["analyze", &path, "-l", "tamil", "--api-key", "k"]).await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error: File size must be less than 10MB"), "stderr: {}", err);
    assert!(!err.contains("FileTooLarge"), "stderr: {}", err);
}

#[tokio::test]
async fn test_server_detail_is_printed_verbatim() {
    let base_url = spawn_error_server(StatusCode::UNAUTHORIZED, json!({ "detail": "invalid key" })).await;
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "voice.mp3", b"ID3\x04\x00\x00\x00\x00\x00\x00");

    let output = run_cli(
        dir.path(),
        &["analyze", &path, "-l", "tamil", "--api-key", "wrong", "--base-url", &base_url],
    )
    .await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error: invalid key"), "stderr: {}", err);
    assert!(!err.contains("Analysis("), "stderr: {}", err);
}

#[tokio::test]
async fn test_missing_api_key_prints_hint() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "voice.mp3", b"ID3\x04\x00\x00\x00\x00\x00\x00");

    let output = run_cli(dir.path(), &["analyze", &path, "-l", "tamil"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: API key is not set"));
}
