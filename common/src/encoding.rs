//! 音声データのBase64エンコード

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::Result;
use crate::validation::looks_like_mp3;

/// バイト列を標準Base64（パディングあり）に変換
pub fn encode_audio(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Data URLのプレフィックスを除去
///
/// `"data:audio/mpeg;base64,SUQz..."` → `"SUQz..."`。
/// カンマを含まない場合はそのまま返す
pub fn strip_data_url_prefix(text: &str) -> &str {
    match text.split_once(',') {
        Some((_, data)) => data,
        None => text,
    }
}

/// Base64（Data URL可）をバイト列に戻す
pub fn decode_audio(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(strip_data_url_prefix(text).trim())?)
}

/// Base64の先頭だけをデコードしてMP3シグネチャを確認
pub fn encoded_looks_like_mp3(encoded: &str) -> bool {
    let data = strip_data_url_prefix(encoded);
    let head = data.get(..8).unwrap_or(data);
    decode_audio(head)
        .map(|bytes| looks_like_mp3(&bytes))
        .unwrap_or(false)
}
