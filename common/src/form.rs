//! フォーム送信可否の判定

/// 送信ボタンを有効にできるか
///
/// 言語が選択済み・エンコード済みデータあり・APIキー（前後空白除去後）が空でない
pub fn is_ready(language: &str, api_key: &str, has_payload: bool) -> bool {
    missing_inputs(language, api_key, has_payload).is_empty()
}

/// 送信に足りない入力の表示名（フォームの並び順）
pub fn missing_inputs(language: &str, api_key: &str, has_payload: bool) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if language.is_empty() {
        missing.push("language");
    }
    if !has_payload {
        missing.push("MP3 file");
    }
    if api_key.trim().is_empty() {
        missing.push("API key");
    }
    missing
}
