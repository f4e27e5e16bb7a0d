//! 音声判定APIのワイヤプロトコル
//!
//! HTTPクライアントに依存しない部分（URL・ヘッダー名・レスポンス解釈）

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{HealthStatus, VerdictResult};

/// 既定のAPIベースURL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// APIキーを載せるヘッダー
pub const API_KEY_HEADER: &str = "x-api-key";

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// エラーボディからメッセージを取り出せないときの文言
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

const VOICE_DETECTION_PATH: &str = "/voice-detection";
const HEALTH_PATH: &str = "/health";

/// `POST {base}/voice-detection`
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), VOICE_DETECTION_PATH)
}

/// `GET {base}/health`
pub fn health_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), HEALTH_PATH)
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// レスポンスを判定結果またはエラーに変換
pub fn interpret_response(status: u16, body: &str) -> Result<VerdictResult> {
    if !is_success(status) {
        return Err(Error::Api(extract_error_message(body)));
    }
    serde_json::from_str(body).map_err(|e| Error::InvalidResponse(e.to_string()))
}

/// ヘルスチェックのレスポンスを解釈
pub fn interpret_health(status: u16, body: &str) -> Result<HealthStatus> {
    if !is_success(status) {
        return Err(Error::Api(extract_error_message(body)));
    }
    serde_json::from_str(body).map_err(|e| Error::InvalidResponse(e.to_string()))
}

/// エラーボディからメッセージを抽出
///
/// `message` → `detail` → 汎用メッセージ の順に採用する。
/// `detail` が配列（422のバリデーションエラー）の場合は各 `msg` を `; ` で連結
pub fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return FALLBACK_ERROR_MESSAGE.to_string();
    };

    message_field(&value, "message")
        .or_else(|| message_field(&value, "detail"))
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

fn message_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str).or_else(|| item.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Classification;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://localhost:8000/api"), "http://localhost:8000/api/voice-detection");
        assert_eq!(endpoint_url("https://vox.example/api/"), "https://vox.example/api/voice-detection");
    }

    #[test]
    fn test_health_url() {
        assert_eq!(health_url("http://localhost:8000/api//"), "http://localhost:8000/api/health");
    }

    #[test]
    fn test_interpret_success() {
        let body = r#"{"language":"Telugu","classification":"HUMAN","confidenceScore":0.91,"explanation":"ok"}"#;
        let verdict = interpret_response(200, body).expect("成功レスポンスの解釈に失敗");
        assert_eq!(verdict.language, "Telugu");
        assert_eq!(verdict.classification, Classification::Human);
    }

    #[test]
    fn test_interpret_success_malformed_body() {
        let result = interpret_response(200, "<html>gateway</html>");
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn test_error_detail_string() {
        let result = interpret_response(401, r#"{"detail": "invalid key"}"#);
        match result {
            Err(Error::Api(message)) => assert_eq!(message, "invalid key"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_message_preferred_over_detail() {
        let message = extract_error_message(r#"{"status":"error","message":"Missing: language","detail":"x"}"#);
        assert_eq!(message, "Missing: language");
    }

    #[test]
    fn test_error_empty_message_falls_through_to_detail() {
        let message = extract_error_message(r#"{"message":"","detail":"Invalid API key"}"#);
        assert_eq!(message, "Invalid API key");
    }

    #[test]
    fn test_error_without_known_fields() {
        assert_eq!(extract_error_message(r#"{"error":"boom"}"#), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message("Internal Server Error"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message(""), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_detail_validation_array() {
        let body = r#"{"detail":[
            {"loc":["body","language"],"msg":"value is not a valid enumeration member","type":"type_error.enum"},
            {"loc":["body","audioBase64"],"msg":"Invalid or too short base64 audio data","type":"value_error"}
        ]}"#;
        assert_eq!(
            extract_error_message(body),
            "value is not a valid enumeration member; Invalid or too short base64 audio data"
        );
    }

    #[test]
    fn test_interpret_health() {
        let health = interpret_health(200, r#"{"status":"healthy","service":"BharatVox AI"}"#).unwrap();
        assert!(health.is_healthy());
        assert!(matches!(interpret_health(503, "{}"), Err(Error::Api(m)) if m == FALLBACK_ERROR_MESSAGE));
    }
}
