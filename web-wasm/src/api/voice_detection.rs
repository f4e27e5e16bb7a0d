//! 音声判定API連携（fetch）
//!
//! リクエスト組み立てとレスポンス解釈は `bharatvox_common::protocol` に任せ、
//! ここではブラウザのfetchで送受信するだけ

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use bharatvox_common::{
    endpoint_url, health_url, interpret_health, interpret_response,
    Error, HealthStatus, Result, Submission, VerdictResult,
    API_KEY_HEADER, CONTENT_TYPE_JSON, DEFAULT_API_BASE_URL,
};

/// APIベースURL（ビルド時に `BHARATVOX_API_BASE_URL` で上書き可）
pub const API_BASE_URL: &str = match option_env!("BHARATVOX_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// JS例外を表示用の文字列に変換
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> Error {
    Error::Network(describe_js_error(&value))
}

/// `POST {base}/voice-detection` のリクエストを作る
///
/// APIキーはヘッダーにのみ載せる
pub fn build_detection_request(base_url: &str, submission: &Submission) -> std::result::Result<Request, JsValue> {
    let body = serde_json::to_string(&submission.request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&endpoint_url(base_url), &opts)?;
    request.headers().set("Content-Type", CONTENT_TYPE_JSON)?;
    request.headers().set(API_KEY_HEADER, &submission.api_key)?;
    Ok(request)
}

/// リクエストを送り、ステータスとボディ文字列を返す
async fn send(request: &Request) -> Result<(u16, String)> {
    let window = web_sys::window()
        .ok_or_else(|| Error::Network("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;

    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// 音声判定を1回実行（リトライなし）
pub async fn detect_voice(base_url: &str, submission: &Submission) -> Result<VerdictResult> {
    let request = build_detection_request(base_url, submission).map_err(network_error)?;
    let (status, body) = send(&request).await?;
    interpret_response(status, &body)
}

/// `GET {base}/health`
pub async fn check_health(base_url: &str) -> Result<HealthStatus> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&health_url(base_url), &opts).map_err(network_error)?;
    let (status, body) = send(&request).await?;
    interpret_health(status, &body)
}
