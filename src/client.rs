//! 音声判定APIクライアント（reqwest）

use bharatvox_common::{
    endpoint_url, health_url, interpret_health, interpret_response, Error, HealthStatus,
    Result, Submission, VerdictResult, API_KEY_HEADER,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct VoiceClient {
    http: reqwest::Client,
    base_url: String,
}

fn network_error(err: reqwest::Error) -> Error {
    Error::Network(err.to_string())
}

impl VoiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 音声判定を1回実行（リトライ・タイムアウトなし）
    pub async fn detect(&self, submission: &Submission) -> Result<VerdictResult> {
        let url = endpoint_url(&self.base_url);
        debug!(
            %url,
            language = %submission.request.language,
            payload_len = submission.request.audio_base64.len(),
            "POST voice-detection"
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &submission.api_key)
            .json(&submission.request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;
        debug!(status, body_len = body.len(), "voice-detection response");

        interpret_response(status, &body)
    }

    /// `GET {base}/health`
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = health_url(&self.base_url);
        debug!(%url, "GET health");

        let response = self.http.get(&url).send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;

        interpret_health(status, &body)
    }
}
