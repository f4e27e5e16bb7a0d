//! 音声判定APIの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - VoiceDetectionRequest: `POST /voice-detection` のリクエストボディ
//! - VerdictResult: 判定結果（成功レスポンス）
//! - HealthStatus: `GET /health` のレスポンス

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 対応言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Tamil,
    English,
    Hindi,
    Malayalam,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Tamil,
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Telugu,
    ];

    /// APIに送る値（表示名と同じ）
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tamil => "Tamil",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Malayalam => "Malayalam",
            Language::Telugu => "Telugu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    /// 大文字小文字を区別しない
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let names: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
                format!("unknown language '{}' (expected one of: {})", needle, names.join(", "))
            })
    }
}

/// 音声フォーマット（MP3のみ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    #[default]
    #[serde(rename = "mp3")]
    Mp3,
}

/// 判定区分
///
/// `AI_GENERATED` / `HUMAN` 以外の値もそのまま保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Classification {
    AiGenerated,
    Human,
    Other(String),
}

impl Classification {
    pub fn as_str(&self) -> &str {
        match self {
            Classification::AiGenerated => "AI_GENERATED",
            Classification::Human => "HUMAN",
            Classification::Other(value) => value,
        }
    }
}

impl From<String> for Classification {
    fn from(value: String) -> Self {
        match value.as_str() {
            "AI_GENERATED" => Classification::AiGenerated,
            "HUMAN" => Classification::Human,
            _ => Classification::Other(value),
        }
    }
}

impl From<Classification> for String {
    fn from(value: Classification) -> Self {
        match value {
            Classification::Other(value) => value,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 判定リクエスト
///
/// APIキーはヘッダーで送るためここには含めない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceDetectionRequest {
    pub language: String,
    pub audio_format: AudioFormat,
    pub audio_base64: String,
}

impl VoiceDetectionRequest {
    pub fn mp3(language: impl Into<String>, audio_base64: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            audio_format: AudioFormat::Mp3,
            audio_base64: audio_base64.into(),
        }
    }
}

/// 判定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub language: String,
    pub classification: Classification,
    pub confidence_score: f64,
    #[serde(default)]
    pub explanation: String,
}

/// ヘルスチェック結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "ok")
    }
}
