use crate::error::{BharatVoxError, Result};
use bharatvox_common::{Language, DEFAULT_API_BASE_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "BHARATVOX_API_KEY";
pub const BASE_URL_ENV: &str = "BHARATVOX_API_BASE_URL";

/// CLI設定（読み込みのみ。書き戻しはしない）
///
/// 優先順位: CLIフラグ > 環境変数 > 設定ファイル > 既定値
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_BASE_URL.into(),
            default_language: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(std::env::var(API_KEY_ENV).ok(), std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    /// ファイルがなければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BharatVoxError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("bharatvox").join("config.json"))
    }

    /// 空文字の上書き値は無視する
    pub fn apply_overrides(&mut self, api_key: Option<String>, base_url: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
    }

    pub fn resolve_api_key(&self, flag: Option<String>) -> Result<String> {
        flag.or_else(|| self.api_key.clone())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(BharatVoxError::MissingApiKey)
    }

    pub fn resolve_base_url(&self, flag: Option<String>) -> String {
        flag.filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }

    pub fn resolve_default_language(&self) -> Result<Option<Language>> {
        self.default_language
            .as_deref()
            .map(|s| s.parse::<Language>().map_err(BharatVoxError::Config))
            .transpose()
    }
}
