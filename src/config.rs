use crate::error::{GrantMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_API_KEY: &str = "GRANT_MATCH_LLM_API_KEY";
pub const ENV_API_URL: &str = "GRANT_MATCH_LLM_API_URL";

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub max_attachments: usize,
    pub max_attachment_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout_seconds: 60,
            max_attachments: 3,
            max_attachment_bytes: 5 * 1024 * 1024, // 5MB
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GrantMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("grant-match").join("config.json"))
    }

    /// APIキー（環境変数を優先）
    pub fn api_key(&self) -> Option<String> {
        match std::env::var(ENV_API_KEY) {
            Ok(key) if !key.trim().is_empty() => Some(key),
            _ => self.api_key.clone().filter(|k| !k.trim().is_empty()),
        }
    }

    /// APIエンドポイント（環境変数を優先）
    pub fn api_url(&self) -> String {
        match std::env::var(ENV_API_URL) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.api_url.clone(),
        }
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = url;
        self.save()
    }
}
