//! LLM API連携（OpenAI互換のchat completions）

use crate::config::Config;
use crate::error::{GrantMatchError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const SYSTEM_PROMPT: &str = "You are a grant proposal analyzer. Extract and enhance key information from the proposal including: project goals, methodology, target community, expected outcomes, technologies, and partnerships. Return a comprehensive summary that highlights all relevant details for grant matching.";

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 1000;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// LLMクライアント
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GrantMatchError::ApiCall(e.to_string()))?;

        Ok(Self {
            http,
            api_url,
            api_key,
            model,
        })
    }

    /// APIキーが設定されていなければ None
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key() else {
            return Ok(None);
        };

        Self::new(
            config.api_url(),
            api_key,
            config.model.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
        .map(Some)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// 提案文の要約を依頼する
    ///
    /// 応答本文が空なら None を返す。
    pub async fn summarize(&self, full_text: &str) -> Result<Option<String>> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Analyze this grant proposal and extract key information:\n\n{}",
                        full_text
                    ),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!(url = %self.api_url, model = %self.model, chars = full_text.len(), "LLMリクエスト送信");

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GrantMatchError::ApiCall(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GrantMatchError::ApiCall(format!("{}: {}", status, text)));
        }

        let payload = response
            .text()
            .await
            .map_err(|e| GrantMatchError::ApiCall(e.to_string()))?;

        parse_chat_response(&payload)
    }
}

/// chat completions のレスポンスから本文を取り出す
pub fn parse_chat_response(payload: &str) -> Result<Option<String>> {
    let parsed: ChatResponse =
        serde_json::from_str(payload).map_err(|e| GrantMatchError::ApiParse(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|c| !c.is_empty());

    Ok(content)
}
