//! 共有リンク
//!
//! 提案文と解析結果をJSON → URLセーフBase64にして `?share=` に載せる。
//! 旧形式（JSONをパーセントエンコードしてから標準Base64）も読み込める。
//! 添付ファイルは復元できない。

use crate::error::{GrantMatchError, Result};
use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};
use grant_match_common::MatchResult;
use serde::{Deserialize, Serialize};

const SHARE_PARAM: &str = "share=";

/// 共有される解析結果（所有データ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedAnalysis {
    pub proposal_text: String,
    #[serde(default)]
    pub results: Vec<SharedResult>,
    /// RFC 3339
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedResult {
    pub id: u32,
    pub name: String,
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub matched_focus_areas: Vec<String>,
    pub matched_requirements: Vec<String>,
}

impl From<&MatchResult<'_>> for SharedResult {
    fn from(result: &MatchResult<'_>) -> Self {
        Self {
            id: result.record.id,
            name: result.record.name.clone(),
            score: result.score,
            matched_keywords: owned(&result.matched_keywords),
            matched_focus_areas: owned(&result.matched_focus_areas),
            matched_requirements: owned(&result.matched_requirements),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SharedAnalysis {
    /// 現在時刻付きで作成
    pub fn new(proposal_text: &str, results: &[MatchResult<'_>]) -> Self {
        Self {
            proposal_text: proposal_text.to_string(),
            results: results.iter().map(SharedResult::from).collect(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// 共有トークンに変換
pub fn encode(analysis: &SharedAnalysis) -> Result<String> {
    let json = serde_json::to_vec(analysis)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// 共有トークンまたは `share=` を含むURLから復元
pub fn decode(token_or_url: &str) -> Result<SharedAnalysis> {
    let token = extract_token(token_or_url.trim());

    match decode_token(token) {
        Ok(analysis) => Ok(analysis),
        Err(err) => decode_legacy_token(token).map_err(|_| err),
    }
}

fn decode_token(token: &str) -> Result<SharedAnalysis> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| GrantMatchError::ShareDecode(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| GrantMatchError::ShareDecode(e.to_string()))
}

/// 旧形式: 標準Base64 → パーセントデコード → JSON
fn decode_legacy_token(token: &str) -> Result<SharedAnalysis> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| GrantMatchError::ShareDecode(e.to_string()))?;
    let escaped =
        String::from_utf8(bytes).map_err(|e| GrantMatchError::ShareDecode(e.to_string()))?;
    let json = percent_decode(&escaped)?;

    serde_json::from_str(&json).map_err(|e| GrantMatchError::ShareDecode(e.to_string()))
}

/// `%XX` をバイトに戻してUTF-8として解釈する
fn percent_decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let byte = match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) => hex_value(hi).zip(hex_value(lo)).map(|(h, l)| (h << 4) | l),
                _ => None,
            }
            .ok_or_else(|| GrantMatchError::ShareDecode(format!("不正なエスケープ: 位置 {}", i)))?;
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).map_err(|e| GrantMatchError::ShareDecode(e.to_string()))
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

/// `<base>?share=<token>` を組み立てる
pub fn share_url(base: &str, token: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}{}", base, separator, SHARE_PARAM, token)
}

fn extract_token(input: &str) -> &str {
    match input.find(SHARE_PARAM) {
        Some(idx) => {
            let rest = &input[idx + SHARE_PARAM.len()..];
            rest.split(&['&', '#'][..]).next().unwrap_or(rest)
        }
        None => input,
    }
}
