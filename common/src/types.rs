//! 助成金レコードと照合結果の型定義
//!
//! CLIとライブラリで共有される型:
//! - FundingRecord: カタログの1件（不変）
//! - MatchResult: 提案文と1件のレコードの照合結果
//! - MatchStrength: スコアから導く一致度ラベル

use crate::score::ScoreBreakdown;
use serde::{Deserialize, Deserializer, Serialize};

/// 助成プログラム1件
///
/// 表示用の文字列はスコア計算に使わない。
/// `focus` / `keywords` / `requirements` が欠けていても `null` でも空として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingRecord {
    pub id: u32,
    pub name: String,
    pub funder: String,
    pub amount: String,
    pub deadline: String,

    /// 重点分野（例: "renewable energy"）
    #[serde(rename = "focus", alias = "focusAreas", deserialize_with = "null_as_empty")]
    pub focus_areas: Vec<String>,

    #[serde(deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,

    /// 要件フレーズ（例: "feasibility study"）
    #[serde(deserialize_with = "null_as_empty")]
    pub requirements: Vec<String>,

    pub description: String,
    pub website: String,
    pub contact: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// 照合結果
///
/// `matched_*` はレコード側のコレクションの部分列で、元の順序を保つ。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub record: &'a FundingRecord,
    pub score: u8,
    pub matched_keywords: Vec<&'a str>,
    pub matched_focus_areas: Vec<&'a str>,
    pub matched_requirements: Vec<&'a str>,
    pub breakdown: ScoreBreakdown,
}

impl MatchResult<'_> {
    pub fn strength(&self) -> MatchStrength {
        MatchStrength::from_score(self.score)
    }

    /// 何かしら一致があったか
    pub fn has_matches(&self) -> bool {
        !self.matched_keywords.is_empty()
            || !self.matched_focus_areas.is_empty()
            || !self.matched_requirements.is_empty()
    }
}

/// 一致度ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    /// 70点以上
    Strong,
    /// 40点以上
    Moderate,
    Weak,
}

impl MatchStrength {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            MatchStrength::Strong
        } else if score >= 40 {
            MatchStrength::Moderate
        } else {
            MatchStrength::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStrength::Strong => "Strong Match",
            MatchStrength::Moderate => "Moderate Match",
            MatchStrength::Weak => "Weak Match",
        }
    }
}

impl std::fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
