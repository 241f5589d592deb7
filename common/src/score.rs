//! スコア計算
//!
//! 一致件数 × 重み + 文字数ボーナスを合計し、100点で頭打ちにする。

use serde::{Deserialize, Serialize};

/// キーワード1件あたりの点数
pub const KEYWORD_WEIGHT: u32 = 15;
/// 重点分野1件あたりの点数
pub const FOCUS_WEIGHT: u32 = 20;
/// 要件1件あたりの点数
pub const REQUIREMENT_WEIGHT: u32 = 10;

/// 詳細ボーナスの段階（文字数, 加点）。累積で加算する
const DETAIL_BONUS_STEPS: &[(usize, u32)] = &[(200, 5), (500, 5)];

pub const MAX_SCORE: u32 = 100;

/// スコアの内訳
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub keyword_points: u32,
    pub focus_points: u32,
    pub requirement_points: u32,
    pub detail_bonus: u32,
    /// 頭打ち前の合計
    pub raw_total: u32,
    pub score: u8,
}

impl ScoreBreakdown {
    pub fn is_clamped(&self) -> bool {
        self.raw_total > MAX_SCORE
    }
}

/// 文字数ボーナス（0 / 5 / 10）
pub fn detail_bonus(text_len: usize) -> u32 {
    DETAIL_BONUS_STEPS
        .iter()
        .filter(|(min_len, _)| text_len >= *min_len)
        .map(|(_, bonus)| bonus)
        .sum()
}

/// 提案文の文字数（Unicodeスカラー値の数、トリムしない）
pub fn text_length(text: &str) -> usize {
    text.chars().count()
}

/// 一致件数と文字数からスコアを計算
pub fn calculate(
    keyword_matches: usize,
    focus_matches: usize,
    requirement_matches: usize,
    text_len: usize,
) -> ScoreBreakdown {
    let keyword_points = weighted(keyword_matches, KEYWORD_WEIGHT);
    let focus_points = weighted(focus_matches, FOCUS_WEIGHT);
    let requirement_points = weighted(requirement_matches, REQUIREMENT_WEIGHT);
    let detail_bonus = detail_bonus(text_len);

    let raw_total = keyword_points
        .saturating_add(focus_points)
        .saturating_add(requirement_points)
        .saturating_add(detail_bonus);

    // MAX_SCORE 以下なので u8 に収まる
    let score = raw_total.min(MAX_SCORE) as u8;

    ScoreBreakdown {
        keyword_points,
        focus_points,
        requirement_points,
        detail_bonus,
        raw_total,
        score,
    }
}

fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(weight)
}

/// 提案文の詳しさ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLevel {
    /// 200文字未満
    Brief,
    Good,
}

impl DetailLevel {
    pub fn of(text_len: usize) -> Self {
        if text_len < DETAIL_BONUS_STEPS[0].0 {
            DetailLevel::Brief
        } else {
            DetailLevel::Good
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            DetailLevel::Brief => "Add more detail for better matching",
            DetailLevel::Good => "Good detail level",
        }
    }
}
