//! キーワード・重点分野・要件の照合
//!
//! いずれもレコード側の順序を保ち、重複も除去しない。

use crate::text::{normalize, split_words, NormalizedText};

/// 要件の先頭語フォールバックに必要な文字数（4文字以上）
const FIRST_WORD_MIN_CHARS: usize = 4;

/// 提案文に含まれるキーワードを返す
pub fn match_keywords<'a>(text: &NormalizedText, keywords: &'a [String]) -> Vec<&'a str> {
    keywords
        .iter()
        .filter(|keyword| text.contains_lowered(&normalize(keyword)))
        .map(String::as_str)
        .collect()
}

/// 提案文に含まれる重点分野を返す
///
/// 全体一致しない複数語ラベルは、いずれか1語が含まれれば一致とする。
pub fn match_focus_areas<'a>(text: &NormalizedText, focus_areas: &'a [String]) -> Vec<&'a str> {
    focus_areas
        .iter()
        .filter(|area| {
            let lowered = normalize(area);
            if text.contains_lowered(&lowered) {
                return true;
            }

            let words = split_words(&lowered);
            words.len() > 1 && words.iter().any(|word| text.contains_lowered(word))
        })
        .map(String::as_str)
        .collect()
}

/// 提案文で言及されている要件を返す
///
/// 全体一致しない場合は先頭語（4文字以上）が含まれれば一致とする。
pub fn match_requirements<'a>(
    text: &NormalizedText,
    requirements: &'a [String],
) -> Vec<&'a str> {
    requirements
        .iter()
        .filter(|requirement| {
            let lowered = normalize(requirement);
            if text.contains_lowered(&lowered) {
                return true;
            }

            let first_word = split_words(&lowered).first().copied().unwrap_or_default();
            first_word.chars().count() >= FIRST_WORD_MIN_CHARS && text.contains_lowered(first_word)
        })
        .map(String::as_str)
        .collect()
}
