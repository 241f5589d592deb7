//! 提案文の解析（カタログ全件の照合とスコア順ソート）

use crate::matcher::{match_focus_areas, match_keywords, match_requirements};
use crate::score::{self, text_length};
use crate::text::{is_space, NormalizedText};
use crate::types::{FundingRecord, MatchResult};

/// 空または空白のみの提案文か（BOMも空白扱い）
pub fn is_blank(proposal_text: &str) -> bool {
    proposal_text.chars().all(is_space)
}

/// 1件のレコードと照合
pub fn analyze_record<'a>(proposal_text: &str, record: &'a FundingRecord) -> MatchResult<'a> {
    let text = NormalizedText::new(proposal_text);
    score_record(&text, text_length(proposal_text), record)
}

/// 小文字化済みテキストでレコードを採点
///
/// `text_len` は元の提案文の文字数。
pub fn score_record<'a>(
    text: &NormalizedText,
    text_len: usize,
    record: &'a FundingRecord,
) -> MatchResult<'a> {
    let matched_keywords = match_keywords(text, &record.keywords);
    let matched_focus_areas = match_focus_areas(text, &record.focus_areas);
    let matched_requirements = match_requirements(text, &record.requirements);

    let breakdown = score::calculate(
        matched_keywords.len(),
        matched_focus_areas.len(),
        matched_requirements.len(),
        text_len,
    );

    MatchResult {
        record,
        score: breakdown.score,
        matched_keywords,
        matched_focus_areas,
        matched_requirements,
        breakdown,
    }
}

/// スコア降順に安定ソート（同点はカタログ順を保つ）
pub fn sort_by_score(results: &mut [MatchResult<'_>]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

/// 提案文をカタログ全件と照合し、スコア降順で返す
///
/// 空または空白のみの提案文は空のVecを返す。
pub fn analyze_proposal<'a>(
    proposal_text: &str,
    catalog: &'a [FundingRecord],
) -> Vec<MatchResult<'a>> {
    if is_blank(proposal_text) {
        return Vec::new();
    }

    let text = NormalizedText::new(proposal_text);
    let text_len = text_length(proposal_text);

    let mut results: Vec<MatchResult<'a>> = catalog
        .iter()
        .map(|record| score_record(&text, text_len, record))
        .collect();

    sort_by_score(&mut results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, keywords: &[&str], focus: &[&str], requirements: &[&str]) -> FundingRecord {
        FundingRecord {
            id,
            name: format!("Grant {}", id),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            focus_areas: focus.iter().map(|s| s.to_string()).collect(),
            requirements: requirements.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t "));
        assert!(!is_blank(" a "));
        assert!(is_blank("\u{feff}"));
        assert!(is_blank(" \u{feff}\n"));
    }

    #[test]
    fn test_analyze_proposal_blank_returns_empty() {
        let catalog = vec![record(1, &["solar"], &[], &[])];

        assert!(analyze_proposal("", &catalog).is_empty());
        assert!(analyze_proposal("  \n ", &catalog).is_empty());
        assert!(analyze_proposal("\u{feff}", &catalog).is_empty());
    }

    #[test]
    fn test_analyze_record_keyword_scenario() {
        let grant = record(1, &["solar", "wind", "battery", "grid"], &[], &[]);
        let result = analyze_record("solar wind battery renewable energy sustainability", &grant);

        assert_eq!(result.matched_keywords, vec!["solar", "wind", "battery"]);
        assert_eq!(result.breakdown.keyword_points, 45);
        assert_eq!(result.score, 45);
        assert_eq!(result.record.id, 1);
    }

    #[test]
    fn test_analyze_record_combines_categories() {
        let grant = record(
            1,
            &["solar", "grid"],
            &["renewable energy", "climate action"],
            &["feasibility study", "evaluation plan"],
        );
        let result = analyze_record("Solar microgrid with a feasibility assessment", &grant);

        // "grid" は "microgrid" に含まれる
        assert_eq!(result.matched_keywords, vec!["solar", "grid"]);
        assert!(result.matched_focus_areas.is_empty());
        assert_eq!(result.matched_requirements, vec!["feasibility study"]);
        assert_eq!(result.score, 40);
    }

    #[test]
    fn test_analyze_proposal_sorted_and_stable() {
        let catalog = vec![
            record(1, &["cooking"], &[], &[]),
            record(2, &["solar"], &[], &[]),
            record(3, &["travel"], &[], &[]),
            record(4, &["solar", "wind"], &[], &[]),
            record(5, &["wind"], &[], &[]),
        ];

        let results = analyze_proposal("solar and wind power", &catalog);
        let ids: Vec<u32> = results.iter().map(|r| r.record.id).collect();

        // 30点: 4 / 15点: 2, 5（カタログ順）/ 0点: 1, 3（カタログ順）
        assert_eq!(ids, vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_analyze_proposal_returns_every_record() {
        let catalog = vec![record(1, &[], &[], &[]), record(2, &[], &[], &[])];

        let results = analyze_proposal("nothing relevant here", &catalog);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 0));
        assert!(results.iter().all(|r| !r.has_matches()));
    }

    #[test]
    fn test_analyze_proposal_empty_catalog() {
        assert!(analyze_proposal("solar", &[]).is_empty());
    }
}
