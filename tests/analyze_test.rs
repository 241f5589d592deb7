//! 照合エンジンの結合テスト
//!
//! 組み込みカタログに対する並び順・スコア・一致内容を検証

use grant_match::analyzer::{analyze, analyze_parallel, analyze_proposal};
use grant_match::common::{Catalog, FundingRecord, MatchResult};

fn builtin() -> Catalog {
    Catalog::builtin().expect("組み込みカタログの読み込み失敗")
}

fn ids(results: &[MatchResult<'_>]) -> Vec<u32> {
    results.iter().map(|r| r.record.id).collect()
}

fn scores(results: &[MatchResult<'_>]) -> Vec<u8> {
    results.iter().map(|r| r.score).collect()
}

/// `sub` が `full` の部分列（順序保持）か
fn is_subsequence(sub: &[&str], full: &[String]) -> bool {
    let mut iter = full.iter();
    sub.iter().all(|s| iter.any(|f| f == s))
}

fn record(id: u32, keywords: &[&str]) -> FundingRecord {
    FundingRecord {
        id,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

const PROPOSALS: &[&str] = &[
    "We are developing a solar energy project with battery storage for renewable energy solutions.",
    "Our project includes a feasibility study, community partnerships, and an evaluation plan.",
    "This is a completely unrelated proposal about cooking recipes and travel tips.",
    "Telehealth kiosks for rural health clinics in remote communities, with digital health records and an evaluation plan.",
];

/// 空の提案文
#[test]
fn test_empty_proposal() {
    let catalog = builtin();
    assert!(analyze_proposal("", catalog.records()).is_empty());
}

/// 空白のみの提案文
#[test]
fn test_whitespace_only_proposal() {
    let catalog = builtin();
    assert!(analyze_proposal("   ", catalog.records()).is_empty());
    assert!(analyze_proposal("\n\t  \r\n", catalog.records()).is_empty());
    assert!(analyze_parallel("   ", catalog.records()).is_empty());
}

/// 全レコードが1回ずつ返る・スコア範囲・降順
#[test]
fn test_result_invariants() {
    let catalog = builtin();

    for proposal in PROPOSALS {
        let results = analyze_proposal(proposal, catalog.records());
        assert_eq!(results.len(), catalog.len());

        let mut seen = ids(&results);
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);

        assert!(results.iter().all(|r| r.score <= 100));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));

        for r in &results {
            assert!(is_subsequence(&r.matched_keywords, &r.record.keywords));
            assert!(is_subsequence(&r.matched_focus_areas, &r.record.focus_areas));
            assert!(is_subsequence(&r.matched_requirements, &r.record.requirements));
        }
    }
}

/// キーワードと重点分野での一致
#[test]
fn test_clean_energy_proposal() {
    let catalog = builtin();
    let results = analyze_proposal(PROPOSALS[0], catalog.records());

    let top = &results[0];
    assert_eq!(top.record.id, 1);
    assert_eq!(top.matched_keywords, vec!["solar", "battery", "renewable"]);
    assert_eq!(top.matched_focus_areas, vec!["renewable energy"]);
    assert!(top.matched_requirements.is_empty());
    assert_eq!(top.score, 65);

    // 残りは全て0点でカタログ順
    assert_eq!(ids(&results[1..]), vec![2, 3, 4, 5, 6]);
    assert!(results[1..].iter().all(|r| r.score == 0));
}

/// 要件での一致と同点時のカタログ順
#[test]
fn test_requirement_proposal_ordering() {
    let catalog = builtin();
    let results = analyze_proposal(PROPOSALS[1], catalog.records());

    assert_eq!(ids(&results), vec![2, 1, 4, 6, 3, 5]);
    assert_eq!(scores(&results), vec![40, 30, 30, 30, 20, 20]);

    let indigenous = &results[0];
    assert_eq!(indigenous.matched_focus_areas, vec!["community health"]);
    assert_eq!(
        indigenous.matched_requirements,
        vec!["community partnerships", "evaluation plan"]
    );

    let circular = &results[4];
    assert_eq!(circular.record.id, 3);
    assert_eq!(circular.matched_requirements, vec!["feasibility study", "partnerships"]);
}

/// 一致なし
#[test]
fn test_unrelated_proposal() {
    let catalog = builtin();
    let results = analyze_proposal(PROPOSALS[2], catalog.records());

    assert_eq!(results.len(), catalog.len());
    assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6]);
    assert!(results.iter().all(|r| r.score == 0 && !r.has_matches()));
}

/// 100点での頭打ち
#[test]
fn test_score_capped_at_100() {
    let catalog = builtin();
    let proposal = format!(
        "{} solar wind battery renewable energy sustainability climate clean energy feasibility study community partnerships evaluation plan sustainability plan",
        "A".repeat(1000)
    );
    let results = analyze_proposal(&proposal, catalog.records());

    assert_eq!(ids(&results), vec![1, 6, 3, 2, 5, 4]);
    assert_eq!(scores(&results), vec![100, 85, 60, 50, 45, 40]);

    let top = &results[0];
    assert!(top.breakdown.is_clamped());
    assert_eq!(top.breakdown.detail_bonus, 10);
    assert_eq!(top.breakdown.raw_total, 7 * 15 + 3 * 20 + 4 * 10 + 10);
}

/// 医療系の提案
#[test]
fn test_telehealth_proposal() {
    let catalog = builtin();
    let results = analyze_proposal(PROPOSALS[3], catalog.records());

    assert_eq!(ids(&results), vec![4, 2, 1, 5, 6, 3]);
    assert_eq!(scores(&results), vec![75, 45, 10, 10, 10, 0]);
    assert_eq!(
        results[0].matched_keywords,
        vec!["telehealth", "rural health", "digital health"]
    );
}

/// 文字数ボーナス
#[test]
fn test_detail_bonus_by_length() {
    let catalog = vec![record(1, &["zzz-never"])];

    let at = |len: usize| analyze_proposal(&"x".repeat(len), &catalog)[0].score;
    assert_eq!(at(199), 0);
    assert_eq!(at(200), 5);
    assert_eq!(at(499), 5);
    assert_eq!(at(500), 10);
}

/// 6キーワード + 2重点分野 + ボーナスで100点
#[test]
fn test_clamp_scenario() {
    let catalog = vec![FundingRecord {
        id: 1,
        keywords: ["a1", "b2", "c3", "d4", "e5", "f6"].iter().map(|s| s.to_string()).collect(),
        focus_areas: vec!["g7".to_string(), "h8".to_string()],
        ..Default::default()
    }];
    let proposal = format!("a1 b2 c3 d4 e5 f6 g7 h8 {}", "-".repeat(300));

    let results = analyze_proposal(&proposal, &catalog);
    assert_eq!(results[0].breakdown.raw_total, 90 + 40 + 5);
    assert_eq!(results[0].score, 100);
}

/// 並列実行は逐次と同じ結果
#[test]
fn test_parallel_matches_sequential() {
    let catalog = builtin();

    for proposal in PROPOSALS {
        let sequential = analyze_proposal(proposal, catalog.records());
        let parallel = analyze_parallel(proposal, catalog.records());

        assert_eq!(ids(&sequential), ids(&parallel));
        assert_eq!(scores(&sequential), scores(&parallel));
        for (s, p) in sequential.iter().zip(&parallel) {
            assert_eq!(s.matched_keywords, p.matched_keywords);
            assert_eq!(s.breakdown, p.breakdown);
        }
    }
}

/// 大きなカタログでの同点安定性（並列）
#[test]
fn test_parallel_stable_on_large_catalog() {
    let catalog: Vec<FundingRecord> = (0..500)
        .map(|i| record(i, if i % 3 == 0 { &["solar"] } else { &["wind"] }))
        .collect();

    let results = analyze(" solar ", &catalog, true);
    assert_eq!(results.len(), 500);

    let expected: Vec<u32> = (0..500)
        .filter(|i| i % 3 == 0)
        .chain((0..500).filter(|i| i % 3 != 0))
        .collect();
    assert_eq!(ids(&results), expected);
}

/// 重複キーワードは重複して数える
#[test]
fn test_duplicate_keywords_counted_twice() {
    let catalog = vec![record(1, &["grid", "grid"])];
    let results = analyze(" grid ", &catalog, false);

    assert_eq!(results[0].matched_keywords, vec!["grid", "grid"]);
    assert_eq!(results[0].score, 30);
}
