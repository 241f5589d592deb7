//! 解析の実行
//!
//! 照合ロジックは grant_match_common にある。ここでは逐次/並列の切り替えのみ行う。

use grant_match_common::{is_blank, score_record, sort_by_score, text_length, NormalizedText};
use rayon::prelude::*;
use tracing::debug;

pub use grant_match_common::{analyze_proposal, analyze_record, FundingRecord, MatchResult};

/// レコードごとの採点を rayon で並列化した解析
///
/// 結果は `analyze_proposal` と同じ（同点はカタログ順）。
pub fn analyze_parallel<'a>(
    proposal_text: &str,
    catalog: &'a [FundingRecord],
) -> Vec<MatchResult<'a>> {
    if is_blank(proposal_text) {
        return Vec::new();
    }

    let text = NormalizedText::new(proposal_text);
    let text_len = text_length(proposal_text);

    // collect はカタログ順を保つ
    let mut results: Vec<MatchResult<'a>> = catalog
        .par_iter()
        .map(|record| score_record(&text, text_len, record))
        .collect();

    sort_by_score(&mut results);
    results
}

/// 解析を実行
pub fn analyze<'a>(
    proposal_text: &str,
    catalog: &'a [FundingRecord],
    parallel: bool,
) -> Vec<MatchResult<'a>> {
    debug!(records = catalog.len(), chars = proposal_text.len(), parallel, "解析開始");

    let results = if parallel {
        analyze_parallel(proposal_text, catalog)
    } else {
        analyze_proposal(proposal_text, catalog)
    };

    debug!(
        results = results.len(),
        top_score = results.first().map(|r| r.score).unwrap_or(0),
        "解析完了"
    );
    results
}
