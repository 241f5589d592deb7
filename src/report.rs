//! 解析結果の出力（テキスト/JSON）

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::share::SharedAnalysis;
use grant_match_common::{Catalog, MatchResult};
use std::fmt::Write as _;
use std::path::Path;

/// 上位 `top` 件に絞る（None なら全件）
pub fn take_top<'r, 'a>(results: &'r [MatchResult<'a>], top: Option<usize>) -> &'r [MatchResult<'a>] {
    match top {
        Some(n) if n < results.len() => &results[..n],
        _ => results,
    }
}

/// 解析結果を指定形式で整形
pub fn format_results(results: &[MatchResult<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_results(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// カタログを指定形式で整形
pub fn format_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_catalog(catalog)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog.records())?),
    }
}

pub fn render_results(results: &[MatchResult<'_>]) -> String {
    let mut out = String::new();

    if results.is_empty() {
        out.push_str("該当する助成プログラムはありません\n");
        return out;
    }

    let _ = writeln!(out, "{}件の候補", results.len());

    for (rank, result) in results.iter().enumerate() {
        let record = result.record;
        let breakdown = &result.breakdown;

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:>2}. {} [{:>3}%] {}",
            rank + 1,
            record.name,
            result.score,
            result.strength()
        );
        let _ = writeln!(
            out,
            "    {} | {} | 締切 {}",
            record.funder, record.amount, record.deadline
        );

        write_matches(&mut out, "キーワード", &result.matched_keywords, breakdown.keyword_points);
        write_matches(&mut out, "重点分野", &result.matched_focus_areas, breakdown.focus_points);
        write_matches(&mut out, "要件", &result.matched_requirements, breakdown.requirement_points);

        if breakdown.detail_bonus > 0 {
            let _ = writeln!(out, "    詳細ボーナス: +{}", breakdown.detail_bonus);
        }
        if breakdown.is_clamped() {
            let _ = writeln!(out, "    （合計 {} 点を100点に丸め）", breakdown.raw_total);
        }
    }

    out
}

fn write_matches(out: &mut String, label: &str, matched: &[&str], points: u32) {
    if matched.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        "    {}: {} ({}件 +{})",
        label,
        matched.join(", "),
        matched.len(),
        points
    );
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}件の助成プログラム", catalog.len());

    for record in catalog {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {}", record.id, record.name);
        let _ = writeln!(
            out,
            "    {} | {} | 締切 {}",
            record.funder, record.amount, record.deadline
        );
        let _ = writeln!(out, "    重点分野: {}", record.focus_areas.join(", "));
        let _ = writeln!(out, "    キーワード: {}", record.keywords.join(", "));
        let _ = writeln!(out, "    要件: {}", record.requirements.join(", "));
        if !record.website.is_empty() {
            let _ = writeln!(out, "    {}", record.website);
        }
    }

    out
}

pub fn render_shared(shared: &SharedAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "共有日時: {}", shared.timestamp);
    let _ = writeln!(out, "提案文:\n{}\n", shared.proposal_text);

    for (rank, result) in shared.results.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {} [{:>3}%]", rank + 1, result.name, result.score);
        if !result.matched_keywords.is_empty() {
            let _ = writeln!(out, "    キーワード: {}", result.matched_keywords.join(", "));
        }
        if !result.matched_focus_areas.is_empty() {
            let _ = writeln!(out, "    重点分野: {}", result.matched_focus_areas.join(", "));
        }
        if !result.matched_requirements.is_empty() {
            let _ = writeln!(out, "    要件: {}", result.matched_requirements.join(", "));
        }
    }

    out
}

/// 標準出力またはファイルへ書き出す
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("✔ 結果を保存: {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
