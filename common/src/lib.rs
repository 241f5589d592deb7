//! Grant Match Common Library
//!
//! 提案文と助成金カタログの照合エンジン。入出力を持たない純粋な関数群。

pub mod types;
pub mod text;
pub mod matcher;
pub mod score;
pub mod analyzer;
pub mod catalog;
pub mod error;

pub use types::{FundingRecord, MatchResult, MatchStrength};
pub use text::{normalize, contains, is_space, split_words, NormalizedText};
pub use matcher::{match_keywords, match_focus_areas, match_requirements};
pub use score::{ScoreBreakdown, DetailLevel, detail_bonus, text_length};
pub use analyzer::{analyze_proposal, analyze_record, score_record, sort_by_score, is_blank};
pub use catalog::Catalog;
pub use error::{Error, Result};
