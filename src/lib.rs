//! grant-match
//!
//! プロジェクト提案文を助成プログラムのカタログと照合し、スコア順の候補を返す。
//! 照合エンジン本体は grant_match_common にある。

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod report;
pub mod scanner;
pub mod share;

pub use grant_match_common as common;
