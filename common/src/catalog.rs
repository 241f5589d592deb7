//! 助成金カタログ
//!
//! 組み込みカタログ（カナダの助成プログラム6件）とJSONファイルからの読み込み。

use crate::error::{Error, Result};
use crate::types::FundingRecord;
use std::collections::HashSet;

const BUILTIN_CATALOG_JSON: &str = include_str!("../data/funding_catalog.json");

/// 読み込み済みのカタログ（順序を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<FundingRecord>,
}

impl Catalog {
    /// 重複IDを検査してカタログを作る
    pub fn new(records: Vec<FundingRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// 組み込みカタログ
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FundingRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn get(&self, id: u32) -> Option<&FundingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FundingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FundingRecord;
    type IntoIter = std::slice::Iter<'a, FundingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
