//! 添付ファイルのスキャン
//!
//! 拡張子で種別を判定し、件数・合計サイズの上限を検査する。

use crate::config::Config;
use crate::error::{GrantMatchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];
const PDF_EXTENSIONS: &[&str] = &["pdf"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// 添付ファイルの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Text,
    Pdf,
    Image,
    Unsupported,
}

impl AttachmentKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = match path.extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => return AttachmentKind::Unsupported,
        };

        if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentKind::Text
        } else if PDF_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentKind::Pdf
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentKind::Image
        } else {
            AttachmentKind::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, AttachmentKind::Unsupported)
    }
}

#[derive(Debug, Clone)]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    pub kind: AttachmentKind,
}

impl Attachment {
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GrantMatchError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let size = std::fs::metadata(path)?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size,
            kind: AttachmentKind::from_path(path),
        })
    }
}

/// 添付の上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentLimits {
    pub max_count: usize,
    pub max_total_bytes: u64,
}

impl Default for AttachmentLimits {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AttachmentLimits {
    fn from(config: &Config) -> Self {
        Self {
            max_count: config.max_attachments,
            max_total_bytes: config.max_attachment_bytes,
        }
    }
}

/// 指定されたファイルを読み込む（順序は引数どおり）
pub fn scan_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>> {
    paths.iter().map(|p| Attachment::from_path(p)).collect()
}

/// フォルダ直下の対応ファイルを列挙
pub fn scan_folder(folder: &Path) -> Result<Vec<Attachment>> {
    if !folder.is_dir() {
        return Err(GrantMatchError::FolderNotFound(folder.display().to_string()));
    }

    let mut attachments = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !AttachmentKind::from_path(path).is_supported() {
            continue;
        }
        attachments.push(Attachment::from_path(path)?);
    }

    // ファイル名でソート
    attachments.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(attachments)
}

/// 件数と合計サイズを検査
pub fn check_limits(attachments: &[Attachment], limits: &AttachmentLimits) -> Result<()> {
    if attachments.len() > limits.max_count {
        return Err(GrantMatchError::TooManyAttachments {
            count: attachments.len(),
            max: limits.max_count,
        });
    }

    let total: u64 = attachments.iter().map(|a| a.size).sum();
    if total > limits.max_total_bytes {
        return Err(GrantMatchError::AttachmentsTooLarge {
            total,
            max: limits.max_total_bytes,
        });
    }

    Ok(())
}
