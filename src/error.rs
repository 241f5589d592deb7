use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrantMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("添付ファイルが多すぎます: {count}件（上限 {max}件）")]
    TooManyAttachments { count: usize, max: usize },

    #[error("添付ファイルの合計サイズが上限を超えています: {total} bytes（上限 {max} bytes）")]
    AttachmentsTooLarge { total: u64, max: u64 },

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("カタログが不正: {0}")]
    InvalidCatalog(String),

    #[error("提案文が空です。プロジェクトの説明を入力してください")]
    EmptyProposal,

    #[error("共有データの復元に失敗: {0}")]
    ShareDecode(String),
}

impl From<grant_match_common::Error> for GrantMatchError {
    fn from(err: grant_match_common::Error) -> Self {
        match err {
            grant_match_common::Error::Io(e) => GrantMatchError::Io(e),
            other => GrantMatchError::InvalidCatalog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GrantMatchError>;
