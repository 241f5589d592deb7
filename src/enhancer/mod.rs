//! 提案文の補強
//!
//! 添付ファイルの本文を連結し、LLMが使えれば要約を付け足す。
//! 失敗しても解析は止めず、補強前のテキストを返す。

mod llm;

pub use llm::{parse_chat_response, LlmClient};

use crate::scanner::{Attachment, AttachmentKind};
use tracing::{debug, info, warn};

/// 添付ファイルからテキストを抽出して連結
///
/// 読み込めないファイルは警告を出して飛ばす。
pub fn extract_text(attachments: &[Attachment]) -> String {
    let mut extracted = String::new();

    for attachment in attachments {
        match attachment.kind {
            AttachmentKind::Text | AttachmentKind::Pdf => match std::fs::read(&attachment.path) {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes);
                    extracted.push_str(&format!(
                        "\n\n[Content from {}]:\n{}",
                        attachment.file_name, text
                    ));
                }
                Err(e) => {
                    warn!(file = %attachment.path.display(), error = %e, "添付ファイルの読み込みに失敗");
                }
            },
            AttachmentKind::Image => {
                extracted.push_str(&format!(
                    "\n\n[Image file: {} - content would be extracted via OCR]",
                    attachment.file_name
                ));
            }
            AttachmentKind::Unsupported => {
                debug!(file = %attachment.file_name, "未対応の添付ファイルをスキップ");
            }
        }
    }

    extracted
}

/// 提案文を補強する
///
/// `client` が None ならファイル本文の連結のみ行う。
pub async fn enhance_proposal(
    proposal_text: &str,
    attachments: &[Attachment],
    client: Option<&LlmClient>,
) -> String {
    let mut full_text = proposal_text.to_string();
    if !attachments.is_empty() {
        full_text.push_str(&extract_text(attachments));
    }

    let Some(client) = client else {
        info!("LLM APIキー未設定のため、テキスト照合のみ行います");
        return full_text;
    };

    match client.summarize(&full_text).await {
        Ok(Some(summary)) => format!("{}\n\n[Enhanced Analysis]:\n{}", proposal_text, summary),
        Ok(None) => {
            warn!("LLMの応答が空のため、補強前のテキストを使います");
            full_text
        }
        Err(e) => {
            warn!(error = %e, url = %client.api_url(), "LLM呼び出しに失敗したため、補強前のテキストを使います");
            full_text
        }
    }
}
