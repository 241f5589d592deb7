use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grant-match")]
#[command(about = "プロジェクト提案文と助成プログラムの照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 提案文を解析して候補を一覧表示
    Analyze {
        /// 提案文（省略時は --input または標準入力）
        text: Option<String>,

        /// 提案文ファイル
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// 添付ファイル（txt/md/pdf/画像、複数指定可）
        #[arg(short, long)]
        attach: Vec<PathBuf>,

        /// 添付ファイルのフォルダ（直下のみ）
        #[arg(long)]
        attach_dir: Option<PathBuf>,

        /// カタログJSONファイル（省略時は組み込みカタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 上位N件のみ表示
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レコードごとの採点を並列実行
        #[arg(long)]
        parallel: bool,

        /// 添付がなくてもLLMで補強する
        #[arg(long)]
        enhance: bool,

        /// 共有リンクを出力
        #[arg(long)]
        share: bool,

        /// 共有リンクのベースURL
        #[arg(long, default_value = "https://grant-match.local/")]
        share_base: String,
    },

    /// カタログを表示
    Catalog {
        /// カタログJSONファイル（省略時は組み込みカタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 共有リンクから解析結果を復元
    Share {
        /// 共有トークンまたはURL
        #[arg(required = true)]
        token: String,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// APIエンドポイントを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
