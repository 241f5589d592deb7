use clap::Parser;
use grant_match::{analyzer, cli, config, enhancer, error, report, scanner, share};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{GrantMatchError, Result};
use grant_match::common::{Catalog, DetailLevel};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            text,
            input,
            attach,
            attach_dir,
            catalog,
            top,
            format,
            output,
            parallel,
            enhance,
            share: create_share_link,
            share_base,
        } => {
            // 1. 提案文
            let proposal = read_proposal(text, input.as_deref())?;
            if grant_match::common::is_blank(&proposal) {
                return Err(GrantMatchError::EmptyProposal);
            }

            let level = DetailLevel::of(grant_match::common::text_length(&proposal));
            eprintln!("提案文: {}文字（{}）", proposal.chars().count(), level.hint());

            // 2. 添付ファイル
            let mut attachments = scanner::scan_attachments(&attach)?;
            if let Some(dir) = attach_dir {
                attachments.extend(scanner::scan_folder(&dir)?);
            }
            scanner::check_limits(&attachments, &scanner::AttachmentLimits::from(&config))?;

            // 3. 補強（添付があるか --enhance 指定時）
            let analyzed_text = if !attachments.is_empty() || enhance {
                eprintln!("- 提案文を補強中... (添付 {}件)", attachments.len());
                let client = enhancer::LlmClient::from_config(&config)?;
                enhancer::enhance_proposal(&proposal, &attachments, client.as_ref()).await
            } else {
                proposal.clone()
            };

            // 4. 照合
            let catalog = load_catalog(catalog.as_deref())?;
            let results = analyzer::analyze(&analyzed_text, catalog.records(), parallel);
            info!(candidates = results.len(), "照合完了");

            let shown = report::take_top(&results, top);
            let content = report::format_results(shown, format)?;
            report::write_output(&content, output.as_deref())?;

            if create_share_link {
                let shared = share::SharedAnalysis::new(&proposal, &results);
                let token = share::encode(&shared)?;
                eprintln!("\n共有リンク:");
                println!("{}", share::share_url(&share_base, &token));
            }
        }

        Commands::Catalog { catalog, format } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let content = report::format_catalog(&catalog, format)?;
            report::write_output(&content, None)?;
        }

        Commands::Share { token, format } => {
            let shared = share::decode(&token)?;
            let content = match format {
                OutputFormat::Text => report::render_shared(&shared),
                OutputFormat::Json => serde_json::to_string_pretty(&shared)?,
            };
            report::write_output(&content, None)?;
        }

        Commands::Config { set_api_key, set_api_url, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ APIエンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  エンドポイント: {}", config.api_url());
                println!("  モデル: {}", config.model);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  添付上限: {}件 / {} bytes", config.max_attachments, config.max_attachment_bytes);
                println!("  APIキー: {}", if config.api_key().is_some() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

/// RUST_LOG を優先し、未指定なら info（--verbose で debug）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// 引数 → ファイル → 標準入力の順で提案文を取得
fn read_proposal(text: Option<String>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = input {
        if !path.exists() {
            return Err(GrantMatchError::FileNotFound(path.display().to_string()));
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            if !path.exists() {
                return Err(GrantMatchError::FileNotFound(path.display().to_string()));
            }
            debug!(path = %path.display(), "カタログ読み込み");
            Catalog::from_file(path)?
        }
        None => Catalog::builtin()?,
    };

    if catalog.is_empty() {
        warn!("カタログにレコードがありません");
    }

    Ok(catalog)
}
