//! CLI command dispatch. The binary only parses arguments, sets up logging
//! and maps errors to exit codes.

use crate::config::toml_config::ServerConfig;
use crate::config::{CliConfig, Command};
use crate::core::history::HistoryLog;
use crate::core::service::ConversionService;
use crate::core::Storage;
use crate::domain::model::{ArabicValue, Direction, RomanNumeral};
use crate::utils::error::Result;
use std::io::Write;

pub async fn run<S, W>(config: CliConfig, storage: S, out: &mut W) -> Result<()>
where
    S: Storage,
    W: Write,
{
    let history = HistoryLog::new(storage, config.history_file.clone(), config.history_limit);
    let record = !config.no_history;

    match config.command {
        Command::R2a { roman } => {
            let result = ConversionService::roman_to_arabic(Some(&roman))?;
            writeln!(out, "{}", result.arabic)?;
            if record {
                remember(&history, result.arabic, result.roman, Direction::RomanToArabic).await;
            }
        }
        Command::A2r { arabic } => {
            let result = ConversionService::arabic_to_roman(Some(&arabic))?;
            writeln!(out, "{}", result.roman)?;
            if record {
                remember(&history, result.arabic, result.roman, Direction::ArabicToRoman).await;
            }
        }
        Command::Serve { config, host, port } => {
            let server_config =
                server_config(config.as_deref(), host, port, |name| std::env::var(name).ok())?;
            crate::http::serve(server_config).await?;
        }
        Command::History { clear } => {
            if clear {
                history.clear().await?;
                writeln!(out, "🧹 History cleared")?;
                return Ok(());
            }

            let entries = history.load().await?;
            if entries.is_empty() {
                writeln!(out, "No conversions yet")?;
            }
            for entry in entries.entries() {
                writeln!(
                    out,
                    "{:>4} → {:<12} {}",
                    entry.arabic,
                    entry.roman,
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S")
                )?;
            }
        }
    }

    Ok(())
}

/// 埠號優先順序: `--port` > `PORT` > 設定檔 > 3000
pub fn server_config<F>(
    path: Option<&str>,
    host: Option<String>,
    port: Option<u16>,
    lookup: F,
) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut server_config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::default(),
    }
    .with_overrides_from(lookup)?;

    if let Some(host) = host {
        server_config.server.host = host;
    }
    if let Some(port) = port {
        server_config.server.port = port;
    }

    Ok(server_config)
}

/// 紀錄失敗不影響轉換結果
async fn remember<S: Storage>(
    history: &HistoryLog<S>,
    arabic: ArabicValue,
    roman: RomanNumeral,
    direction: Direction,
) {
    if let Err(e) = history.append(arabic, roman, direction).await {
        tracing::warn!("⚠️ Could not update history at {}: {}", history.path(), e);
    }
}
