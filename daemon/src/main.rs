//! SafeFolks daemon — entry point for running the trust-recording bot.

use clap::Parser;
use std::path::PathBuf;

use safefolks_bot::{init_logging, Bot, BotConfig, LogFormat, ShutdownController};
use safefolks_store::TrustStore;
use safefolks_telegram::TelegramClient;

#[derive(Parser)]
#[command(name = "safefolks-daemon", about = "SafeFolks trust-recording bot daemon")]
struct Cli {
    /// Telegram bot token. Required unless present in the config file.
    #[arg(long, env = "SAFEFOLKS_BOT_TOKEN")]
    token: Option<String>,

    /// Path of the JSON ledger file.
    #[arg(long, env = "SAFEFOLKS_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Long-poll timeout for getUpdates, in seconds.
    #[arg(long, env = "SAFEFOLKS_POLL_TIMEOUT")]
    poll_timeout: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SAFEFOLKS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "SAFEFOLKS_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging is not up yet, so remember any config-file complaint and log
    // it once the subscriber is installed.
    let mut config_warning: Option<String> = None;
    let file_config: Option<BotConfig> = match cli.config {
        Some(ref path) => match BotConfig::from_toml_file(path) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                config_warning = Some(format!(
                    "failed to load config file {}: {e}, using defaults",
                    path.display()
                ));
                None
            }
        },
        None => None,
    };

    let base = file_config.unwrap_or_default();
    let config = BotConfig {
        bot_token: cli.token.or(base.bot_token),
        data_file: cli.data_file.unwrap_or(base.data_file),
        poll_timeout_secs: cli.poll_timeout.unwrap_or(base.poll_timeout_secs),
        log_format: cli.log_format.unwrap_or(base.log_format),
        log_level: cli.log_level.unwrap_or(base.log_level),
    };

    init_logging(LogFormat::from_config(&config.log_format), &config.log_level);
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let token = config.bot_token.clone().ok_or_else(|| {
        anyhow::anyhow!("no bot token: set SAFEFOLKS_BOT_TOKEN or bot_token in the config file")
    })?;

    tracing::info!(
        data_file = %config.data_file.display(),
        poll_timeout_secs = config.poll_timeout_secs,
        "starting SafeFolks bot"
    );

    let store = TrustStore::open(&config.data_file);
    let client = TelegramClient::new(&token);
    let mut bot = Bot::new(store, client, config.poll_timeout_secs);

    let shutdown = ShutdownController::new();
    tokio::select! {
        result = bot.run(&shutdown) => { result?; }
        _ = shutdown.wait_for_signal() => {}
    }

    tracing::info!("SafeFolks daemon exited cleanly");
    Ok(())
}
