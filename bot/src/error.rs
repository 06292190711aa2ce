use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("telegram error: {0}")]
    Telegram(#[from] safefolks_telegram::TelegramError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
