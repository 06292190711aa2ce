use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram API unreachable: {0}")]
    Unreachable(String),

    #[error("HTTP request to Telegram failed: {0}")]
    RequestFailed(String),

    #[error("Telegram API error: {description}")]
    Api { description: String },

    #[error("invalid response from Telegram: {0}")]
    InvalidResponse(String),
}
