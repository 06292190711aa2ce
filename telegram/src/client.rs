//! HTTP client for the Telegram Bot API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::TelegramError;
use crate::types::{ApiResponse, ChatMember, Message, Update, User};

/// Request timeout. Must exceed the long-poll timeout passed to
/// `getUpdates`, or every idle poll turns into a client-side timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the Bot API at `https://api.telegram.org/bot{token}`.
pub struct TelegramClient {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    /// Method URL prefix including the token.
    base_url: String,
}

impl TelegramClient {
    /// Create a client for the production Bot API host.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, "https://api.telegram.org")
    }

    /// Point the client at a different API host (local test servers).
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            base_url: format!("{}/bot{}", base_url.trim_end_matches('/'), token),
        }
    }

    /// Long-poll for updates after `offset`.
    ///
    /// Subscribes to `message` and `chat_member` updates only — the two
    /// kinds the bot acts on.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let mut body = json!({
            "timeout": timeout_secs,
            "allowed_updates": ["message", "chat_member"],
        });
        if let Some(offset) = offset {
            body["offset"] = json!(offset);
        }
        self.call("getUpdates", body).await
    }

    /// Send a plain-text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, TelegramError> {
        self.call("sendMessage", json!({ "chat_id": chat_id, "text": text }))
            .await
    }

    /// Fetch the administrator list of a chat (includes the creator).
    pub async fn get_chat_administrators(
        &self,
        chat_id: i64,
    ) -> Result<Vec<ChatMember>, TelegramError> {
        self.call("getChatAdministrators", json!({ "chat_id": chat_id }))
            .await
    }

    /// Fetch the member count of a chat.
    pub async fn get_chat_member_count(&self, chat_id: i64) -> Result<u64, TelegramError> {
        self.call("getChatMemberCount", json!({ "chat_id": chat_id }))
            .await
    }

    /// Perform one Bot API method call and unwrap the response envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, TelegramError> {
        let url = format!("{}/{}", self.base_url, method);

        let response = self.http_client.post(&url).json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                TelegramError::Unreachable(format!("request timed out: {e}"))
            } else if e.is_connect() {
                TelegramError::Unreachable(format!("connection failed: {e}"))
            } else {
                TelegramError::RequestFailed(e.to_string())
            }
        })?;

        // Telegram reports method failures as a JSON envelope with
        // `ok: false` (often alongside a 4xx status), so parse the body
        // first and only fall back to the bare status for non-JSON replies.
        let status = response.status();
        let api: ApiResponse<T> = match response.json().await {
            Ok(api) => api,
            Err(_) if !status.is_success() => {
                return Err(TelegramError::RequestFailed(format!("HTTP status {status}")));
            }
            Err(e) => {
                return Err(TelegramError::InvalidResponse(format!(
                    "failed to parse {method} response: {e}"
                )));
            }
        };

        if !api.ok {
            return Err(TelegramError::Api {
                description: api
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }
        api.result.ok_or_else(|| {
            TelegramError::InvalidResponse(format!("{method} returned ok with no result"))
        })
    }
}

/// The chat's creator among its administrators, if present.
///
/// Telegram marks exactly one administrator per group with status
/// `"creator"` — that user is the owner whose trust the bot records.
pub fn find_creator(admins: &[ChatMember]) -> Option<&User> {
    admins.iter().find(|m| m.status == "creator").map(|m| &m.user)
}
