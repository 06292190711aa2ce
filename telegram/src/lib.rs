//! Minimal Telegram Bot API client.
//!
//! Covers exactly the surface the bot consumes: long-polling `getUpdates`,
//! `sendMessage`, `getChatAdministrators` and `getChatMemberCount`, with
//! serde models for the subset of the API types that appear in those calls.
//! Nothing here knows about trust semantics — that lives behind this crate.

pub mod client;
pub mod error;
pub mod types;

pub use client::{find_creator, TelegramClient};
pub use error::TelegramError;
pub use types::{ApiResponse, Chat, ChatMember, ChatMemberUpdated, Message, Update, User};
