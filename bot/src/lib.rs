//! SafeFolks adapter layer.
//!
//! Everything between the Telegram transport and the trust store lives here:
//! configuration, logging setup, graceful shutdown, command parsing and
//! reply rendering, the decision rules for when a trust edge is recorded,
//! and the update dispatch loop tying them together.

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod shutdown;
pub mod tracker;

pub use config::BotConfig;
pub use dispatcher::Bot;
pub use error::BotError;
pub use logging::{init_logging, LogFormat};
pub use shutdown::ShutdownController;
