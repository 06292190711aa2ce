//! Update dispatch — the glue between Telegram updates and the store.

use std::time::Duration;

use safefolks_store::TrustStore;
use safefolks_telegram::{find_creator, Chat, ChatMemberUpdated, Message, TelegramClient, Update};
use safefolks_types::{GroupId, UserId};

use crate::commands::{self, Command};
use crate::error::BotError;
use crate::shutdown::ShutdownController;
use crate::tracker;

/// Backoff after a failed getUpdates call, so a dead network does not spin.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

/// The bot: owns the trust store and the Telegram client, and turns
/// incoming updates into store calls and replies.
pub struct Bot {
    store: TrustStore,
    client: TelegramClient,
    poll_timeout_secs: u64,
}

impl Bot {
    pub fn new(store: TrustStore, client: TelegramClient, poll_timeout_secs: u64) -> Self {
        Self {
            store,
            client,
            poll_timeout_secs,
        }
    }

    /// Read access to the store (status inspection, tests).
    pub fn store(&self) -> &TrustStore {
        &self.store
    }

    /// Drive the long-poll loop until shutdown is signalled.
    pub async fn run(&mut self, shutdown: &ShutdownController) -> Result<(), BotError> {
        let mut shutdown_rx = shutdown.subscribe();
        let mut offset: Option<i64> = None;
        tracing::info!("bot started, polling for updates");
        loop {
            let polled = tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::info!("shutdown signalled, stopping update loop");
                    return Ok(());
                }
                updates = self.client.get_updates(offset, self.poll_timeout_secs) => updates,
            };
            match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        self.handle_update(update).await;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "getUpdates failed, backing off");
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                }
            }
        }
    }

    /// Route a single update. Handler failures are logged, never fatal.
    pub async fn handle_update(&mut self, update: Update) {
        if let Some(message) = update.message {
            self.handle_message(message).await;
        } else if let Some(member) = update.chat_member {
            self.handle_chat_member(member).await;
        }
    }

    async fn handle_message(&mut self, message: Message) {
        let Some(user) = message.from.clone() else {
            return;
        };
        let Some(text) = message.text.clone() else {
            return;
        };

        if let Some(command) = Command::parse(&text) {
            if let Err(e) = self.handle_command(command, &message).await {
                tracing::warn!(chat_id = message.chat.id, error = %e, "command handler failed");
            }
            return;
        }

        // Plain text in a registered group: the owner trusts the sender.
        if !message.chat.is_group() {
            return;
        }
        let group_id = GroupId::new(message.chat.id);
        let Some(group) = self.store.group(group_id).cloned() else {
            return;
        };
        if let Some(obs) =
            tracker::observe_message(group_id, &group, UserId::new(user.id), &user.full_name())
        {
            self.store.record_trust(
                obs.group_id,
                obs.truster_id,
                &obs.truster_name,
                obs.trustee_id,
                &obs.trustee_name,
            );
        }
    }

    async fn handle_command(&mut self, command: Command, message: &Message) -> Result<(), BotError> {
        let chat = &message.chat;
        match command {
            Command::Start => {
                self.client.send_message(chat.id, commands::welcome_text()).await?;
            }
            Command::Help => {
                self.client.send_message(chat.id, commands::help_text()).await?;
            }
            Command::Status => {
                if !chat.is_group() {
                    self.client.send_message(chat.id, commands::group_only_text()).await?;
                    return Ok(());
                }
                let group_id = GroupId::new(chat.id);
                let reply = match self.store.group(group_id) {
                    None => commands::not_registered_text().to_string(),
                    Some(group) => {
                        let trusts = self.store.trusts_for_group(group_id);
                        let title = chat.title.as_deref().unwrap_or("this group");
                        commands::status_text(title, group, &trusts)
                    }
                };
                self.client.send_message(chat.id, &reply).await?;
            }
            Command::Scan => {
                if !chat.is_group() {
                    self.client.send_message(chat.id, commands::group_only_text()).await?;
                    return Ok(());
                }
                self.scan_group(chat).await?;
            }
        }
        Ok(())
    }

    /// Resolve the group owner from the administrator list and register the
    /// group. Trust edges are then recorded as members are seen active —
    /// the Bot API offers no way to enumerate the full member list.
    async fn scan_group(&mut self, chat: &Chat) -> Result<(), BotError> {
        let admins = match self.client.get_chat_administrators(chat.id).await {
            Ok(admins) => admins,
            Err(e) => {
                tracing::warn!(chat_id = chat.id, error = %e, "failed to fetch administrators");
                self.client
                    .send_message(chat.id, &commands::scan_failed_text(&e.to_string()))
                    .await?;
                return Ok(());
            }
        };
        let Some(owner) = find_creator(&admins).cloned() else {
            self.client.send_message(chat.id, commands::scan_no_owner_text()).await?;
            return Ok(());
        };

        // Informational only; a failure here does not block registration.
        let member_count = match self.client.get_chat_member_count(chat.id).await {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(chat_id = chat.id, error = %e, "member count unavailable");
                0
            }
        };

        let title = chat.title.as_deref().unwrap_or("unnamed group");
        self.store.upsert_group(
            GroupId::new(chat.id),
            title,
            UserId::new(owner.id),
            &owner.full_name(),
        );
        self.client
            .send_message(chat.id, &commands::scan_ok_text(&owner.full_name(), member_count))
            .await?;
        Ok(())
    }

    async fn handle_chat_member(&mut self, updated: ChatMemberUpdated) {
        if !updated.chat.is_group() {
            return;
        }
        let group_id = GroupId::new(updated.chat.id);
        let Some(group) = self.store.group(group_id).cloned() else {
            return;
        };
        let member = &updated.new_chat_member;
        if let Some(obs) = tracker::observe_member(
            group_id,
            &group,
            UserId::new(member.user.id),
            &member.user.full_name(),
            &member.status,
        ) {
            if self.store.record_trust(
                obs.group_id,
                obs.truster_id,
                &obs.truster_name,
                obs.trustee_id,
                &obs.trustee_name,
            ) {
                tracing::info!(member = %obs.trustee_name, %group_id, "member joined, trust recorded");
            }
        }
    }
}
