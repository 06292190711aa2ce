//! Command parsing and reply rendering.

use std::fmt::Write as _;

use safefolks_types::{GroupRecord, TrustEdge};

/// A bot command addressed to us.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Status,
    Scan,
}

impl Command {
    /// Parse the leading command out of a message text.
    ///
    /// Accepts an optional `@botname` suffix (`/status@safefolks_bot`);
    /// anything after the first whitespace is ignored. Returns `None` for
    /// plain text and unknown commands.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let cmd = first.strip_prefix('/')?;
        let cmd = cmd.split('@').next().unwrap_or(cmd);
        match cmd {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "status" => Some(Self::Status),
            "scan" => Some(Self::Scan),
            _ => None,
        }
    }
}

// ── Reply texts ────────────────────────────────────────────────────────

pub fn welcome_text() -> &'static str {
    "Welcome to SafeFolks Bot!\n\n\
     Add me to a group to start recording trust relationships.\n\
     I will record that the group owner trusts all other members.\n\n\
     Commands:\n\
     /start - Show this message\n\
     /status - Show trust information for this group\n\
     /scan - Register this group and detect its owner\n\
     /help - Show help information"
}

pub fn help_text() -> &'static str {
    "SafeFolks Bot Help\n\n\
     This bot records trust relationships in Telegram groups.\n\n\
     How it works:\n\
     1. Add the bot to your group\n\
     2. Run /scan so the bot detects the group owner\n\
     3. The bot records that the owner trusts members as it sees them\n\
     4. Trust relationships are stored and can be queried with /status\n\n\
     Note: only the group owner's trust is recorded, never the reverse."
}

pub fn group_only_text() -> &'static str {
    "This command only works in groups.\nAdd me to a group first."
}

pub fn not_registered_text() -> &'static str {
    "This group is not registered yet.\nPlease use /scan to register it."
}

pub fn scan_no_owner_text() -> &'static str {
    "Could not detect the group owner. Please try again."
}

pub fn scan_failed_text(err: &str) -> String {
    format!("Error scanning group: {err}\nMake sure the bot has admin privileges.")
}

pub fn scan_ok_text(owner_name: &str, member_count: u64) -> String {
    format!(
        "Group registered!\n\n\
         Owner: {owner_name}\n\
         Members: ~{member_count}\n\n\
         Recording trust relationships as members are seen.\n\
         (Owner trusts all members)"
    )
}

/// The /status report: owner, edge count and the trust list.
pub fn status_text(title: &str, group: &GroupRecord, trusts: &[&TrustEdge]) -> String {
    let mut out = format!(
        "Trust status for {title}\n\n\
         Owner: {}\n\
         Total trust relationships: {}\n\n",
        group.owner_name,
        trusts.len()
    );
    if trusts.is_empty() {
        out.push_str("No trust relationships recorded yet.\nUse /scan to register members.");
    } else {
        out.push_str("Trust list:\n");
        for trust in trusts {
            let _ = writeln!(out, "- {} -> {}", trust.truster_name, trust.trustee_name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use safefolks_types::{GroupId, UserId};

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/status"), Some(Command::Status));
        assert_eq!(Command::parse("/scan"), Some(Command::Scan));
    }

    #[test]
    fn parses_bot_suffix_and_trailing_args() {
        assert_eq!(Command::parse("/status@safefolks_bot"), Some(Command::Status));
        assert_eq!(Command::parse("/scan now please"), Some(Command::Scan));
        assert_eq!(Command::parse("  /help  "), Some(Command::Help));
    }

    #[test]
    fn rejects_plain_text_and_unknown_commands() {
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse("/frobnicate"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("status"), None);
    }

    fn edge(truster: &str, trustee: &str) -> TrustEdge {
        TrustEdge {
            group_id: GroupId::new(-1),
            truster_id: UserId::new(1),
            truster_name: truster.to_string(),
            trustee_id: UserId::new(2),
            trustee_name: trustee.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn status_text_lists_edges() {
        let group = GroupRecord {
            name: "G".to_string(),
            owner_id: UserId::new(1),
            owner_name: "Alice".to_string(),
            added_at: Utc::now(),
        };
        let e1 = edge("Alice", "Bob");
        let e2 = edge("Alice", "Carol");
        let text = status_text("My Group", &group, &[&e1, &e2]);
        assert!(text.contains("My Group"));
        assert!(text.contains("Owner: Alice"));
        assert!(text.contains("Total trust relationships: 2"));
        assert!(text.contains("Alice -> Bob"));
        assert!(text.contains("Alice -> Carol"));
    }

    #[test]
    fn status_text_without_edges_suggests_scan() {
        let group = GroupRecord {
            name: "G".to_string(),
            owner_id: UserId::new(1),
            owner_name: "Alice".to_string(),
            added_at: Utc::now(),
        };
        let text = status_text("My Group", &group, &[]);
        assert!(text.contains("No trust relationships recorded yet."));
    }
}
