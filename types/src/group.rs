//! The registered-group record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A chat group known to the bot, with its recognized owner.
///
/// At most one record exists per group id; re-registration overwrites every
/// field, including `added_at` (last-write-wins, no history kept). The group
/// id itself is the map key in the ledger, not a field here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Display name of the group.
    pub name: String,
    /// The user currently recognized as the group's owner.
    pub owner_id: UserId,
    /// Display name of the owner.
    pub owner_name: String,
    /// When the group was (most recently) registered.
    pub added_at: DateTime<Utc>,
}
