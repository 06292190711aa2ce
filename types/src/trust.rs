//! The directed trust-edge record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, UserId};

/// Natural key of a trust edge: (group, truster, trustee).
pub type TrustKey = (GroupId, UserId, UserId);

/// A directed fact "truster trusts trustee", scoped to one group.
///
/// Immutable once recorded: a second observation with the same natural key
/// is dropped, keeping the original names and `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustEdge {
    pub group_id: GroupId,
    pub truster_id: UserId,
    pub truster_name: String,
    pub trustee_id: UserId,
    pub trustee_name: String,
    /// When the edge was first observed.
    pub created_at: DateTime<Utc>,
}

impl TrustEdge {
    /// The edge's natural key.
    pub fn key(&self) -> TrustKey {
        (self.group_id, self.truster_id, self.trustee_id)
    }
}
