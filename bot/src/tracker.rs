//! Decision rules for when a trust edge gets recorded.
//!
//! The owner of a registered group trusts every other member the bot sees
//! active there: any non-owner message, and any non-owner join with status
//! "member" or "administrator". Unregistered groups are ignored, and the
//! owner's own activity never produces an edge — the store never sees a
//! self-edge from this layer.

use safefolks_types::{GroupId, GroupRecord, UserId};

/// Inputs for one `record_trust` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustObservation {
    pub group_id: GroupId,
    pub truster_id: UserId,
    pub truster_name: String,
    pub trustee_id: UserId,
    pub trustee_name: String,
}

/// Trust implied by a message from `sender` in a registered group.
pub fn observe_message(
    group_id: GroupId,
    group: &GroupRecord,
    sender_id: UserId,
    sender_name: &str,
) -> Option<TrustObservation> {
    if sender_id == group.owner_id {
        return None;
    }
    Some(TrustObservation {
        group_id,
        truster_id: group.owner_id,
        truster_name: group.owner_name.clone(),
        trustee_id: sender_id,
        trustee_name: sender_name.to_string(),
    })
}

/// Trust implied by a member-status change in a registered group.
///
/// Only joining statuses count; "left", "kicked" and "restricted" updates
/// record nothing.
pub fn observe_member(
    group_id: GroupId,
    group: &GroupRecord,
    member_id: UserId,
    member_name: &str,
    status: &str,
) -> Option<TrustObservation> {
    if !matches!(status, "member" | "administrator") {
        return None;
    }
    observe_message(group_id, group, member_id, member_name)
}
