//! The persisted ledger document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use safefolks_types::{GroupId, GroupRecord, TrustEdge};

/// The full persisted state: all groups and all trust edges.
///
/// The JSON shape is a compatibility contract: `groups` is an object keyed
/// by the stringified decimal group id (leading `-` for negative ids), while
/// `trusts` entries carry `group_id` as a native integer. The asymmetry must
/// be preserved when reading or writing the same file. `trusts` keeps
/// insertion order = discovery order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub groups: BTreeMap<GroupId, GroupRecord>,
    #[serde(default)]
    pub trusts: Vec<TrustEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use safefolks_types::UserId;

    fn sample() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.groups.insert(
            GroupId::new(-123456),
            GroupRecord {
                name: "Test Group".to_string(),
                owner_id: UserId::new(111111),
                owner_name: "Test Owner".to_string(),
                added_at: "2026-08-29T12:00:00Z".parse().unwrap(),
            },
        );
        ledger.trusts.push(TrustEdge {
            group_id: GroupId::new(-123456),
            truster_id: UserId::new(111111),
            truster_name: "Test Owner".to_string(),
            trustee_id: UserId::new(222222),
            trustee_name: "Member".to_string(),
            created_at: "2026-08-29T12:01:00Z".parse().unwrap(),
        });
        ledger
    }

    #[test]
    fn group_keys_are_stringified_and_trust_ids_are_native() {
        let json = serde_json::to_value(sample()).unwrap();
        // Map key: stringified decimal, leading `-` preserved.
        assert!(json["groups"].get("-123456").is_some());
        // Trust entry: native integer group id.
        assert_eq!(json["trusts"][0]["group_id"], -123456);
        assert_eq!(json["trusts"][0]["truster_id"], 111111);
    }

    #[test]
    fn timestamps_are_iso8601_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["groups"]["-123456"]["added_at"], "2026-08-29T12:00:00Z");
        assert_eq!(json["trusts"][0]["created_at"], "2026-08-29T12:01:00Z");
    }

    #[test]
    fn json_roundtrip_preserves_everything() {
        let ledger = sample();
        let json = serde_json::to_string_pretty(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let ledger: Ledger = serde_json::from_str("{}").unwrap();
        assert!(ledger.groups.is_empty());
        assert!(ledger.trusts.is_empty());
    }
}
