use proptest::prelude::*;
use std::collections::BTreeMap;

use safefolks_types::{GroupId, UserId};

proptest! {
    /// GroupId roundtrip: new -> as_i64 -> new produces identical id.
    #[test]
    fn group_id_roundtrip(raw in any::<i64>()) {
        let id = GroupId::new(raw);
        prop_assert_eq!(id.as_i64(), raw);
    }

    /// GroupId ordering agrees with the raw integer ordering.
    #[test]
    fn group_id_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(GroupId::new(a) <= GroupId::new(b), a <= b);
        prop_assert_eq!(GroupId::new(a) == GroupId::new(b), a == b);
    }

    /// GroupId JSON roundtrip as a bare integer value.
    #[test]
    fn group_id_json_roundtrip(raw in any::<i64>()) {
        let id = GroupId::new(raw);
        let encoded = serde_json::to_string(&id).unwrap();
        let raw_str = raw.to_string();
        prop_assert_eq!(encoded.as_str(), raw_str.as_str());
        let decoded: GroupId = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// GroupId map-key roundtrip: negative ids keep their leading `-` in the
    /// stringified key and parse back to the same id.
    #[test]
    fn group_id_map_key_roundtrip(raw in any::<i64>()) {
        let mut map = BTreeMap::new();
        map.insert(GroupId::new(raw), 1u8);
        let encoded = serde_json::to_string(&map).unwrap();
        let needle = format!("\"{}\"", raw);
        prop_assert!(encoded.contains(&needle));
        let decoded: BTreeMap<GroupId, u8> = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded.get(&GroupId::new(raw)), Some(&1u8));
    }

    /// UserId JSON roundtrip as a bare integer value.
    #[test]
    fn user_id_json_roundtrip(raw in any::<i64>()) {
        let id = UserId::new(raw);
        let encoded = serde_json::to_string(&id).unwrap();
        let decoded: UserId = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }
}
