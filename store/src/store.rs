//! The trust store — sole owner of the persisted ledger.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;

use safefolks_types::{GroupId, GroupRecord, TrustEdge, TrustKey, UserId};

use crate::error::StoreError;
use crate::ledger::Ledger;

/// Persistent store of groups and trust edges.
///
/// Every mutation rewrites the whole backing file before returning. Load and
/// save failures are logged and recovered locally, never surfaced: after a
/// failed save the in-memory ledger runs ahead of the on-disk copy until a
/// later write succeeds.
pub struct TrustStore {
    path: PathBuf,
    ledger: Ledger,
    /// Natural keys of every recorded edge, kept in lockstep with
    /// `ledger.trusts` for O(1) duplicate detection.
    keys: HashSet<TrustKey>,
}

impl TrustStore {
    /// Open a store backed by `path`.
    ///
    /// Never fails: a missing file yields an empty ledger, and an unreadable
    /// or unparsable file is logged and likewise falls back to empty. The
    /// bytes on disk are left untouched until the next successful write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let ledger = match Self::load(&path) {
            Ok(Some(ledger)) => ledger,
            Ok(None) => Ledger::default(),
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "failed to load ledger, starting empty"
                );
                Ledger::default()
            }
        };
        let keys = ledger.trusts.iter().map(TrustEdge::key).collect();
        Self { path, ledger, keys }
    }

    fn load(path: &Path) -> Result<Option<Ledger>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Insert or replace the record for `group_id` and persist immediately.
    ///
    /// Last-write-wins: re-registration overwrites the name, the owner and
    /// `added_at`, with no history kept.
    pub fn upsert_group(
        &mut self,
        group_id: GroupId,
        name: &str,
        owner_id: UserId,
        owner_name: &str,
    ) {
        self.ledger.groups.insert(
            group_id,
            GroupRecord {
                name: name.to_string(),
                owner_id,
                owner_name: owner_name.to_string(),
                added_at: Utc::now(),
            },
        );
        self.persist();
        tracing::info!(%group_id, name, %owner_id, owner_name, "group registered");
    }

    /// Record that `truster` trusts `trustee` within `group_id`.
    ///
    /// Idempotent on the (group, truster, trustee) key: a repeat call is a
    /// no-op returning `false`, keeps the originally stored names and
    /// timestamp even when the supplied names differ, and writes nothing to
    /// disk. A new edge is appended (discovery order) and persisted.
    pub fn record_trust(
        &mut self,
        group_id: GroupId,
        truster_id: UserId,
        truster_name: &str,
        trustee_id: UserId,
        trustee_name: &str,
    ) -> bool {
        if !self.keys.insert((group_id, truster_id, trustee_id)) {
            tracing::debug!(%group_id, %truster_id, %trustee_id, "trust already recorded");
            return false;
        }
        self.ledger.trusts.push(TrustEdge {
            group_id,
            truster_id,
            truster_name: truster_name.to_string(),
            trustee_id,
            trustee_name: trustee_name.to_string(),
            created_at: Utc::now(),
        });
        self.persist();
        tracing::info!(%group_id, truster = truster_name, trustee = trustee_name, "trust recorded");
        true
    }

    /// All edges recorded for `group_id`, in discovery order.
    pub fn trusts_for_group(&self, group_id: GroupId) -> Vec<&TrustEdge> {
        self.ledger
            .trusts
            .iter()
            .filter(|t| t.group_id == group_id)
            .collect()
    }

    /// All edges where `user_id` is the truster, across groups, in
    /// discovery order.
    pub fn trusts_from_user(&self, user_id: UserId) -> Vec<&TrustEdge> {
        self.ledger
            .trusts
            .iter()
            .filter(|t| t.truster_id == user_id)
            .collect()
    }

    /// Look up a registered group.
    ///
    /// `None` means "never registered", which callers must treat as distinct
    /// from "registered with zero trusts".
    pub fn group(&self, group_id: GroupId) -> Option<&GroupRecord> {
        self.ledger.groups.get(&group_id)
    }

    /// Every recorded edge, in discovery order.
    pub fn trusts(&self) -> &[TrustEdge] {
        &self.ledger.trusts
    }

    /// Full-ledger write-through. Failures are logged, not raised.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to save ledger"
            );
        }
    }

    /// Serialize the ledger and atomically replace the backing file, so a
    /// crash mid-write cannot truncate it.
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.ledger)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
