//! Persistent trust ledger for SafeFolks.
//!
//! The [`TrustStore`] is the sole owner of the persisted state: all groups
//! the bot has registered and every trust edge it has observed. The full
//! ledger lives in memory; every mutation rewrites the backing JSON file
//! (write-through, no batching). Single-process, single-writer by design —
//! concurrent processes sharing the backing file are not supported.

pub mod error;
pub mod ledger;
pub mod store;

pub use error::StoreError;
pub use ledger::Ledger;
pub use store::TrustStore;
