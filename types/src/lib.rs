//! Fundamental types for the SafeFolks trust recorder.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: the platform-assigned integer identifiers and the two record
//! shapes that make up the persisted ledger.

pub mod group;
pub mod ids;
pub mod trust;

pub use group::GroupRecord;
pub use ids::{GroupId, UserId};
pub use trust::{TrustEdge, TrustKey};
