//! Snapshot persistence
//!
//! Features:
//! - One JSON array per collection under a single storage key
//! - Append-only, whole-value writes
//! - Corrupt values are reported, never silently dropped

pub mod store;

pub use store::SnapshotStore;
