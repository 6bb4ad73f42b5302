//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory map elsewhere)
//! - DOM mounting of rendered views (web only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStorage};
