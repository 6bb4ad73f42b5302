//! Profile data: types, snapshot building and fetching
//!
//! - `model`: profile state and the persisted snapshot shape
//! - `builder`: state → snapshot with the completeness check
//! - `api`: external API response shapes
//! - `aggregator`: concurrent fetch of the four datasets

pub mod aggregator;
pub mod api;
pub mod builder;
pub mod model;

pub use aggregator::{HttpSource, ProfileSource, aggregate};
pub use builder::build_snapshot;
pub use model::{Companion, Creature, People, PrimaryPerson, ProfileState, Snapshot};
