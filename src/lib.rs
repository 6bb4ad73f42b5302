//! Profile Snapshots - a random profile page with saved snapshots
//!
//! Core modules:
//! - `profile`: Profile types, snapshot building, concurrent API fetching
//! - `persistence`: Append-only snapshot collection in LocalStorage
//! - `menu`: Load menu and companions menu projections
//! - `view`: Pure state → view rendering
//! - `controller`: Save / clear / load actions
//! - `platform`: Browser/native storage and DOM mounting

pub mod controller;
pub mod error;
pub mod menu;
pub mod persistence;
pub mod platform;
pub mod profile;
pub mod settings;
pub mod view;

pub use controller::Controller;
pub use error::{Result, SnapshotError};
pub use persistence::SnapshotStore;
pub use profile::{ProfileState, Snapshot};
pub use settings::{LogLevel, Settings};

/// App constants
pub mod consts {
    /// Default LocalStorage key for the snapshot collection
    pub const SNAPSHOT_KEY: &str = "savedSnapshots";

    /// Page element ids
    pub const SAVE_BUTTON_ID: &str = "saveBtn";
    pub const CLEAR_BUTTON_ID: &str = "clear";
    pub const LOAD_PANEL_ID: &str = "loadMenuPanel";
    pub const COMPANIONS_PANEL_ID: &str = "friendsMenuPanel";

    /// Menu row classes
    pub const MENU_ITEM_CLASS: &str = "menu-item";
    pub const STATIC_ITEM_CLASS: &str = "is-static";
    /// Attribute carrying a load-menu row's snapshot index
    pub const INDEX_ATTR: &str = "data-index";
}
