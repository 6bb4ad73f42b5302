//! User actions: save, clear, load-by-index
//!
//! The controller owns the profile state and the snapshot store. Each action
//! reports whether the page needs re-rendering; mounting is left to the caller.

use crate::error::Result;
use crate::menu::{MenuEntry, load_menu};
use crate::persistence::SnapshotStore;
use crate::platform::KeyValueStore;
use crate::profile::{ProfileState, build_snapshot};
use crate::view::{ProfileView, render};

pub struct Controller<S> {
    state: ProfileState,
    store: SnapshotStore<S>,
}

impl<S: KeyValueStore> Controller<S> {
    pub fn new(state: ProfileState, store: SnapshotStore<S>) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn store(&self) -> &SnapshotStore<S> {
        &self.store
    }

    /// Replace the state wholesale (initial load)
    pub fn set_state(&mut self, state: ProfileState) {
        self.state = state;
    }

    pub fn view(&self) -> ProfileView {
        render(&self.state)
    }

    /// Save the current profile as a new snapshot
    ///
    /// `IncompleteState` when the profile is not fully loaded; nothing is written then.
    pub fn save(&self) -> Result<()> {
        let snapshot = build_snapshot(&self.state)?;
        self.store.append(snapshot)
    }

    /// Drop every saved snapshot
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    /// Restore the snapshot at `index`
    ///
    /// Returns `Ok(false)` and leaves the state untouched when the index is
    /// out of range (including a collection cleared meanwhile).
    pub fn load(&mut self, index: usize) -> Result<bool> {
        match self.store.get(index)? {
            Some(snapshot) => {
                log::info!("Loading snapshot #{} ({})", index + 1, snapshot.primary().full_name());
                self.state.restore(snapshot);
                Ok(true)
            }
            None => {
                log::debug!("No snapshot at index {}, ignoring", index);
                Ok(false)
            }
        }
    }

    /// Load menu rows for the current collection
    pub fn load_menu(&self) -> Result<Vec<MenuEntry>> {
        Ok(load_menu(&self.store.read_all()?))
    }
}
