//! Drop-down menu projections
//!
//! The load menu lists saved snapshots; the companions menu lists the
//! primary person's friends. Both are plain data, mounted by the platform layer.

use crate::profile::{Companion, Snapshot};

/// Label shown when nothing has been saved
pub const EMPTY_LOAD_MENU_LABEL: &str = "No saved users yet";

/// One row of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Clickable row that loads the snapshot at `index`
    Selectable { label: String, index: usize },
    /// Informational row, never selectable
    Static { label: String },
}

impl MenuEntry {
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Selectable { label, .. } | MenuEntry::Static { label } => label,
        }
    }

    /// Snapshot index for selectable rows
    pub fn index(&self) -> Option<usize> {
        match self {
            MenuEntry::Selectable { index, .. } => Some(*index),
            MenuEntry::Static { .. } => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.index().is_some()
    }
}

/// Label for a saved snapshot: full name, or `Save #n` when the name is blank
pub fn snapshot_label(snapshot: &Snapshot, index: usize) -> String {
    let name = snapshot.primary().full_name();
    let name = name.trim();
    if name.is_empty() {
        format!("Save #{}", index + 1)
    } else {
        name.to_string()
    }
}

/// Project the collection into load-menu rows, in collection order
///
/// An empty collection yields a single static placeholder.
pub fn load_menu(snapshots: &[Snapshot]) -> Vec<MenuEntry> {
    if snapshots.is_empty() {
        return vec![MenuEntry::Static {
            label: EMPTY_LOAD_MENU_LABEL.to_string(),
        }];
    }

    snapshots
        .iter()
        .enumerate()
        .map(|(index, snap)| MenuEntry::Selectable {
            label: snapshot_label(snap, index),
            index,
        })
        .collect()
}

/// Companions as static rows
pub fn companions_menu(companions: &[Companion]) -> Vec<MenuEntry> {
    companions
        .iter()
        .map(|c| MenuEntry::Static {
            label: c.full_name(),
        })
        .collect()
}
