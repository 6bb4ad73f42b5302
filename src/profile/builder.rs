//! Capture the current profile into a snapshot

use super::model::{People, ProfileState, Snapshot};
use crate::error::{Result, SnapshotError};

/// Build a snapshot from the current state
///
/// Fails with `IncompleteState` unless primary person, creature, quote and about
/// are all present. Empty quote/about strings count as missing. Companions may be empty.
pub fn build_snapshot(state: &ProfileState) -> Result<Snapshot> {
    let quote = state.quote.as_deref().filter(|q| !q.is_empty());
    let about = state.about.as_deref().filter(|a| !a.is_empty());

    match (&state.primary, &state.favorite_creature, quote, about) {
        (Some(primary), Some(creature), Some(quote), Some(about)) => Ok(Snapshot {
            people: People {
                primary: primary.clone(),
                companions: state.companions.clone(),
            },
            quote: quote.to_string(),
            favorite_creature: creature.clone(),
            about: about.to_string(),
        }),
        _ => {
            let mut missing = Vec::new();
            if state.primary.is_none() {
                missing.push("primary person");
            }
            if state.favorite_creature.is_none() {
                missing.push("favorite creature");
            }
            if quote.is_none() {
                missing.push("quote");
            }
            if about.is_none() {
                missing.push("about");
            }
            Err(SnapshotError::IncompleteState { missing })
        }
    }
}
