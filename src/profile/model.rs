//! Profile data types
//!
//! Field renames keep the persisted JSON readable by older versions of the page.

use serde::{Deserialize, Deserializer, Serialize};

/// The person the page is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryPerson {
    /// Avatar image URL
    pub picture: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    /// Region / state
    pub state: String,
}

impl PrimaryPerson {
    /// "Given Family"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Region, City"
    pub fn location(&self) -> String {
        format!("{}, {}", self.state, self.city)
    }
}

/// A friend listed in the companions menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub first_name: String,
    pub last_name: String,
}

impl Companion {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Favorite creature (a Pokemon)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    /// Sprite image URL, empty when the API had none (stored as `null` by older pages)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photo: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Primary person plus companions, as fetched together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct People {
    #[serde(rename = "firstUser")]
    pub primary: PrimaryPerson,
    #[serde(rename = "otherUsers", default)]
    pub companions: Vec<Companion>,
}

/// One persisted capture of a complete profile
///
/// Saves go through [`super::build_snapshot`], which rejects empty quote/about.
/// Entries read back from storage are taken as stored: an older page may have
/// persisted empty strings, and restoring such an entry yields a state that
/// cannot be saved again until it is refetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "users")]
    pub people: People,
    pub quote: String,
    #[serde(rename = "pokemon")]
    pub favorite_creature: Creature,
    pub about: String,
}

impl Snapshot {
    pub fn primary(&self) -> &PrimaryPerson {
        &self.people.primary
    }

    pub fn companions(&self) -> &[Companion] {
        &self.people.companions
    }
}

/// In-memory profile shown on the page
///
/// Fields stay `None` until loaded; `about` may remain `None` when its fetch degrades.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub primary: Option<PrimaryPerson>,
    pub companions: Vec<Companion>,
    pub quote: Option<String>,
    pub favorite_creature: Option<Creature>,
    pub about: Option<String>,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every field from a saved snapshot
    pub fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot {
            people,
            quote,
            favorite_creature,
            about,
        } = snapshot;
        *self = Self {
            primary: Some(people.primary),
            companions: people.companions,
            quote: Some(quote),
            favorite_creature: Some(favorite_creature),
            about: Some(about),
        };
    }
}

impl From<Snapshot> for ProfileState {
    fn from(snapshot: Snapshot) -> Self {
        let mut state = Self::new();
        state.restore(snapshot);
        state
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn person(first: &str, last: &str) -> PrimaryPerson {
        PrimaryPerson {
            picture: format!("https://randomuser.me/api/portraits/{}.jpg", first),
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: "Springfield".to_string(),
            state: "Oregon".to_string(),
        }
    }

    pub fn companion(first: &str, last: &str) -> Companion {
        Companion {
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    pub fn creature(name: &str) -> Creature {
        Creature {
            name: name.to_string(),
            photo: format!("https://img.example/{}.png", name),
        }
    }

    /// A fully loaded state
    pub fn complete_state(first: &str, last: &str) -> ProfileState {
        ProfileState {
            primary: Some(person(first, last)),
            companions: vec![companion("Ann", "Lee"), companion("Bo", "Park")],
            quote: Some(format!("{} says hi", first)),
            favorite_creature: Some(creature("pikachu")),
            about: Some("Bacon ipsum dolor amet".to_string()),
        }
    }

    pub fn snapshot(first: &str, last: &str) -> Snapshot {
        Snapshot {
            people: People {
                primary: person(first, last),
                companions: vec![companion("Ann", "Lee")],
            },
            quote: format!("{} quote", first),
            favorite_creature: creature("eevee"),
            about: format!("About {}", first),
        }
    }
}
