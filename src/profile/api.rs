//! Response shapes of the external APIs and their mapping to profile types

use serde::Deserialize;

use super::model::{Companion, Creature, People, PrimaryPerson};
use crate::error::{Result, SnapshotError};

#[derive(Debug, Deserialize)]
pub struct PeopleResponse {
    pub results: Vec<PersonRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PersonRecord {
    pub name: NameRecord,
    pub location: LocationRecord,
    pub picture: PictureRecord,
}

#[derive(Debug, Deserialize)]
pub struct NameRecord {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationRecord {
    pub city: String,
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct PictureRecord {
    pub large: String,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatureResponse {
    pub name: String,
    pub sprites: SpritesRecord,
}

#[derive(Debug, Deserialize)]
pub struct SpritesRecord {
    /// Null for a handful of entries
    pub front_default: Option<String>,
}

impl PeopleResponse {
    /// First result is the primary person, the rest are companions in arrival order
    pub fn into_people(self) -> Result<People> {
        let mut results = self.results.into_iter();
        let first = results
            .next()
            .ok_or_else(|| SnapshotError::NetworkFailure("empty people response".to_string()))?;

        let primary = PrimaryPerson {
            picture: first.picture.large,
            first_name: first.name.first,
            last_name: first.name.last,
            city: first.location.city,
            state: first.location.state,
        };
        let companions = results
            .map(|p| Companion {
                first_name: p.name.first,
                last_name: p.name.last,
            })
            .collect();

        Ok(People {
            primary,
            companions,
        })
    }
}

impl From<CreatureResponse> for Creature {
    fn from(res: CreatureResponse) -> Self {
        Self {
            name: res.name,
            photo: res.sprites.front_default.unwrap_or_default(),
        }
    }
}

/// The filler API returns paragraphs; only the first is used
pub fn first_paragraph(paragraphs: Vec<String>) -> Result<String> {
    paragraphs
        .into_iter()
        .next()
        .ok_or_else(|| SnapshotError::DegradedFetch("empty about response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE_JSON: &str = r#"{
        "results": [
            {"name": {"title": "Ms", "first": "Jane", "last": "Doe"},
             "location": {"street": {"number": 1, "name": "Main"}, "city": "Perth",
                          "state": "Western Australia", "postcode": 6000},
             "picture": {"large": "https://randomuser.me/l.jpg", "thumbnail": "t.jpg"}},
            {"name": {"title": "Mr", "first": "Ann", "last": "Lee"},
             "location": {"city": "Oslo", "state": "Oslo"},
             "picture": {"large": "a.jpg"}},
            {"name": {"title": "Mr", "first": "Bo", "last": "Park"},
             "location": {"city": "Seoul", "state": "Seoul"},
             "picture": {"large": "b.jpg"}}
        ],
        "info": {"seed": "abc", "results": 3}
    }"#;

    #[test]
    fn test_people_response_mapping() {
        let res: PeopleResponse = serde_json::from_str(PEOPLE_JSON).unwrap();
        let people = res.into_people().unwrap();
        assert_eq!(people.primary.full_name(), "Jane Doe");
        assert_eq!(people.primary.location(), "Western Australia, Perth");
        assert_eq!(people.primary.picture, "https://randomuser.me/l.jpg");
        let names: Vec<_> = people.companions.iter().map(|c| c.full_name()).collect();
        assert_eq!(names, vec!["Ann Lee", "Bo Park"]);
    }

    #[test]
    fn test_empty_people_response_is_network_failure() {
        let res = PeopleResponse { results: vec![] };
        assert!(matches!(
            res.into_people(),
            Err(SnapshotError::NetworkFailure(_))
        ));
    }

    #[test]
    fn test_quote_response() {
        let res: QuoteResponse = serde_json::from_str(r#"{"quote": "I am a god"}"#).unwrap();
        assert_eq!(res.quote, "I am a god");
    }

    #[test]
    fn test_creature_response_mapping() {
        let json = r#"{"id": 25, "name": "pikachu",
                       "sprites": {"front_default": "https://sprites/25.png", "back_default": null}}"#;
        let creature: Creature = serde_json::from_str::<CreatureResponse>(json).unwrap().into();
        assert_eq!(creature.name, "pikachu");
        assert_eq!(creature.photo, "https://sprites/25.png");

        let json = r#"{"name": "missingno", "sprites": {"front_default": null}}"#;
        let creature: Creature = serde_json::from_str::<CreatureResponse>(json).unwrap().into();
        assert_eq!(creature.photo, "");
    }

    #[test]
    fn test_first_paragraph() {
        let paragraphs: Vec<String> =
            serde_json::from_str(r#"["Bacon ipsum.", "Second."]"#).unwrap();
        assert_eq!(first_paragraph(paragraphs).unwrap(), "Bacon ipsum.");
        assert!(matches!(
            first_paragraph(vec![]),
            Err(SnapshotError::DegradedFetch(_))
        ));
    }
}
