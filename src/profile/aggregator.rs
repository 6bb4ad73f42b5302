//! Profile aggregation
//!
//! Four independent fetches run concurrently. The people, quote and creature
//! fetches are required: the first failure aborts the whole load. The about
//! fetch is insulated and degrades to `None`.

use futures_util::future::try_join4;
use rand::Rng;
use serde::de::DeserializeOwned;

use super::api::{CreatureResponse, PeopleResponse, QuoteResponse, first_paragraph};
use super::model::{Creature, People, ProfileState};
use crate::error::{Result, SnapshotError};
use crate::settings::Settings;

/// Producer of the four external datasets
#[allow(async_fn_in_trait)]
pub trait ProfileSource {
    async fn people(&self) -> Result<People>;
    async fn quote(&self) -> Result<String>;
    async fn creature(&self, id: u32) -> Result<Creature>;
    async fn about(&self) -> Result<String>;
}

/// Fetch everything and merge it into a fresh profile state
pub async fn aggregate<S, R>(source: &S, rng: &mut R, max_creature_id: u32) -> Result<ProfileState>
where
    S: ProfileSource,
    R: Rng,
{
    let creature_id = rng.random_range(1..=max_creature_id.max(1));
    log::debug!("Fetching profile (creature #{})", creature_id);

    let about = async {
        match source.about().await {
            Ok(text) => Ok::<_, SnapshotError>(Some(text)),
            Err(e) => {
                log::warn!("About fetch degraded: {}", e);
                Ok(None)
            }
        }
    };

    let (people, quote, creature, about) = try_join4(
        source.people(),
        source.quote(),
        source.creature(creature_id),
        about,
    )
    .await?;

    log::info!(
        "Loaded profile for {} ({} companions)",
        people.primary.full_name(),
        people.companions.len()
    );

    Ok(ProfileState {
        primary: Some(people.primary),
        companions: people.companions,
        quote: Some(quote),
        favorite_creature: Some(creature),
        about,
    })
}

/// Live HTTP source (fetch API on wasm32)
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    settings: Settings,
}

impl HttpSource {
    pub fn new(settings: Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(SnapshotError::NetworkFailure(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }
        Ok(res.json::<T>().await?)
    }
}

impl ProfileSource for HttpSource {
    async fn people(&self) -> Result<People> {
        let res: PeopleResponse = self
            .fetch_json(&self.settings.people_request_url())
            .await?;
        res.into_people()
    }

    async fn quote(&self) -> Result<String> {
        let res: QuoteResponse = self.fetch_json(&self.settings.quote_url).await?;
        Ok(res.quote)
    }

    async fn creature(&self, id: u32) -> Result<Creature> {
        let res: CreatureResponse = self
            .fetch_json(&self.settings.creature_request_url(id))
            .await?;
        Ok(res.into())
    }

    async fn about(&self) -> Result<String> {
        let paragraphs: Vec<String> = self
            .fetch_json(&self.settings.about_url)
            .await
            .map_err(|e| SnapshotError::DegradedFetch(e.to_string()))?;
        first_paragraph(paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::fixtures::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::cell::Cell;

    /// Canned source; `fail` names the one fetch that errors
    #[derive(Default)]
    struct FakeSource {
        fail: Option<&'static str>,
        requested_creature: Cell<Option<u32>>,
    }

    impl FakeSource {
        fn failing(which: &'static str) -> Self {
            Self {
                fail: Some(which),
                ..Default::default()
            }
        }

        fn check(&self, which: &str) -> Result<()> {
            if self.fail == Some(which) {
                Err(SnapshotError::NetworkFailure(format!("{} is down", which)))
            } else {
                Ok(())
            }
        }
    }

    impl ProfileSource for FakeSource {
        async fn people(&self) -> Result<People> {
            self.check("people")?;
            Ok(People {
                primary: person("Jane", "Doe"),
                companions: vec![companion("Ann", "Lee"), companion("Bo", "Park")],
            })
        }

        async fn quote(&self) -> Result<String> {
            self.check("quote")?;
            Ok("Keep going".to_string())
        }

        async fn creature(&self, id: u32) -> Result<Creature> {
            self.check("creature")?;
            self.requested_creature.set(Some(id));
            Ok(creature("bulbasaur"))
        }

        async fn about(&self) -> Result<String> {
            self.check("about")?;
            Ok("Bacon ipsum".to_string())
        }
    }

    #[tokio::test]
    async fn test_aggregate_merges_all_sources() {
        let source = FakeSource::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let state = aggregate(&source, &mut rng, 1025).await.unwrap();

        assert_eq!(state.primary, Some(person("Jane", "Doe")));
        assert_eq!(state.companions.len(), 2);
        assert_eq!(state.quote.as_deref(), Some("Keep going"));
        assert_eq!(state.favorite_creature, Some(creature("bulbasaur")));
        assert_eq!(state.about.as_deref(), Some("Bacon ipsum"));

        let id = source.requested_creature.get().unwrap();
        assert!((1..=1025).contains(&id));
    }

    #[tokio::test]
    async fn test_required_failure_aborts() {
        for which in ["people", "quote", "creature"] {
            let source = FakeSource::failing(which);
            let mut rng = Pcg32::seed_from_u64(1);
            let result = aggregate(&source, &mut rng, 10).await;
            assert!(
                matches!(result, Err(SnapshotError::NetworkFailure(_))),
                "{which} failure should abort"
            );
        }
    }

    #[tokio::test]
    async fn test_about_failure_degrades() {
        let source = FakeSource::failing("about");
        let mut rng = Pcg32::seed_from_u64(1);
        let state = aggregate(&source, &mut rng, 10).await.unwrap();
        assert_eq!(state.about, None);
        assert!(state.primary.is_some());
    }

    #[tokio::test]
    async fn test_creature_id_range_is_clamped() {
        let source = FakeSource::default();
        let mut rng = Pcg32::seed_from_u64(3);
        aggregate(&source, &mut rng, 0).await.unwrap();
        assert_eq!(source.requested_creature.get(), Some(1));
    }
}
