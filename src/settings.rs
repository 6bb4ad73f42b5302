//! App settings
//!
//! Read from its own LocalStorage key, separate from snapshots. The page never
//! writes it; overrides are set by hand (e.g. from the browser console).

use serde::{Deserialize, Serialize};

/// Console log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Endpoints and storage layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Endpoints ===
    /// People generator (primary person + companions)
    pub people_url: String,
    /// Quote API
    pub quote_url: String,
    /// Creature lookup, the numeric id is appended as a path segment
    pub creature_url: String,
    /// Filler text for the "about" section
    pub about_url: String,

    // === Fetch shape ===
    /// Number of companions fetched alongside the primary person
    pub companion_count: u32,
    /// Creature ids are drawn from `1..=max_creature_id`
    pub max_creature_id: u32,

    // === Storage ===
    /// LocalStorage key holding the snapshot collection
    pub snapshot_key: String,

    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            people_url: "https://randomuser.me/api/".to_string(),
            quote_url: "https://api.kanye.rest/".to_string(),
            creature_url: "https://pokeapi.co/api/v2/pokemon".to_string(),
            about_url: "https://baconipsum.com/api/?type=meat-and-filler".to_string(),

            companion_count: 6,
            max_creature_id: 1025,

            snapshot_key: crate::consts::SNAPSHOT_KEY.to_string(),

            log_level: LogLevel::Info,
        }
    }
}

impl Settings {
    /// Full people request URL (primary + companions, trimmed to the fields we use)
    pub fn people_request_url(&self) -> String {
        format!(
            "{}?results={}&inc=name,location,picture",
            self.people_url,
            self.companion_count + 1
        )
    }

    /// Creature request URL for one id
    pub fn creature_request_url(&self, id: u32) -> String {
        format!("{}/{}", self.creature_url.trim_end_matches('/'), id)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "profile_snapshots_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_request_url_counts_primary() {
        let settings = Settings::default();
        assert_eq!(
            settings.people_request_url(),
            "https://randomuser.me/api/?results=7&inc=name,location,picture"
        );
    }

    #[test]
    fn test_creature_request_url() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.creature_request_url(25),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
        settings.creature_url = "http://localhost/pokemon/".to_string();
        assert_eq!(settings.creature_request_url(1), "http://localhost/pokemon/1");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"snapshot_key": "other", "log_level": "Debug"}"#).unwrap();
        assert_eq!(settings.snapshot_key, "other");
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.max_creature_id, 1025);
        assert_eq!(settings.companion_count, 6);
    }

    #[test]
    fn test_log_level_maps_to_log_crate() {
        let settings: Settings = serde_json::from_str(r#"{"log_level": "Warn"}"#).unwrap();
        assert_eq!(settings.log_level.to_level(), log::Level::Warn);
        assert_eq!(LogLevel::Debug.to_level(), log::Level::Debug);
        assert_eq!(Settings::default().log_level.to_level(), log::Level::Info);
    }
}
