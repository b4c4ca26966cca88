use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::locale::Locale;
use crate::random::Random;

/// Provider configuration, usually read from a small TOML file.
///
/// ```toml
/// locale = "ru"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    /// Fixed seed for reproducible output; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn new(locale: Locale, seed: Option<u64>) -> Self {
        Self { locale, seed }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        debug!(locale = %settings.locale, seeded = settings.seed.is_some(), "settings loaded");
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn random(&self) -> Random {
        match self.seed {
            Some(seed) => Random::from_seed(seed),
            None => Random::from_os_rng(),
        }
    }
}
