use elizabeth_core::{Locale, Settings};
use tracing::debug;

use super::{
    Address, Business, ClothingSizes, Code, Datetime, Development, File, Food, Hardware,
    Internet, Path, Personal, Platform, Science, Structured, Text, Transport, UnitSystem,
};

/// Every provider behind one value.
///
/// Each provider gets its own stream derived from the settings seed, so a
/// seeded `Generic` replays the same values for the same call sequence.
#[derive(Debug, Clone)]
pub struct Generic {
    locale: Locale,
    pub address: Address,
    pub business: Business,
    pub clothing_sizes: ClothingSizes,
    pub code: Code,
    pub datetime: Datetime,
    pub development: Development,
    pub file: File,
    pub food: Food,
    pub hardware: Hardware,
    pub internet: Internet,
    pub path: Path,
    pub personal: Personal,
    pub science: Science,
    pub structured: Structured,
    pub text: Text,
    pub transport: Transport,
    pub unit_system: UnitSystem,
}

impl Generic {
    pub fn new(settings: &Settings) -> Self {
        let locale = settings.locale;
        let mut random = settings.random();
        debug!(locale = %locale, seeded = settings.seed.is_some(), "building generic provider");
        Self {
            locale,
            address: Address::from_random(locale, random.derive()),
            business: Business::from_random(locale, random.derive()),
            clothing_sizes: ClothingSizes::from_random(random.derive()),
            code: Code::from_random(locale, random.derive()),
            datetime: Datetime::from_random(locale, random.derive()),
            development: Development::from_random(random.derive()),
            file: File::from_random(random.derive()),
            food: Food::from_random(locale, random.derive()),
            hardware: Hardware::from_random(random.derive()),
            internet: Internet::from_random(random.derive()),
            path: Path::from_random(Platform::current(), random.derive()),
            personal: Personal::from_random(locale, random.derive()),
            science: Science::from_random(locale, random.derive()),
            structured: Structured::from_random(locale, random.derive()),
            text: Text::from_random(locale, random.derive()),
            transport: Transport::from_random(random.derive()),
            unit_system: UnitSystem::from_random(random.derive()),
        }
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self::new(&Settings::new(locale, None))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
