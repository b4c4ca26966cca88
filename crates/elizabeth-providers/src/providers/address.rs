use elizabeth_core::{
    DEFAULT_CHAR_PLACEHOLDER, DEFAULT_DIGIT_PLACEHOLDER, Locale, Random, custom_code, render,
};
use serde::Serialize;
use tracing::debug;

use crate::data::address::{CONTINENT_CODES, COUNTRIES_ISO2, COUNTRIES_ISO3, COUNTRIES_NUMERIC};
use crate::locales::{AddressData, locale_data};
use crate::options::CountryCodeFormat;

const STREET_NUMBER_MAX: u32 = 1400;
const COORDINATE_PRECISION: u32 = 10;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Street addresses, regions and coordinates.
#[derive(Debug, Clone)]
pub struct Address {
    data: &'static AddressData,
    random: Random,
}

impl Address {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "address", locale = %locale, "provider ready");
        Self {
            data: &locale_data(locale).address,
            random,
        }
    }

    pub fn street_number(&mut self) -> u32 {
        self.random.between(1, STREET_NUMBER_MAX)
    }

    pub fn street_name(&mut self) -> &'static str {
        self.random.pick(self.data.street_names)
    }

    pub fn street_suffix(&mut self) -> &'static str {
        self.random.pick(self.data.street_suffixes)
    }

    pub fn address(&mut self) -> String {
        let number = self.street_number().to_string();
        let name = self.street_name();
        if self.data.is_shortened() {
            return render(
                self.data.address_fmt,
                &[("st_num", number.as_str()), ("st_name", name)],
            );
        }
        let suffix = self.street_suffix();
        render(
            self.data.address_fmt,
            &[("st_num", number.as_str()), ("st_name", name), ("st_sfx", suffix)],
        )
    }

    pub fn state(&mut self, abbr: bool) -> &'static str {
        if abbr {
            self.random.pick(self.data.state_abbrs)
        } else {
            self.random.pick(self.data.states)
        }
    }

    pub fn postal_code(&mut self) -> String {
        custom_code(
            &mut self.random,
            self.data.postal_code_fmt,
            DEFAULT_CHAR_PLACEHOLDER,
            DEFAULT_DIGIT_PLACEHOLDER,
        )
    }

    pub fn country_iso(&mut self, format: CountryCodeFormat) -> &'static str {
        let table = match format {
            CountryCodeFormat::Iso2 => COUNTRIES_ISO2,
            CountryCodeFormat::Iso3 => COUNTRIES_ISO3,
            CountryCodeFormat::Numeric => COUNTRIES_NUMERIC,
        };
        self.random.pick(table)
    }

    pub fn country(&mut self) -> &'static str {
        self.random.pick(self.data.countries)
    }

    pub fn city(&mut self) -> &'static str {
        self.random.pick(self.data.cities)
    }

    pub fn latitude(&mut self) -> f64 {
        self.random.uniform(-90.0, 90.0, COORDINATE_PRECISION)
    }

    pub fn longitude(&mut self) -> f64 {
        self.random.uniform(-180.0, 180.0, COORDINATE_PRECISION)
    }

    pub fn coordinates(&mut self) -> Coordinates {
        Coordinates {
            latitude: self.latitude(),
            longitude: self.longitude(),
        }
    }

    /// Continent name, or its two-letter code when `code` is set.
    pub fn continent(&mut self, code: bool) -> &'static str {
        if code {
            self.random.pick(CONTINENT_CODES)
        } else {
            self.random.pick(self.data.continents)
        }
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn english_address_has_suffix() {
        let mut address = Address::with_seed(Locale::En, 10);
        let data = &locale_data(Locale::En).address;
        for _ in 0..20 {
            let value = address.address();
            let parts: Vec<&str> = value.splitn(2, ' ').collect();
            let number: u32 = parts[0].parse().unwrap();
            assert!((1..=STREET_NUMBER_MAX).contains(&number));
            assert!(
                data.street_suffixes.iter().any(|sfx| value.ends_with(sfx)),
                "{value}"
            );
        }
    }

    #[test]
    fn german_address_is_shortened() {
        let mut address = Address::with_seed(Locale::De, 10);
        let re = Regex::new(r"^\S+ \d{1,4}$").unwrap();
        for _ in 0..20 {
            let value = address.address();
            assert!(re.is_match(&value), "{value}");
        }
    }

    #[test]
    fn country_codes_follow_format() {
        let mut address = Address::with_seed(Locale::En, 2);
        assert!(COUNTRIES_ISO2.contains(&address.country_iso(CountryCodeFormat::Iso2)));
        assert!(COUNTRIES_ISO3.contains(&address.country_iso(CountryCodeFormat::Iso3)));
        assert!(COUNTRIES_NUMERIC.contains(&address.country_iso(CountryCodeFormat::Numeric)));
    }

    #[test]
    fn coordinates_in_range() {
        let mut address = Address::with_seed(Locale::Ru, 6);
        for _ in 0..100 {
            let point = address.coordinates();
            assert!((-90.0..=90.0).contains(&point.latitude));
            assert!((-180.0..=180.0).contains(&point.longitude));
        }
        let json = serde_json::to_value(address.coordinates()).unwrap();
        assert!(json.get("latitude").is_some());
        assert!(json.get("longitude").is_some());
    }

    #[test]
    fn postal_code_matches_locale_mask() {
        let mut en = Address::with_seed(Locale::En, 1);
        let mut ru = Address::with_seed(Locale::Ru, 1);
        assert!(Regex::new(r"^\d{5}$").unwrap().is_match(&en.postal_code()));
        assert!(Regex::new(r"^\d{6}$").unwrap().is_match(&ru.postal_code()));
    }

    #[test]
    fn state_and_continent_tables() {
        let mut address = Address::with_seed(Locale::En, 3);
        let data = &locale_data(Locale::En).address;
        assert!(data.state_abbrs.contains(&address.state(true)));
        assert!(data.states.contains(&address.state(false)));
        assert!(CONTINENT_CODES.contains(&address.continent(true)));
        assert!(data.continents.contains(&address.continent(false)));
        assert!(data.cities.contains(&address.city()));
        assert!(data.countries.contains(&address.country()));
    }
}
