use elizabeth_core::{Locale, Random, Result, ensure_float_range};
use tracing::debug;

use crate::data::business::{CURRENCIES, DEFAULT_CURRENCY_SYMBOL};
use crate::locales::{BusinessData, locale_data};

pub const DEFAULT_PRICE_MIN: f64 = 10.0;
pub const DEFAULT_PRICE_MAX: f64 = 1000.0;

/// Companies, currencies and prices.
#[derive(Debug, Clone)]
pub struct Business {
    data: &'static BusinessData,
    random: Random,
}

impl Business {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "business", locale = %locale, "provider ready");
        Self {
            data: &locale_data(locale).business,
            random,
        }
    }

    pub fn company_type(&mut self, abbr: bool) -> &'static str {
        if abbr {
            self.random.pick(self.data.company_type_abbrs)
        } else {
            self.random.pick(self.data.company_types)
        }
    }

    pub fn company(&mut self) -> &'static str {
        self.random.pick(self.data.companies)
    }

    pub fn copyright(&mut self) -> String {
        let company = self.company();
        let kind = self.company_type(true);
        format!("© {company}, {kind}")
    }

    pub fn currency_iso(&mut self) -> &'static str {
        self.random.pick(CURRENCIES)
    }

    pub fn currency_symbol(&self) -> &'static str {
        self.data.currency_symbol.unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Price in `[min, max]` with two decimals and the locale currency symbol.
    pub fn price(&mut self, min: f64, max: f64) -> Result<String> {
        ensure_float_range(min, max, "price")?;
        let value = self.random.uniform(min, max, 2);
        Ok(format!("{value:.2} {}", self.currency_symbol()))
    }
}

#[cfg(test)]
mod tests {
    use elizabeth_core::Error;
    use regex::Regex;

    use super::*;

    #[test]
    fn copyright_shape() {
        let mut business = Business::with_seed(Locale::En, 12);
        let re = Regex::new(r"^© [A-Za-z]+, .+$").unwrap();
        for _ in 0..10 {
            let value = business.copyright();
            assert!(re.is_match(&value), "{value}");
        }
    }

    #[test]
    fn price_uses_locale_symbol() {
        let mut en = Business::with_seed(Locale::En, 1);
        let mut de = Business::with_seed(Locale::De, 1);
        let mut ru = Business::with_seed(Locale::Ru, 1);
        assert!(en.price(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX).unwrap().ends_with(" $"));
        assert!(de.price(1.0, 2.0).unwrap().ends_with(" €"));
        assert!(ru.price(1.0, 2.0).unwrap().ends_with(" ₽"));
    }

    #[test]
    fn price_stays_in_range() {
        let mut business = Business::with_seed(Locale::En, 5);
        for _ in 0..50 {
            let price = business.price(100.0, 200.0).unwrap();
            let amount: f64 = price.split(' ').next().unwrap().parse().unwrap();
            assert!((100.0..=200.0).contains(&amount), "{price}");
        }
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let mut business = Business::with_seed(Locale::En, 5);
        let result = business.price(20.0, 10.0);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn unbounded_price_range_is_rejected() {
        let mut business = Business::with_seed(Locale::En, 5);
        for (min, max) in [
            (0.0, f64::INFINITY),
            (f64::NAN, 10.0),
            (-f64::MAX, f64::MAX),
        ] {
            let result = business.price(min, max);
            assert!(matches!(result, Err(Error::InvalidInput(_))), "{min}..{max}");
        }
        assert!(business.price(0.0, 1.0).is_ok());
    }

    #[test]
    fn currency_and_company_tables() {
        let mut business = Business::with_seed(Locale::De, 3);
        let data = &locale_data(Locale::De).business;
        assert!(CURRENCIES.contains(&business.currency_iso()));
        assert!(data.companies.contains(&business.company()));
        assert!(data.company_type_abbrs.contains(&business.company_type(true)));
        assert!(data.company_types.contains(&business.company_type(false)));
    }
}
