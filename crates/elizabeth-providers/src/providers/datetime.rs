use chrono::{Datelike, NaiveDate, NaiveTime};
use elizabeth_core::{Error, Locale, Random, Result, ensure_range};
use tracing::debug;

use crate::data::datetime::ROMAN_NUMS;
use crate::locales::{DatetimeData, locale_data};

pub const DEFAULT_YEAR_MIN: i32 = 1990;
pub const DEFAULT_YEAR_MAX: i32 = 2050;

/// Calendar names, dates and times.
#[derive(Debug, Clone)]
pub struct Datetime {
    data: &'static DatetimeData,
    random: Random,
}

impl Datetime {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "datetime", locale = %locale, "provider ready");
        Self {
            data: &locale_data(locale).datetime,
            random,
        }
    }

    pub fn day_of_week(&mut self, abbr: bool) -> &'static str {
        if abbr {
            self.random.pick(self.data.day_abbrs)
        } else {
            self.random.pick(self.data.days)
        }
    }

    pub fn month(&mut self, abbr: bool) -> &'static str {
        if abbr {
            self.random.pick(self.data.month_abbrs)
        } else {
            self.random.pick(self.data.months)
        }
    }

    pub fn year(&mut self, min: i32, max: i32) -> Result<i32> {
        ensure_range(min, max, "year")?;
        Ok(self.random.between(min, max))
    }

    /// Century in roman numerals, `I` through `XXI`.
    pub fn century(&mut self) -> &'static str {
        self.random.pick(ROMAN_NUMS)
    }

    pub fn periodicity(&mut self) -> &'static str {
        self.random.pick(self.data.periodicity)
    }

    /// Calendar date between January 1st of `start_year` and December 31st of `end_year`.
    pub fn date(&mut self, start_year: i32, end_year: i32) -> Result<NaiveDate> {
        ensure_range(start_year, end_year, "date year")?;
        let first = year_start(start_year)?;
        let last = year_start(end_year)?
            .with_ordinal(days_in_year(end_year))
            .ok_or_else(|| Error::InvalidInput(format!("year {end_year} out of range")))?;
        let span = last.signed_duration_since(first).num_days();
        let offset = self.random.between(0, span);
        first
            .checked_add_signed(chrono::Duration::days(offset))
            .ok_or_else(|| Error::InvalidInput(format!("date offset {offset} out of range")))
    }

    pub fn time(&mut self) -> NaiveTime {
        let seconds = self.random.between(0_u32, 86_399);
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN)
    }
}

fn year_start(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| Error::InvalidInput(format!("year {year} out of range")))
}

fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn date_within_years() {
        let mut datetime = Datetime::with_seed(Locale::En, 1);
        for _ in 0..100 {
            let date = datetime.date(2000, 2001).unwrap();
            assert!((2000..=2001).contains(&date.year()), "{date}");
        }
        let date = datetime.date(2024, 2024).unwrap();
        assert_eq!(date.year(), 2024);
    }

    #[test]
    fn inverted_years_are_rejected() {
        let mut datetime = Datetime::with_seed(Locale::En, 1);
        assert!(matches!(datetime.date(2010, 2000), Err(Error::InvalidInput(_))));
        assert!(matches!(datetime.year(2010, 2000), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn year_defaults() {
        let mut datetime = Datetime::with_seed(Locale::De, 2);
        let year = datetime.year(DEFAULT_YEAR_MIN, DEFAULT_YEAR_MAX).unwrap();
        assert!((DEFAULT_YEAR_MIN..=DEFAULT_YEAR_MAX).contains(&year));
    }

    #[test]
    fn time_is_valid() {
        let mut datetime = Datetime::with_seed(Locale::Ru, 3);
        for _ in 0..50 {
            assert!(datetime.time().hour() < 24);
        }
    }

    #[test]
    fn calendar_names_are_localized() {
        let mut datetime = Datetime::with_seed(Locale::Ru, 4);
        let data = &locale_data(Locale::Ru).datetime;
        assert!(data.days.contains(&datetime.day_of_week(false)));
        assert!(data.day_abbrs.contains(&datetime.day_of_week(true)));
        assert!(data.months.contains(&datetime.month(false)));
        assert!(data.month_abbrs.contains(&datetime.month(true)));
        assert!(ROMAN_NUMS.contains(&datetime.century()));
    }

    #[test]
    fn leap_years() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }
}
