use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Locales with compiled-in data tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
    Ru,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::De, Locale::Ru];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Ru => "ru",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| Error::UnsupportedLocale(value.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes_case_insensitively() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("RU"), Some(Locale::Ru));
        assert_eq!(Locale::parse(" de "), Some(Locale::De));
    }

    #[test]
    fn unknown_locale_reports_code() {
        let err = "xx".parse::<Locale>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedLocale(_)));
        assert_eq!(err.to_string(), "xx is unsupported");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(&locale.to_string()), Some(*locale));
        }
    }
}
