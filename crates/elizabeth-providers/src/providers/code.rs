use elizabeth_core::mask::DEFAULT_MASK;
use elizabeth_core::{
    DEFAULT_CHAR_PLACEHOLDER, DEFAULT_DIGIT_PLACEHOLDER, Locale, Random, custom_code,
    luhn_check_digit,
};
use tracing::debug;

use crate::data::code::{DEFAULT_ISBN_GROUP, IMEI_TACS, ISBN_GROUPS, LOCALE_CODES};
use crate::options::{EanFormat, IsbnFormat};

pub const DEFAULT_ISSN_MASK: &str = "####-####";
pub const DEFAULT_PIN_MASK: &str = "####";

/// Codes: ISBN, EAN, IMEI, ISSN, PINs and arbitrary masks.
#[derive(Debug, Clone)]
pub struct Code {
    locale: Locale,
    random: Random,
}

impl Code {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "code", locale = %locale, "provider ready");
        Self { locale, random }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Expand `mask` with the given placeholders (see [`custom_code`]).
    pub fn custom_code(
        &mut self,
        mask: &str,
        char_placeholder: char,
        digit_placeholder: char,
    ) -> String {
        custom_code(&mut self.random, mask, char_placeholder, digit_placeholder)
    }

    /// `@###` style code with the default placeholders.
    pub fn default_code(&mut self) -> String {
        self.expand(DEFAULT_MASK)
    }

    /// Random Windows locale identifier, e.g. `de-ch`.
    pub fn locale_code(&mut self) -> &'static str {
        self.random.pick(LOCALE_CODES)
    }

    pub fn issn(&mut self, mask: Option<&str>) -> String {
        self.expand(mask.unwrap_or(DEFAULT_ISSN_MASK))
    }

    pub fn isbn(&mut self, format: IsbnFormat) -> String {
        let group = ISBN_GROUPS
            .iter()
            .find(|(code, _)| *code == self.locale.as_str())
            .map(|(_, group)| *group)
            .unwrap_or(DEFAULT_ISBN_GROUP);
        let mask = match format {
            IsbnFormat::Isbn10 => format!("{group}-#####-###-#"),
            IsbnFormat::Isbn13 => format!("###-{group}-#####-###-#"),
        };
        self.expand(&mask)
    }

    pub fn ean(&mut self, format: EanFormat) -> String {
        let mask = match format {
            EanFormat::Ean8 => "########",
            EanFormat::Ean13 => "#############",
        };
        self.expand(mask)
    }

    /// 15-digit IMEI: type allocation code, serial, Luhn check digit.
    pub fn imei(&mut self) -> String {
        let payload = format!("{}{}", self.random.pick(IMEI_TACS), self.random.digits(6));
        let digits: Vec<u32> = payload.chars().filter_map(|ch| ch.to_digit(10)).collect();
        let check = luhn_check_digit(&digits);
        format!("{payload}{check}")
    }

    pub fn pin(&mut self, mask: Option<&str>) -> String {
        self.expand(mask.unwrap_or(DEFAULT_PIN_MASK))
    }

    fn expand(&mut self, mask: &str) -> String {
        custom_code(
            &mut self.random,
            mask,
            DEFAULT_CHAR_PLACEHOLDER,
            DEFAULT_DIGIT_PLACEHOLDER,
        )
    }
}

#[cfg(test)]
mod tests {
    use elizabeth_core::luhn_is_valid;
    use regex::Regex;

    use super::*;

    #[test]
    fn isbn_uses_locale_group() {
        let mut code = Code::with_seed(Locale::De, 9);
        let isbn10 = Regex::new(r"^3-\d{5}-\d{3}-\d$").unwrap();
        let isbn13 = Regex::new(r"^\d{3}-3-\d{5}-\d{3}-\d$").unwrap();
        for _ in 0..20 {
            assert!(isbn10.is_match(&code.isbn(IsbnFormat::Isbn10)));
            assert!(isbn13.is_match(&code.isbn(IsbnFormat::Isbn13)));
        }
    }

    #[test]
    fn ean_lengths() {
        let mut code = Code::with_seed(Locale::En, 1);
        assert_eq!(code.ean(EanFormat::Ean8).len(), 8);
        assert_eq!(code.ean(EanFormat::default()).len(), 13);
        assert!(code.ean(EanFormat::Ean13).chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn imei_passes_luhn() {
        let mut code = Code::with_seed(Locale::En, 77);
        for _ in 0..100 {
            let imei = code.imei();
            assert_eq!(imei.len(), 15);
            assert!(IMEI_TACS.contains(&&imei[..8]));
            assert!(luhn_is_valid(&imei), "{imei}");
        }
    }

    #[test]
    fn issn_and_pin_defaults() {
        let mut code = Code::with_seed(Locale::Ru, 4);
        assert!(Regex::new(r"^\d{4}-\d{4}$").unwrap().is_match(&code.issn(None)));
        assert!(Regex::new(r"^\d{4}$").unwrap().is_match(&code.pin(None)));
        assert!(Regex::new(r"^\d{2}:\d{2}$").unwrap().is_match(&code.pin(Some("##:##"))));
        assert!(LOCALE_CODES.contains(&code.locale_code()));
    }

    #[test]
    fn custom_code_with_other_placeholders() {
        let mut code = Code::with_seed(Locale::En, 2);
        let value = code.custom_code("XX-%%%", 'X', '%');
        assert!(Regex::new(r"^[A-Z]{2}-\d{3}$").unwrap().is_match(&value), "{value}");
        assert!(Regex::new(r"^[A-Z]\d{3}$").unwrap().is_match(&code.default_code()));
    }
}
