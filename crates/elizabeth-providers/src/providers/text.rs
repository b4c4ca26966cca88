use elizabeth_core::{Locale, Random};
use tracing::debug;

use crate::locales::{TextData, locale_data};
use crate::options::LetterCase;

pub const DEFAULT_QUANTITY: usize = 5;

const HEX_DIGITS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Words, sentences, quotes and colors.
#[derive(Debug, Clone)]
pub struct Text {
    data: &'static TextData,
    random: Random,
}

impl Text {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "text", locale = %locale, "provider ready");
        Self {
            data: &locale_data(locale).text,
            random,
        }
    }

    pub fn alphabet(&self, case: LetterCase) -> &'static [&'static str] {
        match case {
            LetterCase::Uppercase => self.data.alphabet_upper,
            LetterCase::Lowercase => self.data.alphabet_lower,
        }
    }

    /// Severity word such as `critical` or `low`.
    pub fn level(&mut self) -> &'static str {
        self.random.pick(self.data.level)
    }

    /// `quantity` sentences joined by a space.
    pub fn text(&mut self, quantity: usize) -> String {
        self.random.sample_n(self.data.text, quantity).join(" ")
    }

    pub fn sentence(&mut self) -> &'static str {
        self.random.pick(self.data.text)
    }

    pub fn words(&mut self, quantity: usize) -> Vec<&'static str> {
        self.random.sample_n(self.data.words, quantity)
    }

    pub fn word(&mut self) -> &'static str {
        self.random.pick(self.data.words)
    }

    pub fn swear_word(&mut self) -> &'static str {
        self.random.pick(self.data.bad_words)
    }

    pub fn quote(&mut self) -> &'static str {
        self.random.pick(self.data.quotes)
    }

    pub fn color(&mut self) -> &'static str {
        self.random.pick(self.data.colors)
    }

    /// `#` followed by six distinct uppercase hex digits.
    pub fn hex_color(&mut self) -> String {
        let digits: String = self.random.distinct(HEX_DIGITS, 6).into_iter().collect();
        format!("#{digits}")
    }

    pub fn answer(&mut self) -> &'static str {
        self.random.pick(self.data.answers)
    }
}
