use elizabeth_core::{Error, Locale, Random, Result};
use serde::Serialize;
use tracing::debug;

use crate::data::scientific::MATH_FORMULAS;
use crate::locales::{ScienceData, locale_data};

/// One entry of the periodic table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChemicalElement {
    pub name: &'static str,
    pub symbol: &'static str,
    pub number: u8,
}

impl ChemicalElement {
    /// Parse a `name|symbol|number` table entry.
    pub fn parse(entry: &'static str) -> Result<Self> {
        let mut fields = entry.split('|');
        let (Some(name), Some(symbol), Some(number), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::InvalidInput(format!("malformed chemical element `{entry}`")));
        };
        let number = number
            .parse()
            .map_err(|_| Error::InvalidInput(format!("bad atomic number in `{entry}`")))?;
        Ok(Self {
            name,
            symbol,
            number,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Science {
    data: &'static ScienceData,
    random: Random,
}

impl Science {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "science", locale = %locale, "provider ready");
        Self {
            data: &locale_data(locale).science,
            random,
        }
    }

    pub fn math_formula(&mut self) -> &'static str {
        self.random.pick(MATH_FORMULAS)
    }

    pub fn chemical_element(&mut self) -> &'static str {
        let entry = self.random.pick(self.data.chemical_elements);
        entry.split('|').next().unwrap_or_default()
    }

    pub fn chemical_element_info(&mut self) -> Result<ChemicalElement> {
        ChemicalElement::parse(self.random.pick(self.data.chemical_elements))
    }

    pub fn scientific_article(&mut self) -> &'static str {
        self.random.pick(self.data.articles)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn english_element_names_are_capitalized_words() {
        let mut science = Science::with_seed(Locale::En, 4);
        let re = Regex::new(r"^[A-Z][a-z]+$").unwrap();
        for _ in 0..30 {
            let name = science.chemical_element();
            assert!(re.is_match(name), "{name}");
        }
    }

    #[test]
    fn element_info_is_parsed() {
        let mut science = Science::with_seed(Locale::Ru, 4);
        for _ in 0..30 {
            let element = science.chemical_element_info().unwrap();
            assert!(!element.name.is_empty());
            assert!(element.symbol.chars().next().unwrap().is_ascii_uppercase());
            assert!((1..=118).contains(&element.number));
        }
        let gold = ChemicalElement::parse("Gold|Au|79").unwrap();
        assert_eq!(gold.symbol, "Au");
        assert_eq!(gold.number, 79);
    }

    #[test]
    fn malformed_entries_are_rejected() {
        assert!(matches!(ChemicalElement::parse("Gold|Au"), Err(Error::InvalidInput(_))));
        assert!(matches!(ChemicalElement::parse("Gold|Au|x"), Err(Error::InvalidInput(_))));
        assert!(ChemicalElement::parse("Gold|Au|79|extra").is_err());
    }

    #[test]
    fn articles_and_formulas() {
        let mut science = Science::with_seed(Locale::De, 1);
        assert!(science.scientific_article().starts_with("https://de.wikipedia.org/"));
        assert!(MATH_FORMULAS.contains(&science.math_formula()));
    }
}
