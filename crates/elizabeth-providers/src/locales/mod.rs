//! Compiled-in locale tables.

use elizabeth_core::Locale;

use crate::options::Gender;

mod de;
mod en;
mod ru;

pub type Table = &'static [&'static str];

/// A pair of tables split by grammatical gender.
#[derive(Debug)]
pub struct Gendered {
    pub female: Table,
    pub male: Table,
}

impl Gendered {
    pub fn get(&self, gender: Gender) -> Table {
        match gender {
            Gender::Female => self.female,
            Gender::Male => self.male,
        }
    }
}

/// A table that is gender-specific only in some locales.
#[derive(Debug)]
pub enum ByGender {
    Shared(Table),
    Split(Gendered),
}

impl ByGender {
    pub fn get(&self, gender: Gender) -> Table {
        match self {
            ByGender::Shared(values) => values,
            ByGender::Split(split) => split.get(gender),
        }
    }

    /// Every value regardless of gender.
    pub fn all(&self) -> Vec<&'static str> {
        match self {
            ByGender::Shared(values) => values.to_vec(),
            ByGender::Split(split) => split.female.iter().chain(split.male).copied().collect(),
        }
    }
}

#[derive(Debug)]
pub struct TextData {
    pub alphabet_upper: Table,
    pub alphabet_lower: Table,
    pub level: Table,
    pub text: Table,
    pub words: Table,
    pub bad_words: Table,
    pub quotes: Table,
    pub colors: Table,
    pub answers: Table,
}

#[derive(Debug)]
pub struct AddressData {
    /// Template with `{st_num}`, `{st_name}` and optionally `{st_sfx}`.
    pub address_fmt: &'static str,
    pub street_names: Table,
    pub street_suffixes: Table,
    pub states: Table,
    pub state_abbrs: Table,
    pub countries: Table,
    pub cities: Table,
    pub continents: Table,
    /// Mask expanded with `@` letters and `#` digits.
    pub postal_code_fmt: &'static str,
}

impl AddressData {
    /// Shortened formats leave the street suffix out.
    pub fn is_shortened(&self) -> bool {
        !self.address_fmt.contains("{st_sfx}")
    }
}

#[derive(Debug)]
pub struct BusinessData {
    pub company_types: Table,
    pub company_type_abbrs: Table,
    pub companies: Table,
    pub currency_symbol: Option<&'static str>,
}

#[derive(Debug)]
pub struct PersonalData {
    pub names: Gendered,
    pub surnames: ByGender,
    pub typical_titles: Gendered,
    pub academic_titles: Gendered,
    pub genders: Table,
    pub sexuality: Table,
    pub occupations: Table,
    pub political_views: Table,
    pub worldviews: Table,
    pub views_on: Table,
    pub nationalities: ByGender,
    pub universities: Table,
    pub academic_degrees: Table,
    pub languages: Table,
    pub favorite_movies: Table,
    pub telephone_fmts: Table,
}

#[derive(Debug)]
pub struct FoodData {
    pub vegetables: Table,
    pub fruits: Table,
    pub dishes: Table,
    pub spices: Table,
    pub drinks: Table,
}

#[derive(Debug)]
pub struct ScienceData {
    /// Entries are `name|symbol|atomic number`.
    pub chemical_elements: Table,
    pub articles: Table,
}

#[derive(Debug)]
pub struct DatetimeData {
    pub days: Table,
    pub day_abbrs: Table,
    pub months: Table,
    pub month_abbrs: Table,
    pub periodicity: Table,
}

#[derive(Debug)]
pub struct LocaleData {
    pub locale: Locale,
    pub text: TextData,
    pub address: AddressData,
    pub business: BusinessData,
    pub personal: PersonalData,
    pub food: FoodData,
    pub science: ScienceData,
    pub datetime: DatetimeData,
}

pub fn locale_data(locale: Locale) -> &'static LocaleData {
    match locale {
        Locale::En => &en::DATA,
        Locale::De => &de::DATA,
        Locale::Ru => &ru::DATA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(data: &LocaleData) -> Vec<(&'static str, Table)> {
        vec![
            ("text.alphabet_upper", data.text.alphabet_upper),
            ("text.alphabet_lower", data.text.alphabet_lower),
            ("text.level", data.text.level),
            ("text.text", data.text.text),
            ("text.words", data.text.words),
            ("text.bad_words", data.text.bad_words),
            ("text.quotes", data.text.quotes),
            ("text.colors", data.text.colors),
            ("text.answers", data.text.answers),
            ("address.street_names", data.address.street_names),
            ("address.street_suffixes", data.address.street_suffixes),
            ("address.states", data.address.states),
            ("address.state_abbrs", data.address.state_abbrs),
            ("address.countries", data.address.countries),
            ("address.cities", data.address.cities),
            ("address.continents", data.address.continents),
            ("business.company_types", data.business.company_types),
            ("business.company_type_abbrs", data.business.company_type_abbrs),
            ("business.companies", data.business.companies),
            ("personal.names.female", data.personal.names.female),
            ("personal.names.male", data.personal.names.male),
            ("personal.surnames.female", data.personal.surnames.get(Gender::Female)),
            ("personal.surnames.male", data.personal.surnames.get(Gender::Male)),
            ("personal.typical_titles.female", data.personal.typical_titles.female),
            ("personal.typical_titles.male", data.personal.typical_titles.male),
            ("personal.academic_titles.female", data.personal.academic_titles.female),
            ("personal.academic_titles.male", data.personal.academic_titles.male),
            ("personal.genders", data.personal.genders),
            ("personal.sexuality", data.personal.sexuality),
            ("personal.occupations", data.personal.occupations),
            ("personal.political_views", data.personal.political_views),
            ("personal.worldviews", data.personal.worldviews),
            ("personal.views_on", data.personal.views_on),
            ("personal.nationalities.female", data.personal.nationalities.get(Gender::Female)),
            ("personal.nationalities.male", data.personal.nationalities.get(Gender::Male)),
            ("personal.universities", data.personal.universities),
            ("personal.academic_degrees", data.personal.academic_degrees),
            ("personal.languages", data.personal.languages),
            ("personal.favorite_movies", data.personal.favorite_movies),
            ("personal.telephone_fmts", data.personal.telephone_fmts),
            ("food.vegetables", data.food.vegetables),
            ("food.fruits", data.food.fruits),
            ("food.dishes", data.food.dishes),
            ("food.spices", data.food.spices),
            ("food.drinks", data.food.drinks),
            ("science.chemical_elements", data.science.chemical_elements),
            ("science.articles", data.science.articles),
            ("datetime.days", data.datetime.days),
            ("datetime.day_abbrs", data.datetime.day_abbrs),
            ("datetime.months", data.datetime.months),
            ("datetime.month_abbrs", data.datetime.month_abbrs),
            ("datetime.periodicity", data.datetime.periodicity),
        ]
    }

    #[test]
    fn every_locale_has_non_empty_tables() {
        for locale in Locale::ALL {
            let data = locale_data(*locale);
            assert_eq!(data.locale, *locale);
            for (name, table) in tables(data) {
                assert!(!table.is_empty(), "{locale}: {name} is empty");
            }
        }
    }

    #[test]
    fn calendar_tables_have_expected_sizes() {
        for locale in Locale::ALL {
            let data = locale_data(*locale);
            assert_eq!(data.datetime.days.len(), 7, "{locale}");
            assert_eq!(data.datetime.day_abbrs.len(), 7, "{locale}");
            assert_eq!(data.datetime.months.len(), 12, "{locale}");
            assert_eq!(data.datetime.month_abbrs.len(), 12, "{locale}");
        }
    }

    #[test]
    fn chemical_elements_have_three_fields() {
        for locale in Locale::ALL {
            for entry in locale_data(*locale).science.chemical_elements {
                assert_eq!(entry.split('|').count(), 3, "{locale}: {entry}");
            }
        }
    }

    #[test]
    fn names_are_single_tokens() {
        for locale in Locale::ALL {
            let personal = &locale_data(*locale).personal;
            for name in personal.names.female.iter().chain(personal.names.male) {
                assert!(!name.contains(' '), "{locale}: {name}");
            }
            for surname in personal.surnames.all() {
                assert!(!surname.contains(' '), "{locale}: {surname}");
            }
        }
    }

    #[test]
    fn russian_surnames_are_gendered() {
        let personal = &locale_data(Locale::Ru).personal;
        assert!(matches!(personal.surnames, ByGender::Split(_)));
        assert!(matches!(personal.nationalities, ByGender::Split(_)));
        let english = &locale_data(Locale::En).personal;
        assert!(matches!(english.surnames, ByGender::Shared(_)));
    }
}
