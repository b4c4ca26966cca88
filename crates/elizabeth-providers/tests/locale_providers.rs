use regex::Regex;

use elizabeth_providers::locales::locale_data;
use elizabeth_providers::{
    Address, Business, Code, Datetime, Error, Food, Gender, IsbnFormat, Locale, Personal,
    Science, Text, TitleType,
};

#[test]
fn every_locale_builds_every_provider() {
    for locale in Locale::ALL {
        let data = locale_data(*locale);
        let mut personal = Personal::with_seed(*locale, 1);
        let mut address = Address::with_seed(*locale, 1);
        let mut text = Text::with_seed(*locale, 1);
        let mut food = Food::with_seed(*locale, 1);
        let mut datetime = Datetime::with_seed(*locale, 1);
        let mut science = Science::with_seed(*locale, 1);

        assert!(data.personal.occupations.contains(&personal.occupation()));
        assert!(data.personal.languages.contains(&personal.language()));
        assert!(data.address.cities.contains(&address.city()));
        assert!(data.text.colors.contains(&text.color()));
        assert!(data.food.fruits.contains(&food.fruit()));
        assert!(data.datetime.periodicity.contains(&datetime.periodicity()));
        assert!(science.chemical_element_info().is_ok());
    }
}

#[test]
fn same_seed_same_sequence() {
    let mut left = Personal::with_seed(Locale::De, 314);
    let mut right = Personal::with_seed(Locale::De, 314);
    for _ in 0..10 {
        assert_eq!(left.full_name(Gender::Male, true), right.full_name(Gender::Male, true));
        assert_eq!(left.telephone(None, '#'), right.telephone(None, '#'));
        assert_eq!(left.age(16, 66).unwrap(), right.age(16, 66).unwrap());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut left = Code::with_seed(Locale::En, 1);
    let mut right = Code::with_seed(Locale::En, 2);
    let left: Vec<String> = (0..5).map(|_| left.ean(Default::default())).collect();
    let right: Vec<String> = (0..5).map(|_| right.ean(Default::default())).collect();
    assert_ne!(left, right);
}

#[test]
fn titles_follow_type_and_gender() {
    let mut personal = Personal::with_seed(Locale::En, 5);
    let data = &locale_data(Locale::En).personal;
    let typical = personal.title(Gender::Female, TitleType::Typical);
    assert!(data.typical_titles.female.contains(&typical));
    let academic = personal.title(Gender::Male, "academic".parse().unwrap());
    assert!(data.academic_titles.male.contains(&academic));
}

#[test]
fn isbn_falls_back_per_locale() {
    let mut code = Code::with_seed(Locale::Ru, 8);
    let re = Regex::new(r"^5-\d{5}-\d{3}-\d$").unwrap();
    assert!(re.is_match(&code.isbn("isbn-10".parse().unwrap())));
    let err = "isbn-11".parse::<IsbnFormat>().unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn russian_address_uses_street_type() {
    let mut address = Address::with_seed(Locale::Ru, 9);
    let data = &locale_data(Locale::Ru).address;
    for _ in 0..10 {
        let value = address.address();
        assert!(value.contains(", д. "), "{value}");
        assert!(
            data.street_suffixes.iter().any(|sfx| value.starts_with(sfx)),
            "{value}"
        );
    }
}

#[test]
fn business_ranges_are_validated() {
    let mut business = Business::with_seed(Locale::En, 3);
    assert!(matches!(business.price(5.0, 1.0), Err(Error::InvalidInput(_))));
    let price = business.price(1.0, 1.0).unwrap();
    assert_eq!(price, "1.00 $");
}
