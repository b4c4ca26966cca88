use elizabeth_core::random::{ASCII_LOWERCASE, ASCII_UPPERCASE, DIGITS};
use elizabeth_core::{
    DEFAULT_CHAR_PLACEHOLDER, DEFAULT_DIGIT_PLACEHOLDER, Locale, Random, Result, custom_code,
    ensure_float_range, ensure_range, luhn_check_digit, render,
};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::data::network::EMAIL_DOMAINS;
use crate::data::personal::{
    AVATAR_URL, BITCOIN_PREFIXES, BLOOD_GROUPS, ENGLISH_LEVEL, FAVORITE_MUSIC_GENRE,
    GENDER_CODES, GENDER_SYMBOLS, PASSWORD_PUNCTUATION, SEXUALITY_SYMBOLS, SOCIAL_NETWORKS,
    USERNAME_FORMATS,
};
use crate::locales::{PersonalData, locale_data};
use crate::options::{CardType, Gender, HashAlgorithm, TitleType};

pub const DEFAULT_AGE_MIN: u32 = 16;
pub const DEFAULT_AGE_MAX: u32 = 66;
pub const ADULT_AGE: u32 = 18;
pub const DEFAULT_WORK_START: u32 = 22;
pub const DEFAULT_HEIGHT_MIN: f64 = 1.5;
pub const DEFAULT_HEIGHT_MAX: f64 = 2.0;
pub const DEFAULT_WEIGHT_MIN: f64 = 38.0;
pub const DEFAULT_WEIGHT_MAX: f64 = 90.0;
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_AVATAR_SIZE: u32 = 256;
pub const DEFAULT_EXPIRATION_MIN_YEAR: u32 = 16;
pub const DEFAULT_EXPIRATION_MAX_YEAR: u32 = 25;
pub const DEFAULT_IDENTIFIER_MASK: &str = "##-##/##";

const USERNAME_NUMBER_MAX: u32 = 9999;
const BITCOIN_BODY_LENGTH: usize = 33;

/// People: names, contact details, documents and preferences.
///
/// The provider remembers the last generated age, so that `child_count` and
/// `work_experience` stay consistent with it.
#[derive(Debug, Clone)]
pub struct Personal {
    data: &'static PersonalData,
    random: Random,
    age: Option<u32>,
}

impl Personal {
    pub fn new(locale: Locale) -> Self {
        Self::from_random(locale, Random::from_os_rng())
    }

    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self::from_random(locale, Random::from_seed(seed))
    }

    pub fn from_random(locale: Locale, random: Random) -> Self {
        debug!(provider = "personal", locale = %locale, "provider ready");
        Self {
            data: &locale_data(locale).personal,
            random,
            age: None,
        }
    }

    /// Random age in `[min, max]`; the value is remembered.
    pub fn age(&mut self, min: u32, max: u32) -> Result<u32> {
        ensure_range(min, max, "age")?;
        let age = self.random.between(min, max);
        self.age = Some(age);
        Ok(age)
    }

    pub fn current_age(&self) -> Option<u32> {
        self.age
    }

    fn remembered_age(&mut self) -> u32 {
        match self.age {
            Some(age) => age,
            None => {
                let age = self.random.between(DEFAULT_AGE_MIN, DEFAULT_AGE_MAX);
                self.age = Some(age);
                age
            }
        }
    }

    /// Number of children; minors have none.
    pub fn child_count(&mut self, max: u32) -> u32 {
        if self.remembered_age() < ADULT_AGE {
            return 0;
        }
        self.random.between(0, max)
    }

    /// Years worked since `start_from`, never negative.
    pub fn work_experience(&mut self, start_from: u32) -> u32 {
        self.remembered_age().saturating_sub(start_from)
    }

    pub fn name(&mut self, gender: Gender) -> &'static str {
        self.random.pick(self.data.names.get(gender))
    }

    pub fn surname(&mut self, gender: Gender) -> &'static str {
        self.random.pick(self.data.surnames.get(gender))
    }

    pub fn last_name(&mut self, gender: Gender) -> &'static str {
        self.surname(gender)
    }

    pub fn title(&mut self, gender: Gender, kind: TitleType) -> &'static str {
        let titles = match kind {
            TitleType::Typical => &self.data.typical_titles,
            TitleType::Academic => &self.data.academic_titles,
        };
        self.random.pick(titles.get(gender))
    }

    pub fn full_name(&mut self, gender: Gender, reversed: bool) -> String {
        let name = self.name(gender);
        let surname = self.surname(gender);
        if reversed {
            format!("{surname} {name}")
        } else {
            format!("{name} {surname}")
        }
    }

    /// Lowercase latin name plus a number, e.g. `emma_1024`.
    pub fn username(&mut self, gender: Gender) -> String {
        let name = self
            .random
            .pick(locale_data(Locale::En).personal.names.get(gender))
            .to_lowercase();
        let number = self.random.between(1, USERNAME_NUMBER_MAX).to_string();
        let template = self.random.pick(USERNAME_FORMATS);
        render(template, &[("name", name.as_str()), ("num", number.as_str())])
    }

    /// Username at one of `domains`, or at a common mail provider.
    pub fn email(&mut self, gender: Gender, domains: Option<&[&'static str]>) -> String {
        let username = self.username(gender);
        let domain = self.random.pick(domains.unwrap_or(EMAIL_DOMAINS));
        if domain.starts_with('@') {
            format!("{username}{domain}")
        } else {
            format!("{username}@{domain}")
        }
    }

    /// Random password, optionally returned as a hex digest.
    pub fn password(&mut self, length: usize, algorithm: Option<HashAlgorithm>) -> String {
        let alphabet: Vec<char> = ASCII_LOWERCASE
            .iter()
            .chain(ASCII_UPPERCASE)
            .chain(DIGITS)
            .chain(PASSWORD_PUNCTUATION)
            .copied()
            .collect();
        let password: String = self.random.sample_n(&alphabet, length).into_iter().collect();
        match algorithm {
            None => password,
            Some(HashAlgorithm::Sha256) => {
                let mut hasher = Sha256::new();
                hasher.update(password.as_bytes());
                hex::encode(hasher.finalize())
            }
        }
    }

    pub fn avatar(&mut self, size: u32) -> String {
        let gender = self.gender_option();
        let username = self.username(gender);
        render(
            AVATAR_URL,
            &[("size", size.to_string().as_str()), ("username", username.as_str())],
        )
    }

    /// Address starting with `1` or `3` followed by 33 alphanumerics.
    pub fn bitcoin(&mut self) -> String {
        let alphabet: Vec<char> = DIGITS
            .iter()
            .chain(ASCII_UPPERCASE)
            .chain(ASCII_LOWERCASE)
            .copied()
            .collect();
        let body: String = self
            .random
            .sample_n(&alphabet, BITCOIN_BODY_LENGTH)
            .into_iter()
            .collect();
        format!("{}{body}", self.random.pick(BITCOIN_PREFIXES))
    }

    pub fn cvv(&mut self) -> u32 {
        self.random.between(100, 999)
    }

    pub fn cid(&mut self) -> u32 {
        self.random.between(1000, 9999)
    }

    /// Card number of the given network whose last digit is a Luhn check digit.
    pub fn credit_card_number(&mut self, card: CardType) -> String {
        let (prefix, length) = match card {
            CardType::Visa => ("4".to_string(), 16),
            CardType::MasterCard => (self.random.between(51_u32, 55).to_string(), 16),
            CardType::AmericanExpress => (self.random.pick(&["34", "37"]).to_string(), 15),
        };
        let body = self.random.digits(length - prefix.len() - 1);
        let payload = format!("{prefix}{body}");
        let digits: Vec<u32> = payload.chars().filter_map(|ch| ch.to_digit(10)).collect();
        let check = luhn_check_digit(&digits);
        format!("{payload}{check}")
    }

    /// `MM/YY` with the year in `[min_year, max_year]`.
    pub fn credit_card_expiration_date(&mut self, min_year: u32, max_year: u32) -> Result<String> {
        ensure_range(min_year, max_year, "expiration year")?;
        let month = self.random.between(1_u32, 12);
        let year = self.random.between(min_year, max_year);
        Ok(format!("{month:02}/{year:02}"))
    }

    pub fn paypal(&mut self) -> String {
        let gender = self.gender_option();
        self.email(gender, None)
    }

    pub fn social_media_profile(&mut self, gender: Gender) -> String {
        let username = self.username(gender);
        let template = self.random.pick(SOCIAL_NETWORKS);
        render(template, &[("username", username.as_str())])
    }

    pub fn gender(&mut self) -> &'static str {
        self.random.pick(self.data.genders)
    }

    /// ISO/IEC 5218 code.
    pub fn gender_code(&mut self) -> u8 {
        self.random.choice(GENDER_CODES).copied().unwrap_or_default()
    }

    pub fn gender_symbol(&mut self) -> &'static str {
        self.random.pick(GENDER_SYMBOLS)
    }

    /// Height in meters with two decimals.
    pub fn height(&mut self, min: f64, max: f64) -> Result<f64> {
        ensure_float_range(min, max, "height")?;
        Ok(self.random.uniform(min, max, 2))
    }

    /// Weight in kilograms with two decimals.
    pub fn weight(&mut self, min: f64, max: f64) -> Result<f64> {
        ensure_float_range(min, max, "weight")?;
        Ok(self.random.uniform(min, max, 2))
    }

    pub fn blood_type(&mut self) -> &'static str {
        self.random.pick(BLOOD_GROUPS)
    }

    pub fn sexual_orientation(&mut self, symbol: bool) -> &'static str {
        if symbol {
            self.random.pick(SEXUALITY_SYMBOLS)
        } else {
            self.random.pick(self.data.sexuality)
        }
    }

    pub fn occupation(&mut self) -> &'static str {
        self.random.pick(self.data.occupations)
    }

    pub fn political_views(&mut self) -> &'static str {
        self.random.pick(self.data.political_views)
    }

    pub fn worldview(&mut self) -> &'static str {
        self.random.pick(self.data.worldviews)
    }

    pub fn views_on(&mut self) -> &'static str {
        self.random.pick(self.data.views_on)
    }

    pub fn nationality(&mut self, gender: Gender) -> &'static str {
        self.random.pick(self.data.nationalities.get(gender))
    }

    pub fn university(&mut self) -> &'static str {
        self.random.pick(self.data.universities)
    }

    pub fn academic_degree(&mut self) -> &'static str {
        self.random.pick(self.data.academic_degrees)
    }

    pub fn language(&mut self) -> &'static str {
        self.random.pick(self.data.languages)
    }

    pub fn favorite_movie(&mut self) -> &'static str {
        self.random.pick(self.data.favorite_movies)
    }

    pub fn favorite_music_genre(&mut self) -> &'static str {
        self.random.pick(FAVORITE_MUSIC_GENRE)
    }

    pub fn telephone(&mut self, mask: Option<&str>, placeholder: char) -> String {
        let mask = match mask {
            Some(mask) => mask,
            None => self.random.pick(self.data.telephone_fmts),
        };
        custom_code(&mut self.random, mask, DEFAULT_CHAR_PLACEHOLDER, placeholder)
    }

    pub fn identifier(&mut self, mask: Option<&str>) -> String {
        custom_code(
            &mut self.random,
            mask.unwrap_or(DEFAULT_IDENTIFIER_MASK),
            DEFAULT_CHAR_PLACEHOLDER,
            DEFAULT_DIGIT_PLACEHOLDER,
        )
    }

    pub fn level_of_english(&mut self) -> &'static str {
        self.random.pick(ENGLISH_LEVEL)
    }

    fn gender_option(&mut self) -> Gender {
        self.random.choice(Gender::ALL).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use elizabeth_core::{Error, luhn_is_valid};
    use regex::Regex;

    use super::*;

    #[test]
    fn age_is_remembered() {
        let mut personal = Personal::with_seed(Locale::En, 1);
        assert_eq!(personal.current_age(), None);
        let age = personal.age(DEFAULT_AGE_MIN, DEFAULT_AGE_MAX).unwrap();
        assert!((DEFAULT_AGE_MIN..=DEFAULT_AGE_MAX).contains(&age));
        assert_eq!(personal.current_age(), Some(age));
        assert!(matches!(personal.age(40, 20), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn minors_have_no_children() {
        let mut personal = Personal::with_seed(Locale::En, 2);
        personal.age(10, 17).unwrap();
        for _ in 0..20 {
            assert_eq!(personal.child_count(5), 0);
        }
        personal.age(30, 40).unwrap();
        for _ in 0..20 {
            assert!(personal.child_count(5) <= 5);
        }
    }

    #[test]
    fn work_experience_never_negative() {
        let mut personal = Personal::with_seed(Locale::En, 3);
        personal.age(16, 18).unwrap();
        assert_eq!(personal.work_experience(DEFAULT_WORK_START), 0);
        personal.age(40, 40).unwrap();
        assert_eq!(personal.work_experience(DEFAULT_WORK_START), 18);
    }

    #[test]
    fn work_experience_generates_age_when_missing() {
        let mut personal = Personal::with_seed(Locale::En, 4);
        personal.work_experience(DEFAULT_WORK_START);
        let age = personal.current_age().unwrap();
        assert!((DEFAULT_AGE_MIN..=DEFAULT_AGE_MAX).contains(&age));
    }

    #[test]
    fn russian_surnames_follow_gender() {
        let mut personal = Personal::with_seed(Locale::Ru, 5);
        let data = &locale_data(Locale::Ru).personal;
        for _ in 0..20 {
            assert!(data.surnames.get(Gender::Female).contains(&personal.surname(Gender::Female)));
            assert!(data.surnames.get(Gender::Male).contains(&personal.surname(Gender::Male)));
            assert!(
                data.nationalities
                    .get(Gender::Female)
                    .contains(&personal.nationality(Gender::Female))
            );
        }
    }

    #[test]
    fn full_name_order() {
        let mut personal = Personal::with_seed(Locale::En, 6);
        let data = &locale_data(Locale::En).personal;
        let name = personal.full_name(Gender::Male, false);
        let (first, last) = name.split_once(' ').unwrap();
        assert!(data.names.male.contains(&first));
        assert!(data.surnames.all().contains(&last));
        let reversed = personal.full_name(Gender::Female, true);
        let (last, first) = reversed.split_once(' ').unwrap();
        assert!(data.names.female.contains(&first));
        assert!(data.surnames.all().contains(&last));
    }

    #[test]
    fn username_and_email_shape() {
        let mut personal = Personal::with_seed(Locale::Ru, 7);
        let username = Regex::new(r"^[a-z]+[_-]?\d+$").unwrap();
        let email = Regex::new(r"^[a-z]+[_-]?\d+@[a-z.]+$").unwrap();
        for _ in 0..20 {
            let value = personal.username(Gender::Female);
            assert!(username.is_match(&value), "{value}");
            let value = personal.email(Gender::Male, None);
            assert!(email.is_match(&value), "{value}");
        }
        let custom = personal.email(Gender::Male, Some(&["example.org"]));
        assert!(custom.ends_with("@example.org"), "{custom}");
    }

    #[test]
    fn password_plain_and_hashed() {
        let mut personal = Personal::with_seed(Locale::En, 8);
        assert_eq!(personal.password(DEFAULT_PASSWORD_LENGTH, None).chars().count(), 8);
        let digest = personal.password(12, Some(HashAlgorithm::Sha256));
        assert!(Regex::new(r"^[0-9a-f]{64}$").unwrap().is_match(&digest));
    }

    #[test]
    fn credit_cards_pass_luhn() {
        let mut personal = Personal::with_seed(Locale::En, 9);
        let visa = Regex::new(r"^4\d{15}$").unwrap();
        let master = Regex::new(r"^5[1-5]\d{14}$").unwrap();
        let amex = Regex::new(r"^3[47]\d{13}$").unwrap();
        for _ in 0..50 {
            let number = personal.credit_card_number(CardType::Visa);
            assert!(visa.is_match(&number) && luhn_is_valid(&number), "{number}");
            let number = personal.credit_card_number(CardType::MasterCard);
            assert!(master.is_match(&number) && luhn_is_valid(&number), "{number}");
            let number = personal.credit_card_number(CardType::AmericanExpress);
            assert!(amex.is_match(&number) && luhn_is_valid(&number), "{number}");
        }
    }

    #[test]
    fn expiration_date_format() {
        let mut personal = Personal::with_seed(Locale::En, 10);
        let re = Regex::new(r"^(0[1-9]|1[0-2])/(1[6-9]|2[0-5])$").unwrap();
        for _ in 0..30 {
            let value = personal
                .credit_card_expiration_date(
                    DEFAULT_EXPIRATION_MIN_YEAR,
                    DEFAULT_EXPIRATION_MAX_YEAR,
                )
                .unwrap();
            assert!(re.is_match(&value), "{value}");
        }
        let result = personal.credit_card_expiration_date(25, 16);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn bitcoin_and_card_codes() {
        let mut personal = Personal::with_seed(Locale::En, 11);
        let re = Regex::new(r"^[13][a-zA-Z0-9]{33}$").unwrap();
        assert!(re.is_match(&personal.bitcoin()));
        assert!((100..=999).contains(&personal.cvv()));
        assert!((1000..=9999).contains(&personal.cid()));
        assert!(GENDER_CODES.contains(&personal.gender_code()));
    }

    #[test]
    fn telephone_uses_locale_format_or_mask() {
        let mut personal = Personal::with_seed(Locale::En, 12);
        let value = personal.telephone(Some("+5 (###)-###-##-##"), DEFAULT_DIGIT_PLACEHOLDER);
        assert!(Regex::new(r"^\+5 \(\d{3}\)-\d{3}-\d{2}-\d{2}$").unwrap().is_match(&value));
        let value = personal.telephone(Some("+7 (xxx)"), 'x');
        assert!(Regex::new(r"^\+7 \(\d{3}\)$").unwrap().is_match(&value), "{value}");
        let value = personal.telephone(None, DEFAULT_DIGIT_PLACEHOLDER);
        assert!(!value.contains('#'), "{value}");
    }

    #[test]
    fn height_and_weight_are_rounded() {
        let mut personal = Personal::with_seed(Locale::De, 13);
        let height = personal.height(DEFAULT_HEIGHT_MIN, DEFAULT_HEIGHT_MAX).unwrap();
        assert!((DEFAULT_HEIGHT_MIN..=DEFAULT_HEIGHT_MAX).contains(&height));
        let weight = personal.weight(DEFAULT_WEIGHT_MIN, DEFAULT_WEIGHT_MAX).unwrap();
        assert!((DEFAULT_WEIGHT_MIN..=DEFAULT_WEIGHT_MAX).contains(&weight));
        assert!(personal.height(2.0, 1.0).is_err());
        assert!(matches!(personal.weight(90.0, 38.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn non_finite_measurements_are_rejected() {
        let mut personal = Personal::with_seed(Locale::En, 13);
        assert!(matches!(personal.height(f64::NAN, 2.0), Err(Error::InvalidInput(_))));
        assert!(matches!(personal.height(1.0, f64::INFINITY), Err(Error::InvalidInput(_))));
        assert!(matches!(
            personal.weight(-f64::MAX, f64::MAX),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn identifier_and_profiles() {
        let mut personal = Personal::with_seed(Locale::En, 14);
        let id = personal.identifier(None);
        assert!(Regex::new(r"^\d{2}-\d{2}/\d{2}$").unwrap().is_match(&id));
        let profile = personal.social_media_profile(Gender::Female);
        assert!(profile.starts_with("http://"), "{profile}");
        let avatar = personal.avatar(DEFAULT_AVATAR_SIZE);
        assert!(avatar.starts_with("https://api.adorable.io/avatars/256/"), "{avatar}");
        assert!(avatar.ends_with(".png"));
    }
}
