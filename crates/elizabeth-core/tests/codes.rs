use regex::Regex;

use elizabeth_core::{Random, custom_code, luhn_checksum, luhn_is_valid, render};

#[test]
fn masked_payload_plus_check_digit_validates() {
    let mut rng = Random::from_seed(2718);
    let re = Regex::new(r"^\d{15}$").unwrap();
    for _ in 0..200 {
        let payload = custom_code(&mut rng, "4##############", '@', '#');
        let check = luhn_checksum(&payload).unwrap();
        let number = format!("{payload}{check}");
        assert!(re.is_match(&payload));
        assert!(luhn_is_valid(&number), "{number}");
    }
}

#[test]
fn rendered_mask_is_expanded() {
    let mut rng = Random::from_seed(1);
    let mask = render("{prefix}-####", &[("prefix", "ID")]);
    let code = custom_code(&mut rng, &mask, '@', '#');
    assert!(Regex::new(r"^ID-\d{4}$").unwrap().is_match(&code), "{code}");
}
