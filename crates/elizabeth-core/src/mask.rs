use crate::random::Random;

pub const DEFAULT_MASK: &str = "@###";
pub const DEFAULT_CHAR_PLACEHOLDER: char = '@';
pub const DEFAULT_DIGIT_PLACEHOLDER: char = '#';

/// Expand a code mask.
///
/// Every `char_placeholder` becomes a random uppercase ASCII letter, every
/// `digit_placeholder` a random digit, and anything else is copied as is.
/// The letter placeholder wins when both placeholders are the same character.
pub fn custom_code(
    rng: &mut Random,
    mask: &str,
    char_placeholder: char,
    digit_placeholder: char,
) -> String {
    mask.chars()
        .map(|ch| {
            if ch == char_placeholder {
                rng.uppercase()
            } else if ch == digit_placeholder {
                rng.digit()
            } else {
                ch
            }
        })
        .collect()
}
