//! Core building blocks for the Elizabeth fake-data providers.
//!
//! This crate holds the error type, the locale key, the seeded random source
//! and the few helpers with actual logic in them: mask expansion, the Luhn
//! checksum and placeholder rendering.

pub mod error;
pub mod locale;
pub mod luhn;
pub mod mask;
pub mod random;
pub mod settings;
pub mod template;

pub use error::{Error, Result};
pub use locale::Locale;
pub use luhn::{luhn_check_digit, luhn_checksum, luhn_is_valid};
pub use mask::{DEFAULT_CHAR_PLACEHOLDER, DEFAULT_DIGIT_PLACEHOLDER, custom_code};
pub use random::{Random, ensure_float_range, ensure_range};
pub use settings::Settings;
pub use template::render;
