//! Fake-data providers: people, addresses, codes, hardware, text and more.
//!
//! Locale aware providers draw from tables compiled into the crate for
//! `en`, `de` and `ru`. Every provider can be seeded for reproducible output.
//!
//! ```
//! use elizabeth_providers::{Gender, Locale, Personal};
//!
//! let mut personal = Personal::with_seed(Locale::En, 42);
//! let name = personal.full_name(Gender::Female, false);
//! assert!(name.contains(' '));
//! ```

pub mod data;
pub mod locales;
pub mod options;
pub mod providers;

pub use elizabeth_core::{Error, Locale, Random, Result, Settings};
pub use options::{
    CardType, CountryCodeFormat, EanFormat, FileType, Gender, HashAlgorithm, HashtagCategory,
    IsbnFormat, LetterCase, MimeCategory, Sign, TitleType,
};
pub use providers::{
    Address, Business, ChemicalElement, ClothingSizes, Code, Coordinates, Datetime, Development,
    File, Food, Generic, Hardware, Internet, Path, Personal, Platform, Science, Structured, Text,
    Transport, UnitSystem,
};
