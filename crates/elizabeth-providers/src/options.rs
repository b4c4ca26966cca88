//! Typed option values accepted by provider methods.
//!
//! Each option parses from the string spelling callers used to pass around,
//! and unknown spellings are reported as [`Error::Unsupported`].

use std::fmt;
use std::str::FromStr;

use elizabeth_core::Error;
use tracing::debug;

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Comma separated list of accepted spellings.
            pub fn spellings() -> String {
                Self::ALL
                    .iter()
                    .map(|option| option.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

fn unsupported(kind: &str, value: &str, message: String) -> Error {
    debug!(option = kind, value = value, "rejected option value");
    Error::Unsupported(message)
}

option_enum! {
    Gender {
        #[default]
        Female => "female",
        Male => "male",
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "gender",
                value,
                format!("Unsupported gender. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    /// Kind of personal title.
    TitleType {
        #[default]
        Typical => "typical",
        Academic => "academic",
    }
}

impl FromStr for TitleType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "title_type",
                value,
                format!("Unsupported title type. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    LetterCase {
        #[default]
        Uppercase => "uppercase",
        Lowercase => "lowercase",
    }
}

impl FromStr for LetterCase {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "letter_case",
                value,
                format!("Unsupported letter case. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    IsbnFormat {
        #[default]
        Isbn10 => "isbn-10",
        Isbn13 => "isbn-13",
    }
}

impl FromStr for IsbnFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "isbn_format",
                value,
                format!("Unsupported format. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    EanFormat {
        Ean8 => "ean-8",
        #[default]
        Ean13 => "ean-13",
    }
}

impl FromStr for EanFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "ean_format",
                value,
                format!("Unsupported format. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    /// ISO 3166-1 country code flavour.
    CountryCodeFormat {
        #[default]
        Iso2 => "iso2",
        Iso3 => "iso3",
        Numeric => "numeric",
    }
}

impl FromStr for CountryCodeFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "country_code_format",
                value,
                format!("Unsupported format. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    FileType {
        Source => "source",
        #[default]
        Text => "text",
        Data => "data",
        Audio => "audio",
        Video => "video",
        Image => "image",
        Executable => "executable",
        Compressed => "compressed",
    }
}

impl FromStr for FileType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "file_type",
                value,
                format!("Unsupported file type. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    /// Top-level media type of a MIME type.
    MimeCategory {
        #[default]
        Application => "application",
        Audio => "audio",
        Image => "image",
        Message => "message",
        Text => "text",
        Video => "video",
    }
}

impl FromStr for MimeCategory {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
            .ok_or_else(|| unsupported("mime_type", value, "Unsupported mime type!".to_string()))
    }
}

option_enum! {
    /// Payment card network.
    CardType {
        #[default]
        Visa => "visa",
        MasterCard => "master_card",
        AmericanExpress => "american_express",
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let card = match value {
            "v" => Some(CardType::Visa),
            "m" => Some(CardType::MasterCard),
            "a" => Some(CardType::AmericanExpress),
            other => Self::parse(other),
        };
        card.ok_or_else(|| {
            unsupported(
                "card_type",
                value,
                format!("Unsupported card type. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    /// Sign of an SI prefix exponent.
    Sign {
        #[default]
        Positive => "positive",
        Negative => "negative",
    }
}

impl FromStr for Sign {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "sign",
                value,
                "Unsupported sign. Use: 'positive' or 'negative'".to_string(),
            )
        })
    }
}

option_enum! {
    HashtagCategory {
        #[default]
        General => "general",
        Girls => "girls",
        Boys => "boys",
        Love => "love",
        Friends => "friends",
        Family => "family",
        Nature => "nature",
        Travel => "travel",
        Cars => "cars",
        Sport => "sport",
        Tumblr => "tumblr",
    }
}

impl FromStr for HashtagCategory {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "hashtag_category",
                value,
                format!("Unsupported category. Use: {}", Self::spellings()),
            )
        })
    }
}

option_enum! {
    HashAlgorithm {
        #[default]
        Sha256 => "sha256",
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            unsupported(
                "hash_algorithm",
                value,
                format!("Unsupported algorithm. Use: {}", Self::spellings()),
            )
        })
    }
}
