/// Windows language code identifiers (MS-LCID).
pub const LOCALE_CODES: &[&str] = &[
    "af", "am", "ar-ae", "ar-bh", "ar-dz", "ar-eg", "ar-iq", "ar-jo", "ar-kw", "ar-lb", "ar-ly",
    "ar-ma", "ar-om", "ar-qa", "ar-sa", "ar-sy", "ar-tn", "ar-ye", "as", "az-az", "be", "bg",
    "bn", "bo", "bs", "ca", "cs", "cy", "da", "de-at", "de-ch", "de-de", "de-li", "de-lu",
    "dv", "el", "en-au", "en-bz", "en-ca", "en-cb", "en-gb", "en-ie", "en-in", "en-jm",
    "en-nz", "en-ph", "en-tt", "en-us", "en-za", "es-ar", "es-bo", "es-cl", "es-co", "es-cr",
    "es-do", "es-ec", "es-es", "es-gt", "es-hn", "es-mx", "es-ni", "es-pa", "es-pe", "es-pr",
    "es-py", "es-sv", "es-uy", "es-ve", "et", "eu", "fa", "fi", "fo", "fr-be", "fr-ca",
    "fr-ch", "fr-fr", "fr-lu", "ga", "gd", "gd-ie", "gl", "gn", "gu", "he", "hi", "hr", "hu",
    "hy", "id", "is", "it-ch", "it-it", "ja", "kk", "km", "kn", "ko", "ks", "la", "lo", "lt",
    "lv", "mi", "mk", "ml", "mn", "mr", "ms-bn", "ms-my", "mt", "my", "nb", "ne", "nl-be",
    "nl-nl", "no", "or", "pa", "pl", "pt-br", "pt-pt", "rm", "ro", "ro-mo", "ru", "ru-mo",
    "sa", "sb", "sd", "si", "sk", "sl", "so", "sq", "sr-sp", "sv-fi", "sv-se", "sw", "ta",
    "te", "tg", "th", "tk", "tn", "tr", "ts", "tt", "uk", "ur", "uz-uz", "vi", "xh", "yi",
    "zh-cn", "zh-hk", "zh-mo", "zh-sg", "zh-tw", "zu",
];

/// ISBN registration group used when a locale has no entry of its own.
pub const DEFAULT_ISBN_GROUP: &str = "#";

/// ISBN registration groups by locale code.
pub const ISBN_GROUPS: &[(&str, &str)] = &[
    ("en", "0"),
    ("de", "3"),
    ("ru", "5"),
    ("fr", "2"),
    ("ja", "4"),
    ("zh", "7"),
    ("es", "84"),
    ("it", "88"),
    ("pt", "85"),
    ("nl", "90"),
    ("pl", "83"),
    ("sv", "91"),
];

/// Type Allocation Codes used as IMEI prefixes.
pub const IMEI_TACS: &[&str] = &[
    "01124500", "01161200", "01194800", "01233600", "01300600", "01332700", "35089080",
    "35209900", "35274901", "35316004", "35332403", "35391805", "35407115", "35480910",
    "35685702", "35693803", "35694603", "35699601", "35714904", "35733201", "35744005",
    "35925406", "35976301", "45001000", "49015420", "86891503", "86920002", "99000432",
];
