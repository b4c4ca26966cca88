pub const BLOOD_GROUPS: &[&str] = &["O+", "A+", "B+", "AB+", "O−", "A−", "B−", "AB−"];

pub const FAVORITE_MUSIC_GENRE: &[&str] = &[
    "Pop",
    "Rock",
    "Hard Rock",
    "Rhythm & Blues (R&B)",
    "Country",
    "Rock & Roll",
    "Soul",
    "Country Pop",
    "Pop Rock",
    "Heavy Metal",
    "Progressive Rock",
    "Alternative Rock",
    "Jazz",
    "New Wave",
    "Synthpop",
    "Hip Hop",
    "Folk",
    "New Age",
    "Blues Rock",
    "Ambient",
    "Ambient house",
    "Classic",
    "Neoclassic",
    "Drum and bass",
];

pub const GENDER_SYMBOLS: &[&str] = &["♂", "♀", "⚲"];

/// ISO/IEC 5218: not known, male, female, not applicable.
pub const GENDER_CODES: &[u8] = &[0, 1, 2, 9];

pub const SEXUALITY_SYMBOLS: &[&str] = &["⚤", "⚢", "⚣", "⚥", "⚧", "⚪"];

pub const ENGLISH_LEVEL: &[&str] = &[
    "Beginner",
    "Elementary",
    "Pre - Intermediate",
    "Intermediate",
    "Upper Intermediate",
    "Advanced",
    "Proficiency",
];

pub const USERNAME_FORMATS: &[&str] = &["{name}{num}", "{name}_{num}", "{name}-{num}"];

pub const SOCIAL_NETWORKS: &[&str] = &[
    "http://facebook.com/{username}",
    "http://twitter.com/{username}",
    "http://medium.com/@{username}",
];

pub const BITCOIN_PREFIXES: &[&str] = &["1", "3"];

pub const PASSWORD_PUNCTUATION: &[char] = &[
    '!', '#', '$', '%', '&', '(', ')', '*', '+', ',', '-', '.', ':', ';', '<', '=', '>', '?', '@',
    '[', ']', '^', '_', '{', '|', '}', '~',
];

pub const AVATAR_URL: &str = "https://api.adorable.io/avatars/{size}/{username}.png";
