pub const MATH_FORMULAS: &[&str] = &[
    "A = (ab)/2",
    "A = a2",
    "A = ab",
    "A = (h(a + b))/2",
    "A = πr2",
    "A = 4πr2",
    "P = 2(l + w)",
    "C = 2πr",
    "V = lwh",
    "V = (4/3)πr3",
    "V = πr2h",
    "V = (1/3)πr2h",
    "a2 + b2 = c2",
    "E = mc2",
    "F = ma",
    "x = (-b ± √(b2 - 4ac))/2a",
];

pub const SI_PREFIXES_POSITIVE: &[&str] = &[
    "yotta", "exa", "zetta", "peta", "tera", "giga", "mega", "kilo", "hecto", "deca",
];
pub const SI_PREFIXES_NEGATIVE: &[&str] = &[
    "deci", "centi", "milli", "micro", "nano", "pico", "femto", "atto", "zepto", "yocto",
];
pub const SI_SYMBOLS_POSITIVE: &[&str] = &["Y", "Z", "E", "P", "T", "G", "M", "k", "h", "da"];
pub const SI_SYMBOLS_NEGATIVE: &[&str] = &["d", "c", "m", "μ", "n", "p", "f", "a", "z", "y"];
