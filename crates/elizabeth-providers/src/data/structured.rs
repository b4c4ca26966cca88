/// How a CSS property or HTML attribute value is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Color,
    Size,
    Word,
    Url,
    Css,
    Choice(&'static [&'static str]),
}

pub const CSS_SELECTORS: &[&str] = &[".", "#"];

pub const CSS_SIZE_UNITS: &[&str] = &["px", "em", "rem", "%", "pt", "vh", "vw"];

pub const CSS_PROPERTIES: &[(&str, ValueKind)] = &[
    ("background-color", ValueKind::Color),
    ("color", ValueKind::Color),
    ("border-color", ValueKind::Color),
    (
        "display",
        ValueKind::Choice(&["block", "none", "inline", "inline-block", "flex", "grid"]),
    ),
    ("font-size", ValueKind::Size),
    (
        "font-family",
        ValueKind::Choice(&["Arial", "Georgia", "Helvetica", "monospace", "serif", "sans-serif"]),
    ),
    (
        "font-weight",
        ValueKind::Choice(&["normal", "bold", "bolder", "lighter", "400", "700"]),
    ),
    ("height", ValueKind::Size),
    ("width", ValueKind::Size),
    ("margin", ValueKind::Size),
    ("padding", ValueKind::Size),
    ("line-height", ValueKind::Size),
    (
        "text-align",
        ValueKind::Choice(&["left", "right", "center", "justify"]),
    ),
    (
        "position",
        ValueKind::Choice(&["static", "relative", "absolute", "fixed", "sticky"]),
    ),
    (
        "cursor",
        ValueKind::Choice(&["auto", "default", "pointer", "move", "text", "wait"]),
    ),
];

pub const HTML_MARKUP_TAGS: &[&str] = &["b", "em", "i", "small", "strong", "code"];

pub const HTML_CONTAINER_TAGS: &[(&str, &[(&str, ValueKind)])] = &[
    (
        "a",
        &[
            ("href", ValueKind::Url),
            ("hreflang", ValueKind::Choice(&["en", "de", "ru", "fr", "es"])),
            ("media", ValueKind::Choice(&["all", "print", "screen"])),
            (
                "rel",
                ValueKind::Choice(&[
                    "alternate", "author", "bookmark", "external", "help", "license", "next",
                    "nofollow", "noreferrer", "prev", "search", "tag",
                ]),
            ),
            (
                "target",
                ValueKind::Choice(&["_blank", "_parent", "_self", "_top"]),
            ),
            ("type", ValueKind::Choice(&["text/html", "application/pdf"])),
        ],
    ),
    (
        "div",
        &[
            ("align", ValueKind::Choice(&["left", "right", "justify", "center"])),
            ("class", ValueKind::Word),
            ("id", ValueKind::Word),
            ("style", ValueKind::Css),
        ],
    ),
    (
        "p",
        &[
            ("align", ValueKind::Choice(&["left", "right", "justify", "center"])),
            ("class", ValueKind::Word),
            ("style", ValueKind::Css),
        ],
    ),
    (
        "span",
        &[
            ("class", ValueKind::Word),
            ("id", ValueKind::Word),
            ("style", ValueKind::Css),
        ],
    ),
];
