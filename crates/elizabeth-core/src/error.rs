use thiserror::Error;

/// Error type shared across Elizabeth crates.
#[derive(Debug, Error)]
pub enum Error {
    /// No data tables are compiled in for the requested locale.
    #[error("{0} is unsupported")]
    UnsupportedLocale(String),
    /// An option value outside the accepted set.
    #[error("{0}")]
    Unsupported(String),
    /// Input that cannot be processed, such as inverted ranges.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("settings error: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("settings encode error: {0}")]
    SettingsEncode(#[from] toml::ser::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by Elizabeth crates.
pub type Result<T> = std::result::Result<T, Error>;
