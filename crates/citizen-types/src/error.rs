//! Error types for the Citizen skin crates.

/// Errors produced while assembling skin data.
#[derive(Debug, thiserror::Error)]
pub enum CitizenError {
    #[error("template error: {0}")]
    Template(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("partial error: {0}")]
    Partial(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CitizenError>;
