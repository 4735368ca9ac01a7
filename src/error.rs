use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Co2Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown transport mode: {0}")]
    UnknownMode(String),

    #[error("No emission rate configured for transport mode: {0}")]
    MissingRate(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl Co2Error {
    /// Hint for the user on how to recover, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `co2-calc init` to create a fresh one")
            }
            Self::UnknownMode(_) => Some("Valid transport modes are: car, plane, train, bus"),
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Co2Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
