use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Authoring defects in a feature list. These never occur at render time;
/// the host checks the list once before serving it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("Feature #{index} has empty text")]
    EmptyText { index: usize },

    #[error("Feature text {0:?} appears more than once")]
    DuplicateText(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
