use thiserror::Error;

use crate::constants::CANTEEN_NOT_AVAILABLE_MSG;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MenuError {
    #[error("menu table not found (expected '{0}')")]
    TableNotFound(&'static str),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", CANTEEN_NOT_AVAILABLE_MSG)]
    CanteenNotAvailable,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read '{path}': {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
}
