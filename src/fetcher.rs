use std::time::{Duration, Instant};

use crate::canteens::get_canteen;
use crate::data_backend::parse_menu;
use crate::data_types::menu_data_types::ParseResult;
use crate::data_types::{CanteenItem, ParseOptions};
use crate::errors::FetchError;

use chrono::Local;

/// Fetches and parses the current plan of a registered canteen.
pub async fn pull(canteen_key: &str, timeout: Duration) -> Result<ParseResult, FetchError> {
    let canteen = get_canteen(canteen_key).ok_or(FetchError::CanteenNotAvailable)?;
    pull_canteen(canteen, timeout).await
}

pub async fn pull_canteen(
    canteen: &CanteenItem,
    timeout: Duration,
) -> Result<ParseResult, FetchError> {
    let body = fetch_body(&canteen.url, timeout).await?;
    let options = ParseOptions::for_variant(canteen.parser, Local::now().date_naive());

    Ok(parse_menu(canteen, &body, &options))
}

/// Reads `source` from disk if such a file exists, otherwise requests it.
async fn fetch_body(source: &str, timeout: Duration) -> Result<String, FetchError> {
    let now = Instant::now();

    if tokio::fs::metadata(source).await.is_ok() {
        let body = tokio::fs::read_to_string(source)
            .await
            .map_err(|source_err| FetchError::File {
                path: source.to_string(),
                source: source_err,
            })?;
        log::debug!("read {}: {:.2?}", source, now.elapsed());
        return Ok(body);
    }

    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let body = client
        .get(source)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    log::debug!("GET {}: {:.2?}", source, now.elapsed());

    Ok(body)
}
