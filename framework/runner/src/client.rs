use reqwest::{Client, StatusCode};
use slipstream_core::prelude::{HomeScreen, MediaSet};

/// The endpoint serving the home screen document.
pub const HOME_ENDPOINT: &str = "https://api.dev.rallyrd.com/api/client-screens/home";

/// A transport or status failure while fetching the home screen payload.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("home request failed with status {status}")]
    Status { status: StatusCode },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Fetch and decode the home screen document.
///
/// Any non-2xx status is a hard failure for the whole run; no trials are
/// measured without a payload.
pub async fn fetch_home(client: &Client, endpoint: &str) -> Result<HomeScreen, TransportError> {
    let response = client.get(endpoint).send().await?;
    if !response.status().is_success() {
        return Err(TransportError::Status {
            status: response.status(),
        });
    }

    Ok(response.json().await?)
}

/// Download every URL in the set once, all requests launched eagerly, and
/// return once they have all settled.
///
/// Individual failures do not abort the batch and are not inspected beyond
/// being counted, and response bodies are never read. Only completion
/// matters for the timing. Returns how many requests failed.
pub async fn fetch_all_media(client: &Client, media: &MediaSet) -> usize {
    let requests = media.iter().map(|url| client.get(url).send());

    futures::future::join_all(requests)
        .await
        .iter()
        .filter(|outcome| outcome.is_err())
        .count()
}
