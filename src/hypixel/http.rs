//! HTTP calls against the Hypixel API.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::cli::types::{ApiKey, PlayerUuid};
use crate::hypixel::types::PlayerResponse;
use crate::Result;

/// Base path for the Hypixel API.
pub const API_BASE_URL: &str = "https://api.hypixel.net";

/// Hypixel calls are bounded at 15 seconds.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Build a client with the Hypixel request timeout applied.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Fetch the raw player payload for a UUID.
///
/// The body is decoded regardless of HTTP status: the API reports failures
/// (bad key, throttling) in-band as `{"success": false, "cause": ...}`, and
/// that cause is the error the caller should see.
pub async fn get_player(client: &Client, api_key: &ApiKey, uuid: &PlayerUuid) -> Result<Value> {
    let url = format!("{API_BASE_URL}/player");
    let params = [("key", api_key.as_str()), ("uuid", uuid.as_str())];
    debug!(%uuid, "fetching Hypixel player payload");

    let response = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .json::<PlayerResponse>()
        .await?;

    response.into_player()
}
