//! HTTP calls against the Mojang profile and session-server APIs.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::cli::types::{PlayerUuid, Username};
use crate::mojang::types::{MinecraftProfile, PlayerIdentity, SkinData};
use crate::{Result, StatsError};

/// Base path for the Mojang profile API.
pub const PROFILE_BASE_URL: &str = "https://api.mojang.com";

/// Base path for the Mojang session server (textures).
pub const SESSION_BASE_URL: &str = "https://sessionserver.mojang.com";

/// Mojang calls are bounded at 10 seconds.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a client with the Mojang request timeout applied.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Resolve a player name to its UUID.
///
/// The endpoint answers an unknown name with an empty 204 (older API
/// revisions) or a 404; both map to [`StatsError::PlayerNotFound`].
pub async fn resolve_uuid(client: &Client, name: &Username) -> Result<PlayerIdentity> {
    let url = format!("{PROFILE_BASE_URL}/users/profiles/minecraft/{name}");
    debug!(%name, "resolving player UUID");

    let response = client.get(&url).send().await?;
    if matches!(
        response.status(),
        StatusCode::NO_CONTENT | StatusCode::NOT_FOUND
    ) {
        return Err(StatsError::PlayerNotFound {
            name: name.to_string(),
        });
    }

    let identity: PlayerIdentity = response.error_for_status()?.json().await?;
    Ok(identity)
}

/// Fetch the session-server profile for a UUID.
pub async fn get_profile(client: &Client, uuid: &PlayerUuid) -> Result<MinecraftProfile> {
    let url = format!("{SESSION_BASE_URL}/session/minecraft/profile/{uuid}");
    debug!(%uuid, "fetching session profile");

    let profile = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<MinecraftProfile>()
        .await?;

    Ok(profile)
}

/// Fetch and decode a player's skin/cape URLs.
///
/// Texture lookup is cosmetic, so this never fails the caller: any error in
/// the HTTP call or the decode pipeline is logged and degrades to an empty
/// [`SkinData`].
pub async fn fetch_skin(client: &Client, uuid: &PlayerUuid) -> SkinData {
    match try_fetch_skin(client, uuid).await {
        Ok(skin) => skin,
        Err(e) => {
            warn!(%uuid, error = %e, "skin lookup failed, continuing without textures");
            SkinData::default()
        }
    }
}

async fn try_fetch_skin(client: &Client, uuid: &PlayerUuid) -> Result<SkinData> {
    let profile = get_profile(client, uuid).await?;
    SkinData::from_profile(&profile)
}
