//! Mojang API response types and texture decoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::cli::types::PlayerUuid;
use crate::Result;


/// Identity returned by the Mojang name lookup endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerIdentity {
    /// Player UUID (without hyphens)
    pub id: PlayerUuid,
    /// Canonical spelling of the player name
    pub name: String,
}

/// Profile as returned by the Mojang session server.
#[derive(Debug, Clone, Deserialize)]
pub struct MinecraftProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

/// A profile property; the one named "textures" carries a base64 JSON blob.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
}

/// Decoded payload of the "textures" property.
#[derive(Debug, Clone, Deserialize)]
pub struct TexturesValue {
    #[serde(default)]
    pub textures: TexturesMap,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TexturesMap {
    #[serde(rename = "SKIN")]
    pub skin: Option<TextureInfo>,
    #[serde(rename = "CAPE")]
    pub cape: Option<TextureInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextureInfo {
    pub url: String,
}

/// Skin and cape image URLs for a player. Both fields are `None` when the
/// profile carries no textures or the lookup failed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkinData {
    pub skin: Option<String>,
    pub cape: Option<String>,
}

impl SkinData {
    /// Extract texture URLs from a session-server profile.
    ///
    /// Scans the property list for the "textures" entry and decodes its
    /// base64 JSON value. A profile without that property yields an empty
    /// `SkinData`; a malformed value is an error (callers that must not
    /// fail go through [`crate::mojang::http::fetch_skin`]).
    pub fn from_profile(profile: &MinecraftProfile) -> Result<Self> {
        for property in &profile.properties {
            if property.name == "textures" {
                let decoded = STANDARD.decode(&property.value)?;
                let parsed: TexturesValue = serde_json::from_slice(&decoded)?;
                return Ok(Self {
                    skin: parsed.textures.skin.map(|t| t.url),
                    cape: parsed.textures.cape.map(|t| t.url),
                });
            }
        }
        Ok(Self::default())
    }
}
