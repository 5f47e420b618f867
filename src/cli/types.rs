//! Type-safe wrappers for player identity and API credentials.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// Maximum length of a Minecraft username.
const MAX_USERNAME_LEN: usize = 16;

/// Type-safe wrapper for a player name as typed by the user.
///
/// Validated on parse: non-empty, at most 16 characters, and limited to the
/// character set Mojang accepts (letters, digits, underscore).
///
/// # Examples
///
/// ```rust
/// use hypixel_stats::Username;
///
/// let name: Username = "Technoblade".parse().unwrap();
/// assert_eq!(name.as_str(), "Technoblade");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Get the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Username {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let valid = !s.is_empty()
            && s.len() <= MAX_USERNAME_LEN
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(StatsError::InvalidUsername { name: s.to_owned() });
        }
        Ok(Self(s.to_owned()))
    }
}

/// Type-safe wrapper for the undashed UUID string Mojang assigns to an
/// account. Treated as opaque; no dashing or version checks are applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerUuid(pub String);

impl PlayerUuid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerUuid {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_owned()))
    }
}

/// Type-safe wrapper for the Hypixel API key.
///
/// Deliberately has no `Display` impl so the key cannot leak into output by
/// accident; use [`ApiKey::as_str`] where the raw value is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ApiKey {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_owned()))
    }
}
