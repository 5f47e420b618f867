//! Mojang API integration: name-to-UUID resolution and texture lookup.

pub mod http;
pub mod types;

pub use http::{fetch_skin, resolve_uuid};
pub use types::{PlayerIdentity, SkinData};
