//! Command implementations for the Hypixel Player Stats CLI

pub mod common;
pub mod player;
pub mod skin;

pub use common::resolve_api_key;
