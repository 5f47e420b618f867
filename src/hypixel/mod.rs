//! Hypixel API integration: player payload retrieval and the pure
//! transformation into a display-ready record.

pub mod http;
pub mod transform;
pub mod types;

pub use http::get_player;
pub use transform::transform;
pub use types::PlayerRecord;
