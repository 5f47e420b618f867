//! Skin command implementation.

use crate::cli::types::Username;
use crate::mojang::{self, http::fetch_skin, http::resolve_uuid};
use crate::Result;

/// Handle the skin command: resolve the name and print texture URLs.
pub async fn handle_skin(name: Username, as_json: bool) -> Result<()> {
    let client = mojang::http::build_client()?;

    let identity = resolve_uuid(&client, &name).await?;
    let skin = fetch_skin(&client, &identity.id).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&skin)?);
        return Ok(());
    }

    println!("Player: {} ({})", identity.name, identity.id);
    match &skin.skin {
        Some(url) => println!("Skin:   {url}"),
        None => println!("Skin:   none"),
    }
    match &skin.cape {
        Some(url) => println!("Cape:   {url}"),
        None => println!("Cape:   none"),
    }

    Ok(())
}
