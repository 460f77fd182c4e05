//! Command handlers for the scoutctl CLI.

use anyhow::{bail, Context, Result};
use scout_common::genres::{is_known_genre, GENRES};
use scout_common::prompts::build_search_prompt;
use scout_common::response::normalize_with_tier;
use tracing::{debug, warn};

use crate::config::{config_path, ScoutConfig};
use crate::display;
use crate::popular::POPULAR_GAMES;
use crate::providers::{Provider, ProviderClient};
use crate::recommend::enrich;

/// `scoutctl search <query> [--genre ...] [--provider ...]`
pub async fn search(query: String, genres: Vec<String>, provider: Option<String>) -> Result<()> {
    let config = ScoutConfig::load()?;

    let provider: Provider = provider
        .as_deref()
        .unwrap_or(&config.provider)
        .parse()
        .context("invalid provider selection")?;

    let api_key = config.api_key.clone().context(
        "no API key configured - run `scoutctl config --set-key <KEY>` \
         or set STEAMSCOUT_API_KEY",
    )?;

    for genre in &genres {
        if !is_known_genre(genre) {
            warn!("'{}' is not in the genre vocabulary (see `scoutctl genres`); passing it through anyway", genre);
        }
    }

    let prompt = build_search_prompt(&query, &genres);
    debug!("built prompt ({} chars) for provider {}", prompt.len(), provider);

    let client = ProviderClient::new(provider, api_key);
    let raw = client
        .complete(&prompt)
        .await
        .with_context(|| format!("{} call failed", provider))?;

    let (candidates, tier) = normalize_with_tier(&raw)
        .context("AI response could not be parsed. Please try again.")?;
    debug!("normalized {} candidate(s) via {:?} tier", candidates.len(), tier);

    let games = enrich(candidates);
    display::print_results(&games);
    Ok(())
}

/// `scoutctl popular`
pub fn popular() -> Result<()> {
    display::print_popular(&POPULAR_GAMES);
    Ok(())
}

/// `scoutctl genres`
pub fn genres() -> Result<()> {
    display::print_genres(&GENRES);
    Ok(())
}

/// `scoutctl config [--set-key <KEY>] [--provider <NAME>]`
///
/// With no flags, prints the current configuration (key redacted).
pub fn config(set_key: Option<String>, provider: Option<String>) -> Result<()> {
    let mut config = ScoutConfig::load()?;

    if set_key.is_none() && provider.is_none() {
        let path = config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        println!("config file: {}", path);
        println!("provider:    {}", config.provider);
        println!(
            "api_key:     {}",
            if config.api_key.is_some() { "(set)" } else { "(not set)" }
        );
        return Ok(());
    }

    if let Some(name) = provider {
        // Validate before persisting.
        let parsed: Provider = name.parse()?;
        config.provider = parsed.as_str().to_string();
    }

    if let Some(key) = set_key {
        let key = key.trim().to_string();
        if key.is_empty() {
            bail!("API key must not be empty");
        }
        config.api_key = Some(key);
    }

    config.save()?;
    println!("configuration saved");
    Ok(())
}
