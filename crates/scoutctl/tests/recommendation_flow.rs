//! End-to-end flow tests for the pieces that do not need a live provider:
//! normalize -> enrich, plus config persistence.

use scout_common::response::normalize;
use scoutctl::config::ScoutConfig;
use scoutctl::popular::POPULAR_GAMES;
use scoutctl::recommend::enrich;

#[test]
fn provider_reply_becomes_renderable_games() {
    let raw = r#"Here are my picks:
```json
{
  "games": [
    {"name": "Counter-Strike 2", "description": "Tactical shooting.", "genres": ["First Person Shooter"], "appId": "730"},
    {"name": "Unheard Of Indie Gem", "description": "A quiet little puzzler.", "genres": ["Puzzle", "Indie"]}
  ]
}
```"#;

    let games = enrich(normalize(raw).unwrap());
    assert_eq!(games.len(), 2);

    // Known app id links straight to the store page.
    assert_eq!(games[0].steam_url, "https://store.steampowered.com/app/730/");
    // Unknown app id falls back to a store search.
    assert!(games[1]
        .steam_url
        .starts_with("https://store.steampowered.com/search/?term="));

    // Every game carries a palette image and a request-scoped id.
    for game in &games {
        assert!(game.logo.starts_with("https://"));
        assert!(game.id.starts_with("ai-"));
    }
}

#[test]
fn placeholder_reply_still_renders() {
    let games = enrich(normalize("I'm sorry, I can't help with that.").unwrap());
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Steam Game Recommendation");
    assert!(!games[0].logo.is_empty());
}

#[test]
fn config_round_trips_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = ScoutConfig {
        provider: "gemini".to_string(),
        api_key: Some("k-123".to_string()),
    };
    config.save_to(&path).unwrap();

    let loaded = ScoutConfig::load_from(&path).unwrap();
    assert_eq!(loaded.provider, "gemini");
    assert_eq!(loaded.api_key.as_deref(), Some("k-123"));
}

#[test]
fn popular_list_is_well_formed() {
    assert_eq!(POPULAR_GAMES.len(), 3);
    for game in &POPULAR_GAMES {
        assert!(!game.name.is_empty());
        assert!(!game.genres.is_empty());
        assert!(game.app_id.chars().all(|c| c.is_ascii_digit()));
        assert!(game.rating > 0.0 && game.rating <= 5.0);
    }
}
