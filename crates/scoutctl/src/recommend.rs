//! Candidate enrichment.
//!
//! The normalizer hands back bare candidates; here they become
//! presentation-ready `Game` records with a per-request id, stable
//! placeholder artwork and a Steam store URL.

use scout_common::artwork::art_for;
use scout_common::types::{Game, GameCandidate};

const STORE_APP_URL: &str = "https://store.steampowered.com/app";
const STORE_SEARCH_URL: &str = "https://store.steampowered.com/search/?term=";

/// Enrich candidates into presentation records, preserving order.
pub fn enrich(candidates: Vec<GameCandidate>) -> Vec<Game> {
    let stamp = chrono::Utc::now().timestamp_millis();
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let steam_url = steam_url(&candidate);
            let logo = art_for(&candidate.name).to_string();
            Game {
                id: format!("ai-{}-{}", stamp, index),
                name: candidate.name,
                description: candidate.description,
                genres: candidate.genres,
                logo,
                steam_url,
            }
        })
        .collect()
}

/// Direct store page when the model gave an app id, store search otherwise.
fn steam_url(candidate: &GameCandidate) -> String {
    match &candidate.app_id {
        Some(app_id) => format!("{}/{}/", STORE_APP_URL, app_id),
        None => format!("{}{}", STORE_SEARCH_URL, urlencoding::encode(&candidate.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, app_id: Option<&str>) -> GameCandidate {
        GameCandidate {
            name: name.to_string(),
            description: String::new(),
            genres: Vec::new(),
            app_id: app_id.map(String::from),
        }
    }

    #[test]
    fn app_id_builds_direct_store_url() {
        let games = enrich(vec![candidate("Counter-Strike 2", Some("730"))]);
        assert_eq!(games[0].steam_url, "https://store.steampowered.com/app/730/");
    }

    #[test]
    fn missing_app_id_builds_encoded_search_url() {
        let games = enrich(vec![candidate("Baldur's Gate 3", None)]);
        assert_eq!(
            games[0].steam_url,
            "https://store.steampowered.com/search/?term=Baldur%27s%20Gate%203"
        );
    }

    #[test]
    fn ids_are_unique_within_a_request() {
        let games = enrich(vec![candidate("A", None), candidate("B", None)]);
        assert_ne!(games[0].id, games[1].id);
        assert!(games[0].id.starts_with("ai-"));
    }

    #[test]
    fn logo_is_stable_for_the_same_name() {
        let first = enrich(vec![candidate("Hades", None)]);
        let second = enrich(vec![candidate("Hades", None)]);
        assert_eq!(first[0].logo, second[0].logo);
    }
}
