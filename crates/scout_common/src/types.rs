//! Game record types shared between the normalizer and the CLI.

use serde::{Deserialize, Serialize};

/// One recommendation recovered from provider output.
///
/// Invariant: `name` is non-empty after trimming. Fields the provider left
/// out default to empty string / empty vec, never to null - downstream code
/// renders these without any option-dance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCandidate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Steam application id when the model supplied one ("730" for CS2).
    #[serde(default)]
    pub app_id: Option<String>,
}

impl GameCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            genres: Vec::new(),
            app_id: None,
        }
    }
}

/// A candidate enriched for presentation: stable artwork, store URL, and a
/// per-request id. Built by the calling layer, never by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub description: String,
    pub genres: Vec<String>,
    pub logo: String,
    pub steam_url: String,
}
