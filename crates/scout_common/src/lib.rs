//! Scout Common - Shared types and parsing for SteamScout
//!
//! Holds everything the CLI and any future frontend share: the game record
//! types, the LLM response normalizer, the placeholder artwork index, the
//! genre vocabulary and the prompt builders. No I/O lives here; every
//! function is a pure computation over its inputs.

pub mod artwork;
pub mod genres;
pub mod prompts;
pub mod response;
pub mod types;

pub use artwork::{art_for, art_index, PLACEHOLDER_ART};
pub use genres::GENRES;
pub use response::{normalize, NormalizeError, ParseTier, MAX_RESULTS};
pub use types::{Game, GameCandidate};
