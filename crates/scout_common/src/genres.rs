//! Canonical genre vocabulary.
//!
//! Used for prompt construction and CLI help only. The normalizer accepts
//! genre strings outside this list without complaint - the model is free to
//! improvise and we keep whatever it said.

/// The fixed genre vocabulary, in prompt order.
pub const GENRES: [&str; 21] = [
    "First Person Shooter",
    "Platformer",
    "RPG",
    "Adventure",
    "Sandbox",
    "Horror",
    "Psychological Horror",
    "Relaxing",
    "Online",
    "Story-Based",
    "Puzzle",
    "Strategy",
    "Fighting",
    "Metroidvania",
    "Fast-Paced",
    "Open World",
    "Exploration",
    "Survival",
    "Single-Player",
    "Multiplayer",
    "Indie",
];

/// Case-insensitive membership check, used by the CLI to warn about filter
/// typos (a warning only - unknown genres still go into the prompt).
pub fn is_known_genre(label: &str) -> bool {
    GENRES.iter().any(|g| g.eq_ignore_ascii_case(label))
}
