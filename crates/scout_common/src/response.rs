//! Provider response normalization.
//!
//! LLM output format compliance is unreliable: the same prompt can come
//! back as clean JSON, JSON inside a markdown fence, JSON buried in prose,
//! or a plain numbered list. Parsing runs through recovery tiers from
//! strict to heuristic, first non-empty result wins. Each tier either
//! fully succeeds or fully falls through - no partial commits, no
//! throw/catch branching.
//!
//! Robust handling of common LLM output variations:
//! - missing "description" / "genres" fields
//! - "appId" as string or number
//! - prose or markdown fences around the JSON body
//! - no JSON at all (numbered/bulleted list reconstruction)

use crate::types::GameCandidate;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Hard cap on returned recommendations, preserving provider order.
pub const MAX_RESULTS: usize = 3;

/// Free-form lines shorter than this never become a description.
const MIN_PROSE_DESCRIPTION_CHARS: usize = 20;

const FALLBACK_NAME: &str = "Steam Game Recommendation";
const FALLBACK_DESCRIPTION: &str =
    "Unable to parse specific game recommendations from AI response. Please try rephrasing your query.";
const FALLBACK_GENRE: &str = "Adventure";

/// Normalization failure.
///
/// In practice unreachable - the heuristic tier always yields at least a
/// placeholder candidate - but callers are expected to handle it anyway.
#[derive(Debug, Clone, Error)]
pub enum NormalizeError {
    #[error("provider response could not be parsed into any recommendation")]
    MalformedResponse,
}

/// Which recovery tier produced the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTier {
    StrictJson,
    FencedBlock,
    BraceScan,
    Heuristic,
}

/// Normalize raw provider text into at most [`MAX_RESULTS`] candidates.
pub fn normalize(raw: &str) -> Result<Vec<GameCandidate>, NormalizeError> {
    normalize_with_tier(raw).map(|(games, _)| games)
}

/// Like [`normalize`], but also reports which tier succeeded.
pub fn normalize_with_tier(raw: &str) -> Result<(Vec<GameCandidate>, ParseTier), NormalizeError> {
    let (mut games, tier) = if let Some(games) = parse_strict(raw) {
        (games, ParseTier::StrictJson)
    } else if let Some(games) = parse_fenced_block(raw) {
        (games, ParseTier::FencedBlock)
    } else if let Some(games) = parse_brace_scan(raw) {
        (games, ParseTier::BraceScan)
    } else {
        let games = parse_heuristic(raw);
        if games.is_empty() {
            // parse_heuristic synthesizes a placeholder, so this branch is
            // dead in the current implementation. Kept representable for
            // defensive callers.
            return Err(NormalizeError::MalformedResponse);
        }
        warn!("provider response was not JSON, reconstructed {} candidate(s) from lines", games.len());
        (games, ParseTier::Heuristic)
    };

    if games.len() > MAX_RESULTS {
        debug!("truncating {} candidates to {}", games.len(), MAX_RESULTS);
        games.truncate(MAX_RESULTS);
    }

    info!("parsed provider response via {:?} tier ({} candidates)", tier, games.len());
    Ok((games, tier))
}

/// Tier 1: the whole text is a JSON document with a "games" array.
fn parse_strict(text: &str) -> Option<Vec<GameCandidate>> {
    let value: Value = serde_json::from_str(text).ok()?;
    games_from_value(&value)
}

/// Tier 2: JSON inside a markdown fence, optionally tagged `json`.
fn parse_fenced_block(text: &str) -> Option<Vec<GameCandidate>> {
    let start = text.find("```")?;
    let rest = &text[start + 3..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let end = rest.find("```")?;
    let block = brace_slice(&rest[..end])?;
    debug!("strict parse failed, retrying on fenced block ({} chars)", block.len());
    parse_strict(block)
}

/// Tier 3: first `{` to last `}` of the whole text, tolerating prose
/// around an otherwise well-formed object.
fn parse_brace_scan(text: &str) -> Option<Vec<GameCandidate>> {
    let slice = brace_slice(text)?;
    debug!("fenced-block recovery failed, retrying on brace slice ({} chars)", slice.len());
    parse_strict(slice)
}

fn brace_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Extract candidates from a parsed JSON value. Falls through (None) when
/// there is no "games" array or no element survives validation.
fn games_from_value(value: &Value) -> Option<Vec<GameCandidate>> {
    let games: Vec<GameCandidate> = value
        .get("games")?
        .as_array()?
        .iter()
        .filter_map(candidate_from_value)
        .collect();
    if games.is_empty() {
        None
    } else {
        Some(games)
    }
}

/// Convert one JSON element with null/missing field handling. Elements
/// without a usable name are dropped; everything else degrades to empty.
fn candidate_from_value(v: &Value) -> Option<GameCandidate> {
    let name = v
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    let description = v
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();

    let genres = v
        .get("genres")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    // Models return the app id as "appId", sometimes as a bare number.
    let app_id = v.get("appId").or_else(|| v.get("app_id")).and_then(|id| match id {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });

    Some(GameCandidate {
        name: name.to_string(),
        description,
        genres,
        app_id,
    })
}

/// Tier 4: line-based reconstruction of list-shaped prose. Never fails -
/// zero recovered candidates yields a fixed placeholder instead.
fn parse_heuristic(text: &str) -> Vec<GameCandidate> {
    let mut games = Vec::new();
    let mut current: Option<GameCandidate> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_ascii_lowercase();

        if let Some(name) = match_name_marker(line, &lower) {
            if let Some(game) = current.take() {
                games.push(game);
            }
            current = Some(GameCandidate::new(name));
        } else if let Some(game) = current.as_mut() {
            if let Some(rest) = label_suffix(line, &lower, &["description:", "about:"]) {
                // A labeled description always assigns; a later label
                // overwrites an earlier one.
                game.description = rest.trim().to_string();
            } else if let Some(rest) = genre_suffix(line, &lower) {
                game.genres = rest
                    .split([',', ';'])
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            } else if game.description.is_empty()
                && line.chars().count() > MIN_PROSE_DESCRIPTION_CHARS
            {
                // Unlabeled prose only fills an empty description.
                game.description = line.to_string();
            }
        }
    }

    if let Some(game) = current.take() {
        games.push(game);
    }

    if games.is_empty() {
        games.push(GameCandidate {
            name: FALLBACK_NAME.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            genres: vec![FALLBACK_GENRE.to_string()],
            app_id: None,
        });
    }

    games
}

/// A line starts a new candidate when it carries an ordinal marker
/// ("1. "), a bullet marker ("* " / "- "), or a "Game:"/"Title:" label
/// anywhere in the line (case-insensitive). Returns the stripped name.
fn match_name_marker(line: &str, lower: &str) -> Option<String> {
    if let Some(rest) = strip_ordinal(line) {
        return Some(rest.trim().to_string());
    }
    if let Some(rest) = strip_bullet(line) {
        return Some(rest.trim().to_string());
    }
    for label in ["game:", "title:"] {
        if let Some(pos) = lower.find(label) {
            let mut name = String::new();
            name.push_str(&line[..pos]);
            name.push_str(line[pos + label.len()..].trim_start());
            return Some(name.trim().to_string());
        }
    }
    None
}

/// `digits '.'? whitespace` prefix.
fn strip_ordinal(line: &str) -> Option<&str> {
    let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == line.len() {
        return None;
    }
    let rest = after_digits.strip_prefix('.').unwrap_or(after_digits);
    let trimmed = rest.trim_start();
    // The marker must be followed by whitespace ("1.Hades" is a name, not
    // an ordinal).
    if trimmed.len() == rest.len() {
        return None;
    }
    Some(trimmed)
}

/// `'*' | '-'` followed by whitespace.
fn strip_bullet(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(['*', '-'])?;
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }
    Some(trimmed)
}

/// Text after the first matching label (labels are ASCII, so byte
/// positions in the lowercased copy are valid in the original).
fn label_suffix<'a>(line: &'a str, lower: &str, labels: &[&str]) -> Option<&'a str> {
    for label in labels {
        if let Some(pos) = lower.find(label) {
            return Some(&line[pos + label.len()..]);
        }
    }
    None
}

/// Remainder after a "Genre"/"Tag" label, skipping the optional plural `s`
/// and colon ("Genres: RPG, Action" -> " RPG, Action").
fn genre_suffix<'a>(line: &'a str, lower: &str) -> Option<&'a str> {
    let (pos, len) = ["genre", "tag"]
        .iter()
        .find_map(|label| lower.find(label).map(|p| (p, label.len())))?;
    let mut rest = &line[pos + len..];
    if let Some(r) = rest.strip_prefix(['s', 'S']) {
        rest = r;
    }
    if let Some(r) = rest.strip_prefix(':') {
        rest = r;
    }
    Some(rest)
}
