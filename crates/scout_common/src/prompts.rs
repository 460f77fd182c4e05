//! Prompt building for the recommendation call.
//!
//! Pure functions of their arguments: the query and the selected genre
//! filter travel as explicit parameters, never as ambient state.

use crate::genres::GENRES;

/// Build the recommendation prompt for a user query, optionally
/// constrained to the given genres.
pub fn build_search_prompt(query: &str, selected_genres: &[String]) -> String {
    let genre_filter = if selected_genres.is_empty() {
        String::new()
    } else {
        format!(
            " The games must include at least one of these genres: {}.",
            selected_genres.join(", ")
        )
    };

    format!(
        r#"You are a Steam game recommendation expert. Based on the user's query: "{query}"{genre_filter}

Please recommend exactly 3 Steam games that match this request. For each game, provide:
1. The exact game name as it appears on Steam
2. A 2-3 sentence description explaining why it fits the request
3. The main genres from this list: {genre_list}
4. The Steam App ID if you know it (the number in the Steam URL)

Respond in this exact JSON format:
{{
  "games": [
    {{
      "name": "Game Name",
      "description": "2-3 sentence description",
      "genres": ["Genre1", "Genre2"],
      "appId": "123456"
    }}
  ]
}}

Only recommend real games that exist on Steam. If you know the Steam App ID, include it. Make sure the descriptions are engaging and explain why each game fits the user's request."#,
        genre_list = GENRES.join(", "),
    )
}
