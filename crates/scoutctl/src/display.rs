//! Terminal rendering for search results and the showcase list.

use owo_colors::OwoColorize;
use scout_common::types::Game;

use crate::popular::PopularGame;

const HR: &str = "────────────────────────────────────────────────────────────";

/// Print enriched search results.
pub fn print_results(games: &[Game]) {
    if games.is_empty() {
        println!("{}", "No recommendations found.".dimmed());
        return;
    }

    println!();
    for (index, game) in games.iter().enumerate() {
        println!("{} {}", format!("{}.", index + 1).bold(), game.name.cyan().bold());
        if !game.description.is_empty() {
            println!("   {}", game.description);
        }
        if !game.genres.is_empty() {
            println!("   {}", format_genre_tags(&game.genres).dimmed());
        }
        println!("   {}", game.steam_url.underline());
        println!();
    }
}

/// Print the curated popular list with its extra stats.
pub fn print_popular(games: &[PopularGame]) {
    println!("\n{}", "Popular on Steam".bold());
    println!("{}", HR.dimmed());
    for game in games {
        println!("\n{}", game.name.cyan().bold());
        println!("  {}", game.description);
        println!(
            "  {}  {}  {}",
            format!("★ {:.1}", game.rating).yellow(),
            game.players,
            game.release_year.dimmed(),
        );
        println!("  {}", format_genre_tags_static(game.genres).dimmed());
        println!(
            "  {}",
            format!("https://store.steampowered.com/app/{}/", game.app_id).underline()
        );
    }
    println!();
}

/// Print the genre vocabulary, one label per line.
pub fn print_genres(genres: &[&str]) {
    println!("\n{}", "Genre vocabulary".bold());
    println!("{}", HR.dimmed());
    for genre in genres {
        println!("  {}", genre);
    }
    println!();
}

fn format_genre_tags(genres: &[String]) -> String {
    // Matches the card layout: first three tags, then a "+N more" chip.
    let shown: Vec<&str> = genres.iter().take(3).map(String::as_str).collect();
    let mut line = format!("[{}]", shown.join("] ["));
    if genres.len() > 3 {
        line.push_str(&format!(" +{} more", genres.len() - 3));
    }
    line
}

fn format_genre_tags_static(genres: &[&str]) -> String {
    let owned: Vec<String> = genres.iter().map(|g| g.to_string()).collect();
    format_genre_tags(&owned)
}
