//! Curated showcase list shown by `scoutctl popular`.

/// A curated entry with the stats the recommendation path never has.
#[derive(Debug, Clone, Copy)]
pub struct PopularGame {
    pub name: &'static str,
    pub description: &'static str,
    pub genres: &'static [&'static str],
    pub app_id: &'static str,
    pub rating: f32,
    pub players: &'static str,
    pub release_year: &'static str,
}

pub const POPULAR_GAMES: [PopularGame; 3] = [
    PopularGame {
        name: "Counter-Strike 2",
        description: "The legendary tactical shooter returns with enhanced graphics and refined gameplay mechanics.",
        genres: &["First Person Shooter", "Online", "Multiplayer", "Fast-Paced"],
        app_id: "730",
        rating: 4.8,
        players: "1.5M",
        release_year: "2023",
    },
    PopularGame {
        name: "Baldur's Gate 3",
        description: "An epic RPG adventure with deep storytelling and strategic turn-based combat.",
        genres: &["RPG", "Story-Based", "Adventure", "Single-Player", "Multiplayer"],
        app_id: "1086940",
        rating: 4.9,
        players: "875K",
        release_year: "2023",
    },
    PopularGame {
        name: "Hogwarts Legacy",
        description: "Experience life as a student at Hogwarts in this immersive open-world RPG.",
        genres: &["RPG", "Open World", "Adventure", "Single-Player", "Exploration"],
        app_id: "990080",
        rating: 4.7,
        players: "650K",
        release_year: "2023",
    },
];
