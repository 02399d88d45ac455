//! Seed catalog for demo and first-run use.

use gameshelf_core::Game;

/// The catalog a fresh store starts with when seeding is requested.
///
/// Ids "1" through "3" are below any minted id, so seeded entries never
/// collide with entries created at runtime.
#[must_use]
pub fn launch_catalog() -> Vec<Game> {
    vec![
        Game {
            id: "1".to_string(),
            name: "Elden Ring".to_string(),
            platform: "PS5".to_string(),
            year: "2023".to_string(),
            genre: "RPG".to_string(),
            price: "250".to_string(),
            description: "Open-world epic with punishing combat and deep lore.".to_string(),
            image: "https://www.fanaticosdegames.com.br/wp-content/uploads/2022/02/elden-ring.jpg"
                .to_string(),
            available: true,
        },
        Game {
            id: "2".to_string(),
            name: "Hollow Knight".to_string(),
            platform: "PC".to_string(),
            year: "2017".to_string(),
            genre: "Metroidvania".to_string(),
            price: "50".to_string(),
            description: "Acclaimed indie with deep exploration and striking art.".to_string(),
            image: "https://upload.wikimedia.org/wikipedia/en/3/33/Hollow_Knight_cover.jpg"
                .to_string(),
            available: true,
        },
        Game {
            id: "3".to_string(),
            name: "God of War Ragnarök".to_string(),
            platform: "PS5".to_string(),
            year: "2022".to_string(),
            genre: "Action".to_string(),
            price: "300".to_string(),
            description: "Kratos returns for an intense, story-driven sequel.".to_string(),
            image: "https://upload.wikimedia.org/wikipedia/en/f/f6/God_of_War_Ragnarok_cover.jpg"
                .to_string(),
            available: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let games = launch_catalog();
        assert_eq!(games.len(), 3);

        let mut ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn test_seed_contains_unavailable_entry() {
        let games = launch_catalog();
        assert!(games.iter().any(|g| !g.available));
    }
}
