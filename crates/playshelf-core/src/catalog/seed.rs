//! Built-in catalog used when storage is empty and remote fetch is off.

use crate::models::Game;

fn game(
    id: &str,
    title: &str,
    description: &str,
    release_date: &str,
    image_url: &str,
    rating: f32,
    downloads: u64,
    platforms: &[&str],
    tags: &[&str],
) -> Game {
    Game {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        release_date: Some(release_date.to_string()),
        image_url: Some(image_url.to_string()),
        rating,
        downloads,
        coming_soon: false,
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The fixed default catalog seeded on first run.
pub fn default_catalog() -> Vec<Game> {
    vec![
        game(
            "1",
            "The Legend of Zelda: Breath of the Wild",
            "Open-air adventure across a vast ruined Hyrule",
            "2017-03-03",
            "https://images.unsplash.com/photo-1578303512597-81e6cc155b3e?w=400",
            4.9,
            2_100_000,
            &["Nintendo Switch", "Wii U"],
            &["Adventure", "Action", "Open world"],
        ),
        game(
            "2",
            "Elden Ring",
            "An epic action RPG from the creator of Dark Souls",
            "2022-02-25",
            "https://images.unsplash.com/photo-1552820728-8b83bb6b773f?w=400",
            4.8,
            1_800_000,
            &["PC", "PS5", "Xbox Series X"],
            &["RPG", "Action", "Souls-like"],
        ),
        game(
            "3",
            "God of War Ragnarok",
            "Kratos and Atreus face Ragnarok in this epic sequel",
            "2022-11-09",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=400",
            4.7,
            1_500_000,
            &["PS5", "PS4"],
            &["Action", "Adventure", "Mythology"],
        ),
        game(
            "4",
            "Cyberpunk 2077",
            "Night City, a megalopolis obsessed with power and body modification",
            "2020-12-10",
            "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=400",
            4.3,
            950_000,
            &["PC", "PS5", "Xbox Series X"],
            &["RPG", "Sci-fi", "Open world"],
        ),
        game(
            "5",
            "Red Dead Redemption 2",
            "An epic tale of the American frontier",
            "2018-10-26",
            "https://images.unsplash.com/photo-1509198397868-475647b2a1e5?w=400",
            4.9,
            1_200_000,
            &["PC", "PS4", "Xbox One"],
            &["Adventure", "Action", "Open world"],
        ),
        game(
            "6",
            "Minecraft",
            "Build, explore, and survive in an infinite world of blocks",
            "2011-11-18",
            "https://images.unsplash.com/photo-1614680376573-df3480f0c6ff?w=400",
            4.7,
            3_000_000,
            &["Cross-platform"],
            &["Sandbox", "Survival", "Building"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique_and_ratings_in_bound() {
        let catalog = default_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog
            .iter()
            .all(|g| (0.0..=crate::models::RATING_MAX).contains(&g.rating)));
        assert!(catalog.iter().all(|g| !g.title.is_empty()));
    }
}
