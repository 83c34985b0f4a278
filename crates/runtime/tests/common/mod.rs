use runtime::{Runtime, RuntimeConfig};
use tabletop_content::CatalogLoader;
use tabletop_core::Catalog;

pub const CATALOG: &str = r#"(
    characters: [
        (key: "brute", hit_points: [10, 12, 14, 16, 18, 20, 22, 24, 26]),
        (key: "spellweaver", hit_points: [6, 7, 8, 9, 10, 11, 12, 13, 14]),
    ],
    monsters: [
        (key: "goblin", ability_cards: []),
        (
            key: "bandit-guard",
            ability_cards: [
                (id: 1, name: "Shield", initiative: 15),
                (id: 2, name: "Advance", initiative: 30),
                (id: 3, name: "Strike", initiative: 35),
            ],
        ),
        (
            key: "living-bones",
            ability_cards: [
                (id: 1, name: "Grasping Dead", initiative: 20),
                (id: 2, name: "Shield Spikes", initiative: 25),
            ],
        ),
    ],
)"#;

pub fn catalog() -> Catalog {
    CatalogLoader::parse(CATALOG).expect("test catalog parses")
}

pub async fn start(seed: Option<u64>) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig {
            draw_seed: seed,
            ..RuntimeConfig::default()
        })
        .catalog(catalog())
        .build()
        .await
        .expect("runtime builds")
}
