//! Catalog loader.
//!
//! File format:
//! ```ron
//! (
//!     characters: [
//!         (key: "brute", hit_points: [10, 12, 14, 16, 18, 20, 22, 24, 26]),
//!     ],
//!     monsters: [
//!         (
//!             key: "bandit-guard",
//!             ability_cards: [
//!                 (id: 1, name: "Shield", initiative: 15, shuffle: true),
//!             ],
//!         ),
//!     ],
//! )
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{bail, ensure};
use tabletop_core::{Catalog, TabletopConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for the session catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    /// Parse and validate a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        validate(&catalog)?;
        Ok(catalog)
    }
}

fn validate(catalog: &Catalog) -> LoadResult<()> {
    let mut characters = BTreeSet::new();
    for character in &catalog.characters {
        if !characters.insert(&character.key) {
            bail!("character {} is listed twice", character.key);
        }
        ensure!(
            !character.hit_points.is_empty()
                && character.hit_points.len() <= TabletopConfig::CHARACTER_LEVELS,
            "character {} needs 1..={} hit-point levels, found {}",
            character.key,
            TabletopConfig::CHARACTER_LEVELS,
            character.hit_points.len()
        );
    }

    let mut monsters = BTreeSet::new();
    for monster in &catalog.monsters {
        if !monsters.insert(&monster.key) {
            bail!("monster {} is listed twice", monster.key);
        }
        let mut ids = BTreeSet::new();
        for card in &monster.ability_cards {
            if !ids.insert(card.id) {
                bail!("monster {} lists {} twice", monster.key, card.id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tabletop_core::{AbilityCardId, CatalogOracle};
    use tempfile::NamedTempFile;

    use super::*;

    const SAMPLE: &str = r#"(
        characters: [
            (key: "tinkerer", hit_points: [8, 9, 11, 12, 14, 15, 17, 18, 20]),
        ],
        monsters: [
            (
                key: "living-bones",
                ability_cards: [
                    (id: 1, name: "Shield Spikes", initiative: 64),
                    (id: 2, name: "Grasping Dead", initiative: 20, shuffle: true),
                ],
            ),
        ],
    )"#;

    #[test]
    fn loads_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = CatalogLoader::load(file.path()).unwrap();

        let tinkerer = catalog.character(&"tinkerer".into()).unwrap();
        assert_eq!(tinkerer.hit_points_at(9), Some(20));
        let bones = catalog.monster(&"living-bones".into()).unwrap();
        let card = bones.ability_card(AbilityCardId(1)).unwrap();
        assert!(!card.shuffle);
        assert!(bones.ability_card(AbilityCardId(2)).unwrap().shuffle);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ron");

        let error = CatalogLoader::load(&path).unwrap_err();

        assert!(error.to_string().contains("absent.ron"));
    }

    #[test]
    fn duplicate_card_ids_are_rejected() {
        let content = r#"(
            monsters: [
                (key: "bandit-guard", ability_cards: [
                    (id: 4, name: "Strike", initiative: 35),
                    (id: 4, name: "Strike Again", initiative: 50),
                ]),
            ],
        )"#;

        let error = CatalogLoader::parse(content).unwrap_err();

        assert!(error.to_string().contains("card 4 twice"));
    }

    #[test]
    fn overlong_hit_point_table_is_rejected() {
        let content = r#"(characters: [(key: "brute", hit_points: [10, 12, 14, 16, 18, 20, 22, 24, 26, 28])])"#;

        assert!(CatalogLoader::parse(content).is_err());
    }
}
