use std::sync::Arc;

use tabletop_core::{
    AbilityCardId, Action, CatalogOracle, CharacterKey, MonsterDefinition, MonsterKey,
    TrackedAction,
};

use crate::api::{Result, RuntimeError};

/// Checks dispatched actions against the session catalog.
#[derive(Clone)]
pub struct CatalogValidator {
    catalog: Arc<dyn CatalogOracle>,
}

impl CatalogValidator {
    pub fn new(catalog: Arc<dyn CatalogOracle>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn CatalogOracle {
        self.catalog.as_ref()
    }

    pub fn monster(&self, key: &MonsterKey) -> Result<&MonsterDefinition> {
        self.catalog
            .monster(key)
            .ok_or_else(|| RuntimeError::UnknownMonster(key.clone()))
    }

    fn character(&self, key: &CharacterKey) -> Result<()> {
        self.catalog
            .character(key)
            .map(|_| ())
            .ok_or_else(|| RuntimeError::UnknownCharacter(key.clone()))
    }

    fn ability_card(&self, key: &MonsterKey, id: AbilityCardId) -> Result<()> {
        self.monster(key)?
            .ability_card(id)
            .map(|_| ())
            .ok_or_else(|| RuntimeError::UnknownAbilityCard {
                key: key.clone(),
                id,
            })
    }

    /// Validates the ids an action introduces into the session.
    ///
    /// Inverse actions only restore what a validated action recorded and are
    /// not checked.
    pub fn validate(&self, action: &Action) -> Result<()> {
        let Action::Tracked(action) = action else {
            return Ok(());
        };

        match action {
            TrackedAction::AddCharacter(add) => self.character(&add.key),
            TrackedAction::AddMonster(add) => self.monster(&add.key).map(|_| ()),
            TrackedAction::DrawMonsterAbilityCardsSuccess(draw) => {
                for key in draw.character_initiatives.keys() {
                    self.character(key)?;
                }
                for (key, id) in &draw.ability_card_ids {
                    self.ability_card(key, *id)?;
                }
                Ok(())
            }
            TrackedAction::DrawMonsterAbilityCardSuccess(draw) => {
                self.ability_card(&draw.key, draw.ability_card_id)
            }
            TrackedAction::UpdateCharacter(_)
            | TrackedAction::AddMonsterStandee(_)
            | TrackedAction::UpdateMonsterStandee(_)
            | TrackedAction::RemoveMonsterStandee(_)
            | TrackedAction::InfuseElement(_)
            | TrackedAction::SetScenarioLevel(_)
            | TrackedAction::NextRound(_)
            | TrackedAction::ClearTabletop(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_core::{
        AbilityCardDefinition, AddCharacterAction, AddMonsterAction, Catalog,
        CharacterDefinition, DrawMonsterAbilityCardSuccessAction, NextRoundAction,
    };

    fn validator() -> CatalogValidator {
        let catalog = Catalog::new(
            vec![CharacterDefinition {
                key: "brute".into(),
                hit_points: vec![10, 12],
            }],
            vec![MonsterDefinition {
                key: "bandit-guard".into(),
                ability_cards: vec![AbilityCardDefinition {
                    id: AbilityCardId(1),
                    name: "Shield".to_owned(),
                    initiative: 15,
                    shuffle: true,
                }],
            }],
        );
        CatalogValidator::new(Arc::new(catalog))
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let validator = validator();

        assert!(matches!(
            validator.validate(&AddMonsterAction::new("goblin", 1).into()),
            Err(RuntimeError::UnknownMonster(key)) if key.as_str() == "goblin"
        ));
        assert!(matches!(
            validator.validate(&AddCharacterAction::new("tinkerer", 8).into()),
            Err(RuntimeError::UnknownCharacter(_))
        ));
        assert!(validator.validate(&AddCharacterAction::new("brute", 10).into()).is_ok());
        assert!(validator.validate(&NextRoundAction.into()).is_ok());
    }

    #[test]
    fn drawn_card_must_belong_to_the_deck() {
        let validator = validator();
        let draw = |id| {
            Action::from(DrawMonsterAbilityCardSuccessAction {
                key: "bandit-guard".into(),
                ability_card_id: AbilityCardId(id),
                reshuffled: false,
            })
        };

        assert!(validator.validate(&draw(1)).is_ok());
        assert!(matches!(
            validator.validate(&draw(2)),
            Err(RuntimeError::UnknownAbilityCard { id: AbilityCardId(2), .. })
        ));
    }
}
