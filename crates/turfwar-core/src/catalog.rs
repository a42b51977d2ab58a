//! Placement card catalog.
//!
//! Immutable data shared by all defender instances: variant, sun cost,
//! and per-slot recharge duration. Validated once at engine construction.

use serde::{Deserialize, Serialize};

use crate::enums::DefenderKind;
use crate::errors::CatalogError;

/// One placement card. Pure data, no behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedCard {
    pub kind: DefenderKind,
    pub cost: u32,
    /// Recharge duration armed on every successful placement.
    pub cooldown: f32,
}

/// The card set offered to the player, indexed by slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub cards: Vec<SeedCard>,
}

impl Catalog {
    /// The built-in card set.
    pub fn standard() -> Self {
        Self {
            cards: vec![
                SeedCard {
                    kind: DefenderKind::Sunflower,
                    cost: 50,
                    cooldown: 7.5,
                },
                SeedCard {
                    kind: DefenderKind::Shooter,
                    cost: 100,
                    cooldown: 4.5,
                },
                SeedCard {
                    kind: DefenderKind::Mine,
                    cost: 25,
                    cooldown: 30.0,
                },
                SeedCard {
                    kind: DefenderKind::Wall,
                    cost: 50,
                    cooldown: 30.0,
                },
            ],
        }
    }

    /// Startup validation. A catalog that passes is assumed consistent for
    /// the rest of the match.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, card) in self.cards.iter().enumerate() {
            if self.cards[..i].iter().any(|c| c.kind == card.kind) {
                return Err(CatalogError::DuplicateVariant(card.kind));
            }
            if card.cost == 0 {
                return Err(CatalogError::ZeroCost(card.kind));
            }
            if card.cooldown <= 0.0 {
                return Err(CatalogError::BadCooldown(card.kind));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
