//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next frame boundary. Invalid
//! commands degrade to no-ops (with an alert where the player should know
//! why); they never abort the frame.

use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::grid::Cell;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Lifecycle ---
    /// Spawn the off-field preview attackers and enter Preview.
    StartMatch,
    /// Clear the preview and start gameplay.
    BeginPlay,
    Pause,
    Resume,

    // --- Card / shovel selection ---
    /// Select a card slot (gated on cost and cooldown).
    SelectCard { slot: usize },
    /// Enter shovel mode, dropping any card selection.
    SelectShovel,
    /// Drop card and shovel selection.
    Deselect,

    // --- Field actions ---
    /// Place the card in `slot` at `cell`.
    PlaceCard { slot: usize, cell: Cell },
    /// Shovel the defender at `cell`, if any.
    RemoveDefender { cell: Cell },
    /// Collect a falling or settled pickup.
    CollectPickup { id: ActorId },
}
