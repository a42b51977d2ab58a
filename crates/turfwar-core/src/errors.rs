//! Error taxonomy.
//!
//! Placement failures are reason-coded no-ops reported to the caller;
//! catalog inconsistencies are fatal at engine construction. Nothing in
//! the frame path returns an error.

use thiserror::Error;

use crate::enums::DefenderKind;

/// Why a placement request was refused. The request is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no card in slot {0}")]
    UnknownSlot(usize),
    #[error("cell is outside the field")]
    OutOfField,
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("card is still recharging")]
    CooldownActive,
    #[error("not enough sun")]
    InsufficientFunds,
}

/// Startup-time catalog validation failure. The simulation assumes a
/// validated catalog once running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no cards")]
    Empty,
    #[error("duplicate card for {0:?}")]
    DuplicateVariant(DefenderKind),
    #[error("{0:?} card has zero cost")]
    ZeroCost(DefenderKind),
    #[error("{0:?} card has a non-positive cooldown")]
    BadCooldown(DefenderKind),
}
