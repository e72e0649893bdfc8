//! Engine error types

use thiserror::Error;

/// Why a particle could not be created
///
/// These are expected, recoverable outcomes; a brush sweeping over occupied
/// cells just skips them. Only unregistered material ids are treated as a
/// defect (the registry panics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("target cell is outside the grid")]
    OutOfBounds,
    #[error("target cell already holds a particle")]
    CellOccupied,
    #[error("particle pool is exhausted")]
    PoolExhausted,
}
