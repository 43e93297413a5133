use glam::i32::IVec3;
use thiserror::Error;

/// Hard ceiling on the number of lattice points a single request may generate.
/// Requests above this fail fast instead of attempting the allocation.
pub const MAX_LATTICE_POINTS: u64 = 64_000_000;

/// A scene config that violates one of its invariants.
///
/// Validation failures are pure functions of the config: the same invalid
/// document always fails with the same variant, and nothing is partially
/// applied before the check runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("lattice constant must be a positive finite length, got {0}")]
    LatticeConstant(f64),

    #[error("supercell dimension {axis} must be at least 1")]
    SupercellDimension { axis: &'static str },

    #[error("island radius must be a positive finite length, got {0}")]
    IslandRadius(f64),
}

/// Errors surfaced by atom generation.
///
/// Degenerate facets are deliberately absent: a facet with a zero Miller
/// index is dropped from the intersection with a warning and the request
/// continues.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid scene config: {0}")]
    Validation(#[from] ValidationError),

    #[error("degenerate orientation: directions {a_dir} and {b_dir} do not span a plane")]
    DegenerateOrientation { a_dir: IVec3, b_dir: IVec3 },

    #[error("supercell of {points} lattice points exceeds the generation ceiling of {limit}")]
    ResourceLimitExceeded { points: u64, limit: u64 },
}
