//! Errors raised while building ominoes.

use thiserror::Error;

use crate::point::Point;

/// Construction of an [`Omino`](crate::omino::Omino) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OminoError {
    /// The declared size is zero or above [`MAX_OMINO_SIZE`](crate::omino::MAX_OMINO_SIZE).
    #[error("invalid omino size {0}")]
    InvalidSize(usize),
    #[error("expected {expected} points, got {found}")]
    InvalidPointCount { expected: usize, found: usize },
    #[error("point {0} appears more than once")]
    DuplicatePoint(Point),
    #[error("points do not form a single edge-connected shape")]
    Disconnected,
}

/// A point was inserted into a [`PointSet`](crate::point_set::PointSet) that
/// already contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("point {0} is already present")]
pub struct DuplicateKey(pub Point);
