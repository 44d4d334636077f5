//! Enumeration of free polyominoes.
//!
//! Ominoes are kept in a canonical orientation, the least of their 8 images
//! under rotation and reflection, so that equal shapes have equal point
//! sets. All ominoes of size N + 1 are found by growing every omino of
//! size N by one square and deduplicating the results.


pub mod enumerator;
pub mod error;
pub mod omino;
pub mod omino_set;
pub mod point;
pub mod point_set;

pub use enumerator::Enumerator;
pub use error::{DuplicateKey, OminoError};
pub use omino::{Omino, Symmetry, MAX_OMINO_SIZE};
pub use omino_set::OminoSet;
pub use point::Point;
pub use point_set::PointSet;
