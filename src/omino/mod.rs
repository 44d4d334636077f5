//! Polyominoes in canonical orientation.

use std::{cmp::Ordering, collections::VecDeque};

use crate::{
    error::{DuplicateKey, OminoError},
    point::Point,
    point_set::{PointSet, CORNER},
};

pub mod expand;
pub mod rotate;

pub use rotate::Symmetry;

/// The largest omino we can represent.
///
/// Coordinates are `u8`; a shape of this size, placed in the corner, still
/// leaves room for its free neighbours and for every image under rotation.
pub const MAX_OMINO_SIZE: usize = 64;

/// A free polyomino: `size` edge-connected unit squares, stored in the least
/// orientation of the 8 symmetries of the square.
///
/// Two ominoes compare equal if and only if one is a rotation or reflection
/// of the other.
#[derive(Clone, Debug)]
pub struct Omino {
    size: usize,
    points: PointSet,
}

impl PartialEq for Omino {
    fn eq(&self, other: &Self) -> bool {
        // Canonical point sets are always sorted, so comparing the slices
        // is set equality.
        self.size == other.size && self.points.as_slice() == other.points.as_slice()
    }
}

impl Eq for Omino {}

impl std::hash::Hash for Omino {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.points.as_slice().hash(state);
    }
}

impl Ord for Omino {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.points.compare_after_sort(&other.points))
    }
}

impl PartialOrd for Omino {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for Omino {
    /// Draw the omino as a `size` by `size` grid, top row first.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let side = self.size;
        let mut grid = String::with_capacity(side * (side + 1));

        for y in (0..side).rev() {
            for x in 0..side {
                let occupied = match (u8::try_from(x), u8::try_from(y)) {
                    (Ok(x), Ok(y)) => self.points.contains(&Point::new(x + CORNER, y + CORNER)),
                    _ => false,
                };
                grid.push(if occupied { '#' } else { '.' });
            }
            if y != 0 {
                grid.push('\n');
            }
        }

        write!(f, "{grid}")
    }
}

impl Omino {
    /// Build an omino of `size` squares from `points`.
    ///
    /// The points may be anywhere on the lattice; the result is moved to the
    /// corner and turned into its canonical orientation.
    pub fn new<I>(size: usize, points: I) -> Result<Self, OminoError>
    where
        I: IntoIterator<Item = Point>,
    {
        if size == 0 || size > MAX_OMINO_SIZE {
            return Err(OminoError::InvalidSize(size));
        }

        let points: Vec<Point> = points.into_iter().collect();
        if points.len() != size {
            return Err(OminoError::InvalidPointCount {
                expected: size,
                found: points.len(),
            });
        }

        let mut set = PointSet::with_capacity(size);
        for p in points {
            set.insert(p)
                .map_err(|DuplicateKey(p)| OminoError::DuplicatePoint(p))?;
        }

        if !is_joined(&set) {
            return Err(OminoError::Disconnected);
        }

        Ok(Self {
            size,
            points: rotate::least_image(&set),
        })
    }

    /// The single square.
    pub fn monomino() -> Self {
        Self {
            size: 1,
            points: PointSet::from_distinct(vec![Point::new(CORNER, CORNER)]),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The canonical points of this omino, sorted.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// The images of this omino under all 8 symmetries of the square.
    pub fn images(&self) -> rotate::Images {
        rotate::images(&self.points)
    }

    /// This omino with `symmetry` applied to its points.
    ///
    /// The result is a raw point set: passing it back through
    /// [`Omino::new`] yields an omino equal to `self`.
    pub fn transformed(&self, symmetry: Symmetry) -> PointSet {
        symmetry.apply(&self.points)
    }
}

/// Breadth-first walk over edge-adjacent points, starting from any point.
/// The set is joined up if the walk reaches every point.
fn is_joined(points: &PointSet) -> bool {
    let Some(start) = points.iter().next().copied() else {
        return true;
    };

    let mut visited = PointSet::with_capacity(points.count());
    let mut to_explore = VecDeque::with_capacity(points.count());

    visited.insert(start).ok();
    to_explore.push_back(start);

    while let Some(p) = to_explore.pop_front() {
        for n in p.neighbours() {
            if points.contains(&n) && visited.insert(n).is_ok() {
                to_explore.push_back(n);
            }
        }
    }

    visited.count() == points.count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(points: &[(u8, u8)]) -> Vec<Point> {
        points.iter().map(|p| (*p).into()).collect()
    }

    #[test]
    fn construction_errors() {
        assert_eq!(Omino::new(0, pts(&[])), Err(OminoError::InvalidSize(0)));
        assert_eq!(
            Omino::new(1, pts(&[])),
            Err(OminoError::InvalidPointCount {
                expected: 1,
                found: 0
            })
        );
        assert_eq!(
            Omino::new(2, pts(&[(0, 0), (0, 0)])),
            Err(OminoError::DuplicatePoint(Point::new(0, 0)))
        );
        assert_eq!(
            Omino::new(2, pts(&[(0, 0), (5, 5)])),
            Err(OminoError::Disconnected)
        );
        assert_eq!(
            Omino::new(MAX_OMINO_SIZE + 1, pts(&[])),
            Err(OminoError::InvalidSize(MAX_OMINO_SIZE + 1))
        );
    }

    #[test]
    fn diagonal_contact_is_disconnected() {
        assert_eq!(
            Omino::new(3, pts(&[(0, 0), (1, 1), (2, 2)])),
            Err(OminoError::Disconnected)
        );
        // Two dominoes side by side with a gap.
        assert_eq!(
            Omino::new(4, pts(&[(0, 0), (0, 1), (2, 0), (2, 1)])),
            Err(OminoError::Disconnected)
        );
    }

    #[test]
    fn moved_to_corner() {
        let omino = Omino::new(3, pts(&[(10, 20), (11, 20), (12, 20)])).unwrap();
        let bounds = omino.points().bounds().unwrap();

        assert_eq!(bounds.min, Point::new(CORNER, CORNER));
        assert!(omino.points().is_sorted());
    }

    #[test]
    fn canonical_form_of_the_domino() {
        let across = Omino::new(2, pts(&[(0, 0), (1, 0)])).unwrap();
        let upright = Omino::new(2, pts(&[(4, 4), (4, 5)])).unwrap();

        assert_eq!(across, upright);
        assert_eq!(across.points().as_slice(), pts(&[(1, 1), (2, 1)]));
    }

    #[test]
    fn mirror_images_are_equal() {
        // S and Z tetrominoes
        let s = Omino::new(4, pts(&[(0, 0), (1, 0), (1, 1), (2, 1)])).unwrap();
        let z = Omino::new(4, pts(&[(1, 0), (2, 0), (0, 1), (1, 1)])).unwrap();
        assert_eq!(s, z);

        // ...but a T is something else entirely
        let t = Omino::new(4, pts(&[(0, 1), (1, 1), (2, 1), (1, 0)])).unwrap();
        assert_ne!(s, t);
        assert_eq!(s.cmp(&t), t.cmp(&s).reverse());
    }

    #[test]
    fn transformed_ominoes_are_equal() {
        let f = Omino::new(5, pts(&[(1, 0), (1, 1), (1, 2), (0, 1), (2, 2)])).unwrap();

        for symmetry in Symmetry::ALL {
            let image = f.transformed(symmetry);
            let rebuilt = Omino::new(5, image.iter().copied()).unwrap();
            assert_eq!(rebuilt, f, "{symmetry:?}");
        }
    }

    #[test]
    fn render() {
        let l = Omino::new(4, pts(&[(0, 0), (0, 1), (0, 2), (1, 0)])).unwrap();
        let rendered = l.to_string();

        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.lines().all(|l| l.len() == 4));
        assert!(!rendered.ends_with('\n'));
        assert_eq!(rendered.matches('#').count(), 4);

        assert_eq!(Omino::monomino().to_string(), "#");
        assert_eq!(
            Omino::new(2, pts(&[(0, 0), (1, 0)])).unwrap().to_string(),
            "..\n##"
        );
    }
}
