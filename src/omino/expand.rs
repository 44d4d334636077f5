//! Growing an omino of N squares into ominoes of N + 1.

use super::Omino;
use crate::{error::OminoError, point::Point, point_set::PointSet};

impl Omino {
    /// The unoccupied cells that share an edge with this omino, sorted.
    ///
    /// These are exactly the cells that [`Omino::grow_by`] accepts.
    pub fn free_neighbours(&self) -> PointSet {
        let mut free = PointSet::with_capacity(2 * self.size + 2);

        for p in self.points.iter() {
            for n in p.neighbours() {
                if !self.points.contains(&n) {
                    // Cells shared by several occupied squares turn up
                    // more than once.
                    free.insert(n).ok();
                }
            }
        }

        free.sort();
        free
    }

    /// A new omino made of `self` plus the square at `point`.
    pub fn grow_by(&self, point: Point) -> Result<Omino, OminoError> {
        let points = self.points.iter().copied().chain(Some(point));
        Omino::new(self.size + 1, points)
    }

    /// Every N + 1 omino that can be made by adding one square to `self`.
    ///
    /// The same shape can be yielded several times.
    pub fn expansions(&self) -> impl Iterator<Item = Result<Omino, OminoError>> + '_ {
        let free = self.free_neighbours();
        let mut cursor = 0;

        std::iter::from_fn(move || {
            let point = *free.as_slice().get(cursor)?;
            cursor += 1;
            Some(self.grow_by(point))
        })
    }
}
