//! A small set of lattice points.

use std::{cmp::Ordering, iter::FusedIterator};

use crate::{error::DuplicateKey, point::Point};

/// The coordinate that the minimum x and minimum y of a corner-normalized
/// set are moved to.
///
/// Keeping a one cell margin to the axes means that every edge neighbour of
/// a normalized shape can still be represented with unsigned coordinates.
pub const CORNER: u8 = 1;

/// A set of unique [`Point`]s.
///
/// Stored as a plain vector: the sets we deal with hold a few dozen points
/// at most, where a linear scan beats hashing. Iteration order is the
/// insertion order until [`PointSet::sort`] is called.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

/// Inclusive bounding box of a non-empty [`PointSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> u8 {
        self.max.x - self.min.x + 1
    }

    pub fn height(&self) -> u8 {
        self.max.y - self.min.y + 1
    }

    /// Side length of the smallest square that covers the box.
    pub fn side(&self) -> u8 {
        self.width().max(self.height())
    }
}

impl PointSet {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Insert `point`, failing if it is already present.
    pub fn insert(&mut self, point: Point) -> Result<(), DuplicateKey> {
        if self.contains(&point) {
            return Err(DuplicateKey(point));
        }
        self.points.push(point);
        Ok(())
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sort the points into ascending [`Point`] order.
    pub fn sort(&mut self) {
        self.points.sort_unstable();
    }

    pub fn is_sorted(&self) -> bool {
        self.points.windows(2).all(|w| w[0] <= w[1])
    }

    /// Lexicographic ordering of two sets.
    ///
    /// Only meaningful if both sets have been sorted. Smaller sets order
    /// first, equally sized sets are compared point by point.
    pub fn compare_after_sort(&self, other: &Self) -> Ordering {
        debug_assert!(self.is_sorted() && other.is_sorted());

        match self.count().cmp(&other.count()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        self.points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| a.cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// A restartable pass over the points of this set.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            points: &self.points,
            offset: 0,
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut cursor = self.cursor();
        let first = cursor.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };

        for p in cursor {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }

        Some(bounds)
    }

    /// Create a copy of `self` translated so that its minimum x and minimum y
    /// both equal [`CORNER`].
    ///
    /// Panics in debug builds if the set is more than 254 cells wide or tall.
    pub fn corner_normalized(&self) -> PointSet {
        let mut cursor = self.cursor();

        let mut min_x = u8::MAX;
        let mut min_y = u8::MAX;
        for p in cursor.by_ref() {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
        }

        cursor.reset();

        let points = cursor
            .map(|p| Point::new(p.x - min_x + CORNER, p.y - min_y + CORNER))
            .collect();

        PointSet { points }
    }

    /// Build a set from points that are known to be distinct.
    pub(crate) fn from_distinct(points: Vec<Point>) -> Self {
        debug_assert!(points
            .iter()
            .enumerate()
            .all(|(i, p)| !points[i + 1..].contains(p)));
        Self { points }
    }
}

/// Set equality: same points, in any order.
impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter().all(|p| other.contains(p))
    }
}

impl Eq for PointSet {}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A pass over a [`PointSet`] that can be rewound with [`Cursor::reset`].
#[derive(Clone)]
pub struct Cursor<'a> {
    points: &'a [Point],
    offset: usize,
}

impl Cursor<'_> {
    /// Rewind to the first point.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Iterator for Cursor<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let point = *self.points.get(self.offset)?;
        self.offset += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.points.len() - self.offset;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl FusedIterator for Cursor<'_> {}
