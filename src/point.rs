use std::cmp::Ordering;

/// A cell on the square lattice.
///
/// Points are ordered row-major: by `y` first, then by `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn left(self) -> Option<Self> {
        Some(Self::new(self.x.checked_sub(1)?, self.y))
    }

    pub fn right(self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(1)?, self.y))
    }

    pub fn down(self) -> Option<Self> {
        Some(Self::new(self.x, self.y.checked_sub(1)?))
    }

    pub fn up(self) -> Option<Self> {
        Some(Self::new(self.x, self.y.checked_add(1)?))
    }

    /// The (up to) four edge-adjacent cells of this point.
    ///
    /// Neighbours that would fall outside of the `u8` coordinate space
    /// are skipped.
    pub fn neighbours(self) -> impl Iterator<Item = Point> {
        [self.left(), self.right(), self.down(), self.up()]
            .into_iter()
            .flatten()
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u8, u8)> for Point {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn row_major_order() {
        let mut points = vec![
            Point::new(2, 1),
            Point::new(0, 2),
            Point::new(1, 1),
            Point::new(3, 0),
        ];
        points.sort();

        assert_eq!(
            points,
            [
                Point::new(3, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(0, 2)
            ]
        );
    }

    #[test]
    fn neighbours_at_the_origin() {
        let n: Vec<_> = Point::new(0, 0).neighbours().collect();
        assert_eq!(n, [Point::new(1, 0), Point::new(0, 1)]);

        let n: Vec<_> = Point::new(255, 3).neighbours().collect();
        assert_eq!(n, [Point::new(254, 3), Point::new(255, 2), Point::new(255, 4)]);
    }
}
