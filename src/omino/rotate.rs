//! The symmetries of the square, applied to point sets.

use std::iter::FusedIterator;

use crate::{point::Point, point_set::PointSet};

/// Turn `points` by 90 degrees and move the result back into the corner.
///
/// Maps `(x, y) -> (side - 1 - y, x)` relative to the bounding box, where
/// `side` is the side length of the current bounding box. Shapes are
/// rarely square, so it is recomputed on every call.
pub fn rotated(points: &PointSet) -> PointSet {
    let Some(bounds) = points.bounds() else {
        return PointSet::new();
    };
    let side = bounds.side();
    let (min_x, min_y) = (bounds.min.x, bounds.min.y);

    let turned = points
        .iter()
        .map(|p| Point::new(side - 1 - (p.y - min_y), p.x - min_x))
        .collect();

    PointSet::from_distinct(turned).corner_normalized()
}

/// Mirror `points` in the main diagonal: `(x, y) -> (y, x)`.
pub fn transposed(points: &PointSet) -> PointSet {
    let mirrored = points.iter().map(|p| Point::new(p.y, p.x)).collect();
    PointSet::from_distinct(mirrored).corner_normalized()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Rotate,
    Transpose,
}

/// Walking these steps from the identity visits every element of the
/// dihedral group of the square exactly once: the four turns of the
/// shape, then the four turns of its mirror image.
const STEPS: [Step; 7] = [
    Step::Rotate,
    Step::Rotate,
    Step::Rotate,
    Step::Transpose,
    Step::Rotate,
    Step::Rotate,
    Step::Rotate,
];

/// Iterator over the 8 corner-normalized, sorted images of a point set.
///
/// Produced by [`images`].
pub struct Images {
    current: Option<PointSet>,
    steps_taken: usize,
}

impl Iterator for Images {
    type Item = PointSet;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;

        if let Some(step) = STEPS.get(self.steps_taken) {
            let next = match step {
                Step::Rotate => rotated(&current),
                Step::Transpose => transposed(&current),
            };
            self.current = Some(next);
        }
        self.steps_taken += 1;

        let mut out = current;
        out.sort();
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.current.is_some() {
            STEPS.len() + 1 - self.steps_taken
        } else {
            0
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Images {}

impl FusedIterator for Images {}

/// All 8 symmetric images of `points`, starting with `points` itself
/// (moved into the corner).
pub fn images(points: &PointSet) -> Images {
    Images {
        current: Some(points.corner_normalized()),
        steps_taken: 0,
    }
}

/// The least image of `points` under [`PointSet::compare_after_sort`].
pub fn least_image(points: &PointSet) -> PointSet {
    images(points)
        .reduce(|best, candidate| {
            if candidate.compare_after_sort(&best).is_lt() {
                candidate
            } else {
                best
            }
        })
        .unwrap_or_default()
}

/// An element of the dihedral group of the square.
///
/// Applied as an optional mirror in the main diagonal followed by
/// `quarter_turns` rotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symmetry {
    pub mirrored: bool,
    pub quarter_turns: u8,
}

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry::new(false, 0);

    pub const ALL: [Symmetry; 8] = [
        Symmetry::IDENTITY,
        Symmetry::new(false, 1),
        Symmetry::new(false, 2),
        Symmetry::new(false, 3),
        Symmetry::new(true, 0),
        Symmetry::new(true, 1),
        Symmetry::new(true, 2),
        Symmetry::new(true, 3),
    ];

    pub const fn new(mirrored: bool, quarter_turns: u8) -> Self {
        Self {
            mirrored,
            quarter_turns: quarter_turns % 4,
        }
    }

    /// Apply this symmetry to `points`. The result is corner-normalized but
    /// not sorted.
    pub fn apply(&self, points: &PointSet) -> PointSet {
        let mut out = if self.mirrored {
            transposed(points)
        } else {
            points.corner_normalized()
        };

        for _ in 0..self.quarter_turns {
            out = rotated(&out);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point_set::CORNER;

    fn set(points: &[(u8, u8)]) -> PointSet {
        let mut set = PointSet::new();
        for p in points {
            set.insert((*p).into()).unwrap();
        }
        set
    }

    // The L tetromino, drawn with y pointing up:
    //
    // #.
    // #.
    // ##
    fn l_tetromino() -> PointSet {
        set(&[(1, 1), (2, 1), (1, 2), (1, 3)])
    }

    #[test]
    fn rotate_uses_bounding_box() {
        // 2 wide, 3 tall: rotating turns it into 3 wide, 2 tall.
        let r = rotated(&l_tetromino());
        let bounds = r.bounds().unwrap();

        assert_eq!(bounds.width(), 3);
        assert_eq!(bounds.height(), 2);
        assert_eq!(bounds.min, Point::new(CORNER, CORNER));
        assert_eq!(r, set(&[(1, 1), (2, 1), (3, 1), (3, 2)]));
    }

    #[test]
    fn rotate_far_from_the_origin() {
        let column: Vec<_> = (0..20).map(|y| Point::new(250, y)).collect();
        let column = PointSet::from_distinct(column);

        let row = rotated(&column);
        let bounds = row.bounds().unwrap();
        assert_eq!(bounds.min, Point::new(CORNER, CORNER));
        assert_eq!(bounds.width(), 20);
        assert_eq!(bounds.height(), 1);

        let corner = PointSet::from_distinct(vec![
            Point::new(255, 254),
            Point::new(254, 255),
            Point::new(255, 255),
        ]);
        assert_eq!(rotated(&corner), set(&[(1, 1), (1, 2), (2, 2)]));
    }

    #[test]
    fn identity_only_moves_to_the_corner() {
        let far = set(&[(40, 9), (40, 10), (41, 10)]);
        assert_eq!(Symmetry::IDENTITY.apply(&far), far.corner_normalized());
        assert_eq!(Symmetry::ALL[0], Symmetry::IDENTITY);
    }

    #[test]
    fn four_turns_are_identity() {
        let l = l_tetromino();
        let mut r = l.clone();
        for _ in 0..4 {
            r = rotated(&r);
        }
        assert_eq!(r, l);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let l = l_tetromino();
        assert_eq!(transposed(&transposed(&l)), l);
        assert_eq!(transposed(&l), set(&[(1, 1), (1, 2), (2, 1), (3, 1)]));
    }

    #[test]
    fn l_tetromino_has_eight_distinct_images() {
        let images: Vec<_> = images(&l_tetromino()).collect();
        assert_eq!(images.len(), 8);

        for (i, a) in images.iter().enumerate() {
            assert!(a.is_sorted());
            for b in &images[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn images_match_symmetries() {
        let l = l_tetromino();
        let images: Vec<_> = images(&l).collect();

        for symmetry in Symmetry::ALL {
            let image = symmetry.apply(&l);
            assert!(images.contains(&image), "{symmetry:?} not visited");
        }
    }

    #[test]
    fn square_has_one_image() {
        let square = set(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert!(images(&square).all(|i| i == square));
    }

    #[test]
    fn least_image_is_invariant() {
        let l = l_tetromino();
        let least = least_image(&l);

        for symmetry in Symmetry::ALL {
            assert_eq!(least_image(&symmetry.apply(&l)).as_slice(), least.as_slice());
        }
    }
}
