//! Deduplicated collections of ominoes of one size.

use hashbrown::HashSet;
use indicatif::ProgressBar;

use crate::{error::OminoError, omino::Omino};

/// All distinct ominoes of a single size that have been found so far.
#[derive(Clone, Debug)]
pub struct OminoSet {
    omino_size: usize,
    members: HashSet<Omino>,
}

impl OminoSet {
    /// An empty set for ominoes of `omino_size` squares.
    pub fn new(omino_size: usize) -> Self {
        Self {
            omino_size,
            members: HashSet::new(),
        }
    }

    /// The complete set of ominoes of size 1.
    pub fn monominoes() -> Self {
        let mut set = Self::new(1);
        set.insert(Omino::monomino());
        set
    }

    pub fn omino_size(&self) -> usize {
        self.omino_size
    }

    /// Add `omino` to the set. Returns `false` if an equal shape was
    /// already present.
    ///
    /// Panics if `omino` does not have [`OminoSet::omino_size`] squares.
    pub fn insert(&mut self, omino: Omino) -> bool {
        assert_eq!(
            omino.size(),
            self.omino_size,
            "omino does not belong in this set"
        );
        self.members.insert(omino)
    }

    pub fn contains(&self, omino: &Omino) -> bool {
        self.members.contains(omino)
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the members in no particular order.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, Omino> {
        self.members.iter()
    }

    /// The members in ascending [`Omino`] order.
    pub fn sorted(&self) -> Vec<&Omino> {
        let mut members: Vec<_> = self.members.iter().collect();
        members.sort_unstable();
        members
    }

    /// Insert every one-square expansion of every member into `next`.
    ///
    /// Panics if `next` is not meant for ominoes one square larger than
    /// those in `self`.
    pub fn grow_all_into(&self, next: &mut OminoSet) -> Result<(), OminoError> {
        self.grow_all_into_with_progress(next, &ProgressBar::hidden())
    }

    /// Like [`OminoSet::grow_all_into`], advancing `bar` by one for every
    /// member that has been expanded.
    pub fn grow_all_into_with_progress(
        &self,
        next: &mut OminoSet,
        bar: &ProgressBar,
    ) -> Result<(), OminoError> {
        assert_eq!(
            next.omino_size,
            self.omino_size + 1,
            "can only grow into the next size"
        );

        for omino in self.members.iter() {
            for expansion in omino.expansions() {
                next.insert(expansion?);
            }
            bar.inc(1);
        }

        Ok(())
    }

    /// The set of all ominoes one square larger than the members of `self`.
    pub fn grow(&self) -> Result<OminoSet, OminoError> {
        let mut next = OminoSet::new(self.omino_size + 1);
        self.grow_all_into(&mut next)?;
        Ok(next)
    }
}

impl<'a> IntoIterator for &'a OminoSet {
    type Item = &'a Omino;
    type IntoIter = hashbrown::hash_set::Iter<'a, Omino>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::fmt::Display for OminoSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ominoes of size {}", self.count(), self.omino_size)?;

        for omino in self.sorted() {
            write!(f, "\n--\n{omino}")?;
        }

        Ok(())
    }
}
