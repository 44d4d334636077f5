//! Size-by-size enumeration of all free polyominoes.
//!
//! Every omino of N + 1 squares has at least one square whose removal
//! leaves a connected omino of N squares. Growing each member of the
//! complete set for N by one square therefore reaches every omino of
//! N + 1, and canonicalization folds duplicate derivations together.

use std::time::Instant;

use indicatif::ProgressBar;

use crate::{
    error::OminoError,
    omino::MAX_OMINO_SIZE,
    omino_set::OminoSet,
};

/// Owns the complete set of ominoes of the current size and grows it one
/// size at a time.
#[derive(Clone, Debug)]
pub struct Enumerator {
    current: OminoSet,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Enumerator {
    /// Start at size 1.
    pub fn new() -> Self {
        Self {
            current: OminoSet::monominoes(),
        }
    }

    pub fn current(&self) -> &OminoSet {
        &self.current
    }

    pub fn omino_size(&self) -> usize {
        self.current.omino_size()
    }

    /// Consume the enumerator, returning the current set.
    pub fn into_current(self) -> OminoSet {
        self.current
    }

    /// Whether another [`Enumerator::step`] stays within
    /// [`MAX_OMINO_SIZE`].
    pub fn can_grow(&self) -> bool {
        self.omino_size() < MAX_OMINO_SIZE
    }

    /// Replace the current set with the set of all ominoes one square
    /// larger.
    pub fn step(&mut self) -> Result<&OminoSet, OminoError> {
        self.step_with_progress(&ProgressBar::hidden())
    }

    /// Like [`Enumerator::step`], advancing `bar` once per expanded member
    /// of the current set.
    pub fn step_with_progress(&mut self, bar: &ProgressBar) -> Result<&OminoSet, OminoError> {
        let next_size = self.omino_size() + 1;
        if next_size > MAX_OMINO_SIZE {
            return Err(OminoError::InvalidSize(next_size));
        }

        let start = Instant::now();
        let mut next = OminoSet::new(next_size);
        self.current.grow_all_into_with_progress(&mut next, bar)?;

        tracing::debug!(
            size = next_size,
            parents = self.current.count(),
            found = next.count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "grew omino set"
        );

        self.current = next;
        Ok(&self.current)
    }

    /// Step until the current size is `n`.
    ///
    /// Does nothing if the current size is already `n` or larger.
    pub fn run_to(&mut self, n: usize) -> Result<&OminoSet, OminoError> {
        if n > MAX_OMINO_SIZE {
            return Err(OminoError::InvalidSize(n));
        }

        let start = Instant::now();
        while self.omino_size() < n {
            self.step()?;
        }

        tracing::info!(
            size = self.omino_size(),
            found = self.current.count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "enumeration finished"
        );

        Ok(&self.current)
    }
}
