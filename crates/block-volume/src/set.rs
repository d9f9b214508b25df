//! Sparse position-set volume.

use std::collections::HashSet;

use crate::bounds::CornerVolume;
use crate::error::VolumeError;
use crate::position::BlockPos;

/// A volume defined by an explicit set of unique block positions.
///
/// Unlike [`CornerVolume`], a position set has no implied box shape:
/// `min`/`max` are the componentwise extremes of the members, and
/// `capacity` is the member count, not a span product. Both `min` and
/// `max` fail on an empty set.
///
/// # Example
///
/// ```
/// use block_volume::{BlockPos, PositionSet};
///
/// let mut set = PositionSet::new();
/// set.add(&[BlockPos::new(0, 0, 0), BlockPos::new(10, 2, -3)]);
///
/// assert_eq!(set.capacity(), 2);
/// assert_eq!(set.min().unwrap(), BlockPos::new(0, 0, -3));
/// assert_eq!(set.max().unwrap(), BlockPos::new(10, 2, 0));
/// assert!(set.contains(BlockPos::new(10, 2, -3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSet {
    positions: HashSet<BlockPos>,
}

impl PositionSet {
    /// Creates an empty position set.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::PositionSet;
    ///
    /// let set = PositionSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored positions.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// let set = PositionSet::from(vec![BlockPos::new(0, 0, 0)]);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the set holds no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Inserts each position if absent; duplicates are idempotent.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// let mut set = PositionSet::new();
    /// set.add(&[BlockPos::new(1, 1, 1), BlockPos::new(1, 1, 1)]);
    /// assert_eq!(set.capacity(), 1);
    /// ```
    pub fn add(&mut self, positions: &[BlockPos]) {
        for &pos in positions {
            self.positions.insert(pos);
        }
    }

    /// Deletes each position if present; absent positions are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// let mut set = PositionSet::from(vec![BlockPos::new(1, 1, 1)]);
    /// set.remove(&[BlockPos::new(1, 1, 1), BlockPos::new(9, 9, 9)]);
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, positions: &[BlockPos]) {
        for pos in positions {
            self.positions.remove(pos);
        }
    }

    /// Removes all positions from the set.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Returns the componentwise minimum across all members.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::EmptyVolume`] if the set is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet, VolumeError};
    ///
    /// let empty = PositionSet::new();
    /// assert_eq!(empty.min(), Err(VolumeError::EmptyVolume));
    ///
    /// let set = PositionSet::from(vec![BlockPos::new(3, -1, 4), BlockPos::new(-2, 5, 0)]);
    /// assert_eq!(set.min().unwrap(), BlockPos::new(-2, -1, 0));
    /// ```
    pub fn min(&self) -> Result<BlockPos, VolumeError> {
        self.positions
            .iter()
            .copied()
            .reduce(BlockPos::component_min)
            .ok_or(VolumeError::EmptyVolume)
    }

    /// Returns the componentwise maximum across all members.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::EmptyVolume`] if the set is empty.
    pub fn max(&self) -> Result<BlockPos, VolumeError> {
        self.positions
            .iter()
            .copied()
            .reduce(BlockPos::component_max)
            .ok_or(VolumeError::EmptyVolume)
    }

    /// Returns the number of distinct stored positions.
    ///
    /// This is set cardinality, not a bounding-box span product.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// // Two far-apart blocks: capacity is 2, not the box volume between them
    /// let set = PositionSet::from(vec![BlockPos::new(0, 0, 0), BlockPos::new(100, 100, 100)]);
    /// assert_eq!(set.capacity(), 2);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.positions.len() as u64
    }

    /// Checks whether a position is a member of the set.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// let set = PositionSet::from(vec![BlockPos::new(1, 2, 3)]);
    /// assert!(set.contains(BlockPos::new(1, 2, 3)));
    /// assert!(!set.contains(BlockPos::new(0, 0, 0)));
    /// ```
    #[must_use]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.positions.contains(&pos)
    }

    /// Moves every member by `delta`, collapsing any coordinate collisions.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::OutOfRange`] if any shifted member would leave
    /// the `i32` coordinate domain; the set is left unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// let mut set = PositionSet::from(vec![BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 0)]);
    /// set.translate(BlockPos::new(0, 5, 0)).unwrap();
    /// assert!(set.contains(BlockPos::new(0, 5, 0)));
    /// assert!(set.contains(BlockPos::new(1, 5, 0)));
    /// ```
    pub fn translate(&mut self, delta: BlockPos) -> Result<(), VolumeError> {
        let mut moved = HashSet::with_capacity(self.positions.len());
        for &pos in &self.positions {
            moved.insert(pos.checked_add(delta).ok_or(VolumeError::OutOfRange)?);
        }
        self.positions = moved;
        Ok(())
    }

    /// Projects the set to its bounding box as a [`CornerVolume`].
    ///
    /// This is the explicit, intentional step required before classifying a
    /// position set against a box volume; the crate never performs this
    /// projection implicitly, since it loses the set's sparse shape.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::EmptyVolume`] if the set is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// let set = PositionSet::from(vec![BlockPos::new(0, 0, 0), BlockPos::new(4, 2, 1)]);
    /// let bounds = set.bounds().unwrap();
    /// assert_eq!(bounds.min(), BlockPos::new(0, 0, 0));
    /// assert_eq!(bounds.max(), BlockPos::new(4, 2, 1));
    /// ```
    pub fn bounds(&self) -> Result<CornerVolume, VolumeError> {
        Ok(CornerVolume::new(self.min()?, self.max()?))
    }

    /// Returns an iterator over a snapshot of the members.
    ///
    /// The order is implementation-defined but stable for the snapshot;
    /// every member is yielded exactly once. Mutating the set afterwards
    /// does not affect an in-flight iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, PositionSet};
    ///
    /// let set = PositionSet::from(vec![BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1)]);
    /// assert_eq!(set.iter().count(), 2);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PositionSetIter {
        let snapshot: Vec<BlockPos> = self.positions.iter().copied().collect();
        PositionSetIter {
            inner: snapshot.into_iter(),
        }
    }
}

impl From<Vec<BlockPos>> for PositionSet {
    fn from(positions: Vec<BlockPos>) -> Self {
        positions.into_iter().collect()
    }
}

impl FromIterator<BlockPos> for PositionSet {
    fn from_iter<I: IntoIterator<Item = BlockPos>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for &PositionSet {
    type Item = BlockPos;
    type IntoIter = PositionSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Single-pass iterator over a snapshot of a [`PositionSet`].
///
/// Completeness and no-duplication are guaranteed; coordinate order is not.
#[derive(Debug, Clone)]
pub struct PositionSetIter {
    inner: std::vec::IntoIter<BlockPos>,
}

impl Iterator for PositionSetIter {
    type Item = BlockPos;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PositionSetIter {}
