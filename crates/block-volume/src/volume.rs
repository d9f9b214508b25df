//! Closed tagged variant over the two concrete volume kinds.

use crate::bounds::{CornerVolume, CornerVolumeIter};
use crate::error::VolumeError;
use crate::position::BlockPos;
use crate::relation::VolumeRelation;
use crate::set::{PositionSet, PositionSetIter};

/// The kind of a [`BlockVolume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeKind {
    /// An ordered-corner box volume.
    Bounds,
    /// A sparse position-set volume.
    Set,
}

/// A block volume of either concrete kind behind one interface.
///
/// The two kinds have genuinely different `min`/`max`/`capacity` semantics,
/// so they stay distinct variants of a closed enum rather than sharing a
/// stateful base. Cross-kind classification requires an explicit projection
/// via [`BlockVolume::to_bounds`]; it never happens implicitly.
///
/// # Example
///
/// ```
/// use block_volume::{BlockPos, BlockVolume, CornerVolume, PositionSet};
///
/// let boxed: BlockVolume =
///     CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1)).into();
/// let sparse: BlockVolume =
///     PositionSet::from(vec![BlockPos::new(0, 0, 0), BlockPos::new(7, 0, 0)]).into();
///
/// assert_eq!(boxed.capacity().unwrap(), 8);
/// assert_eq!(sparse.capacity().unwrap(), 2);
/// assert!(boxed.contains(BlockPos::new(1, 0, 1)));
/// assert!(!sparse.contains(BlockPos::new(1, 0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockVolume {
    /// An ordered-corner box volume.
    Bounds(CornerVolume),
    /// A sparse position-set volume.
    Set(PositionSet),
}

impl BlockVolume {
    /// Returns the kind of this volume.
    #[must_use]
    pub const fn kind(&self) -> VolumeKind {
        match self {
            Self::Bounds(_) => VolumeKind::Bounds,
            Self::Set(_) => VolumeKind::Set,
        }
    }

    /// Returns the componentwise minimum of the volume.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::EmptyVolume`] for an empty position set.
    pub fn min(&self) -> Result<BlockPos, VolumeError> {
        match self {
            Self::Bounds(bounds) => Ok(bounds.min()),
            Self::Set(set) => set.min(),
        }
    }

    /// Returns the componentwise maximum of the volume.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::EmptyVolume`] for an empty position set.
    pub fn max(&self) -> Result<BlockPos, VolumeError> {
        match self {
            Self::Bounds(bounds) => Ok(bounds.max()),
            Self::Set(set) => set.max(),
        }
    }

    /// Returns the number of discrete positions described by the volume.
    ///
    /// Box volumes count every cell in their span product; set volumes
    /// count their distinct members.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::OutOfRange`] if a box volume's cell count
    /// exceeds `u64::MAX`.
    pub fn capacity(&self) -> Result<u64, VolumeError> {
        match self {
            Self::Bounds(bounds) => bounds.capacity(),
            Self::Set(set) => Ok(set.capacity()),
        }
    }

    /// Checks whether a position belongs to the volume.
    #[must_use]
    pub fn contains(&self, pos: BlockPos) -> bool {
        match self {
            Self::Bounds(bounds) => bounds.contains(pos),
            Self::Set(set) => set.contains(pos),
        }
    }

    /// Moves the whole volume by `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::OutOfRange`] if any shifted coordinate would
    /// leave the `i32` domain; the volume is left unchanged in that case.
    pub fn translate(&mut self, delta: BlockPos) -> Result<(), VolumeError> {
        match self {
            Self::Bounds(bounds) => bounds.translate(delta),
            Self::Set(set) => set.translate(delta),
        }
    }

    /// Returns an iterator over the volume's block positions.
    ///
    /// Box volumes iterate in the documented X-fastest/then-Z/then-Y order;
    /// set volumes iterate a snapshot in implementation-defined order.
    #[must_use]
    pub fn iter(&self) -> BlockVolumeIter {
        match self {
            Self::Bounds(bounds) => BlockVolumeIter::Bounds(bounds.iter()),
            Self::Set(set) => BlockVolumeIter::Set(set.iter()),
        }
    }

    /// Classifies `other` relative to this volume.
    ///
    /// Defined only when both volumes are box-shaped. Classifying a sparse
    /// set by its bounding box would silently lose its shape, so cross-kind
    /// comparison demands the explicit [`BlockVolume::to_bounds`] step
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::UnsupportedComparison`] unless both operands
    /// are [`BlockVolume::Bounds`].
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, BlockVolume, CornerVolume, PositionSet, VolumeError};
    ///
    /// let boxed: BlockVolume =
    ///     CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(4, 4, 4)).into();
    /// let sparse: BlockVolume = PositionSet::from(vec![BlockPos::new(1, 1, 1)]).into();
    ///
    /// assert!(matches!(
    ///     boxed.try_relation(&sparse),
    ///     Err(VolumeError::UnsupportedComparison { .. })
    /// ));
    ///
    /// // The intentional route: project the set to its bounding box first
    /// let projected: BlockVolume = sparse.to_bounds().unwrap().into();
    /// assert!(boxed.try_relation(&projected).is_ok());
    /// ```
    pub fn try_relation(&self, other: &Self) -> Result<VolumeRelation, VolumeError> {
        match (self, other) {
            (Self::Bounds(a), Self::Bounds(b)) => Ok(a.relation_to(b)),
            _ => Err(VolumeError::UnsupportedComparison {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }

    /// Projects the volume to an ordered-corner bounding box.
    ///
    /// Identity for box volumes; the componentwise member extremes for set
    /// volumes.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::EmptyVolume`] for an empty position set.
    pub fn to_bounds(&self) -> Result<CornerVolume, VolumeError> {
        match self {
            Self::Bounds(bounds) => Ok(*bounds),
            Self::Set(set) => set.bounds(),
        }
    }
}

impl From<CornerVolume> for BlockVolume {
    fn from(bounds: CornerVolume) -> Self {
        Self::Bounds(bounds)
    }
}

impl From<PositionSet> for BlockVolume {
    fn from(set: PositionSet) -> Self {
        Self::Set(set)
    }
}

/// Iterator over the block positions of a [`BlockVolume`].
#[derive(Debug, Clone)]
pub enum BlockVolumeIter {
    /// Iterating a box volume.
    Bounds(CornerVolumeIter),
    /// Iterating a position-set snapshot.
    Set(PositionSetIter),
}

impl Iterator for BlockVolumeIter {
    type Item = BlockPos;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Bounds(iter) => iter.next(),
            Self::Set(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Bounds(iter) => iter.size_hint(),
            Self::Set(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for BlockVolumeIter {}
