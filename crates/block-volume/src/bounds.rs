//! Ordered-corner box volume.

use crate::error::VolumeError;
use crate::position::BlockPos;

/// An axis-aligned box volume defined by two identity-preserving corners.
///
/// Unlike a normalized bounding box, the two corners are stored exactly as
/// the caller supplied them and are **never reordered**: interactive tools
/// rely on knowing which corner is "from" and which is "to" even when their
/// numeric min/max relationship inverts. The minimum and maximum bounds are
/// always derived on demand.
///
/// Both bounds are inclusive.
///
/// # Example
///
/// ```
/// use block_volume::{BlockPos, CornerVolume};
///
/// // Corners keep their identity, even when given in "reverse" order
/// let volume = CornerVolume::new(BlockPos::new(10, 10, 10), BlockPos::new(0, 0, 0));
/// assert_eq!(volume.corner1, BlockPos::new(10, 10, 10));
/// assert_eq!(volume.corner2, BlockPos::new(0, 0, 0));
///
/// // Derived bounds are always ordered
/// assert_eq!(volume.min(), BlockPos::new(0, 0, 0));
/// assert_eq!(volume.max(), BlockPos::new(10, 10, 10));
/// assert!(volume.contains(BlockPos::new(5, 5, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerVolume {
    /// First corner, exactly as supplied by the caller.
    pub corner1: BlockPos,
    /// Second corner, exactly as supplied by the caller.
    pub corner2: BlockPos,
}

impl CornerVolume {
    /// Creates a volume from two corners, preserving their order.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1));
    /// assert_eq!(volume.capacity().unwrap(), 8);
    /// ```
    #[must_use]
    pub const fn new(corner1: BlockPos, corner2: BlockPos) -> Self {
        Self { corner1, corner2 }
    }

    /// Creates a volume spanning a single block.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::from_point(BlockPos::new(5, 5, 5));
    /// assert_eq!(volume.capacity().unwrap(), 1);
    /// ```
    #[must_use]
    pub const fn from_point(pos: BlockPos) -> Self {
        Self {
            corner1: pos,
            corner2: pos,
        }
    }

    /// Returns the componentwise minimum of the two corners.
    ///
    /// Guaranteed `min() <= max()` per axis, regardless of corner order.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(4, 0, -2), BlockPos::new(0, 3, 5));
    /// assert_eq!(volume.min(), BlockPos::new(0, 0, -2));
    /// ```
    #[must_use]
    pub fn min(&self) -> BlockPos {
        self.corner1.component_min(self.corner2)
    }

    /// Returns the componentwise maximum of the two corners.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(4, 0, -2), BlockPos::new(0, 3, 5));
    /// assert_eq!(volume.max(), BlockPos::new(4, 3, 5));
    /// ```
    #[must_use]
    pub fn max(&self) -> BlockPos {
        self.corner1.component_max(self.corner2)
    }

    /// Returns the inclusive extent along each axis as `(x, y, z)`.
    ///
    /// Each extent is `|max - min| + 1` and is exact for the full `i32`
    /// coordinate domain.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(9, 19, 29));
    /// assert_eq!(volume.span(), (10, 20, 30));
    /// ```
    #[must_use]
    pub fn span(&self) -> (u64, u64, u64) {
        let min = self.min();
        let max = self.max();
        (
            u64::from(max.x.abs_diff(min.x)) + 1,
            u64::from(max.y.abs_diff(min.y)) + 1,
            u64::from(max.z.abs_diff(min.z)) + 1,
        )
    }

    /// Returns the total number of block positions in this volume.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::OutOfRange`] if the product of spans exceeds
    /// `u64::MAX` (possible only for volumes covering a large fraction of
    /// the full coordinate domain). The count never silently wraps.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1));
    /// assert_eq!(volume.capacity().unwrap(), 8);
    /// ```
    pub fn capacity(&self) -> Result<u64, VolumeError> {
        u64::try_from(self.cell_count()).map_err(|_| VolumeError::OutOfRange)
    }

    /// Exact cell count; the span product always fits in a u128.
    pub(crate) fn cell_count(&self) -> u128 {
        let (sx, sy, sz) = self.span();
        u128::from(sx) * u128::from(sy) * u128::from(sz)
    }

    /// Checks whether a position lies inside the volume (bounds inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(10, 10, 10));
    /// assert!(volume.contains(BlockPos::new(5, 5, 5)));
    /// assert!(volume.contains(volume.min()));
    /// assert!(volume.contains(volume.max()));
    /// assert!(!volume.contains(BlockPos::new(11, 5, 5)));
    /// ```
    #[must_use]
    pub fn contains(&self, pos: BlockPos) -> bool {
        let min = self.min();
        let max = self.max();
        pos.x >= min.x
            && pos.x <= max.x
            && pos.y >= min.y
            && pos.y <= max.y
            && pos.z >= min.z
            && pos.z <= max.z
    }

    /// Moves both corners by `delta`, preserving corner identity.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::OutOfRange`] if either shifted corner would
    /// leave the `i32` coordinate domain; the volume is left unchanged in
    /// that case.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let mut volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1));
    /// volume.translate(BlockPos::new(5, 0, 0)).unwrap();
    /// assert_eq!(volume.min(), BlockPos::new(5, 0, 0));
    /// assert_eq!(volume.max(), BlockPos::new(6, 1, 1));
    /// ```
    pub fn translate(&mut self, delta: BlockPos) -> Result<(), VolumeError> {
        let corner1 = self
            .corner1
            .checked_add(delta)
            .ok_or(VolumeError::OutOfRange)?;
        let corner2 = self
            .corner2
            .checked_add(delta)
            .ok_or(VolumeError::OutOfRange)?;
        self.corner1 = corner1;
        self.corner2 = corner2;
        Ok(())
    }

    /// Returns the position at a linear iteration index, or `None` if the
    /// index is past the end of the volume.
    ///
    /// Index 0 is `min()`; X varies fastest, then Z, then Y, matching
    /// [`CornerVolume::iter`]. This gives random access and supports
    /// chunked parallel iteration without any iterator state.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1));
    /// assert_eq!(volume.position_at(0), Some(BlockPos::new(0, 0, 0)));
    /// assert_eq!(volume.position_at(1), Some(BlockPos::new(1, 0, 0)));
    /// assert_eq!(volume.position_at(2), Some(BlockPos::new(0, 0, 1)));
    /// assert_eq!(volume.position_at(8), None);
    /// ```
    #[must_use]
    pub fn position_at(&self, index: u64) -> Option<BlockPos> {
        let index = u128::from(index);
        if index >= self.cell_count() {
            return None;
        }
        let (sx, _, sz) = self.span();
        Some(position_for(
            self.min(),
            u128::from(sx),
            u128::from(sz),
            index,
        ))
    }

    /// Returns an iterator over every block position in the volume.
    ///
    /// Traversal order is a documented contract: X varies fastest, then Z,
    /// then Y, so a full X–Z plane is exhausted before Y increments.
    /// The iterator snapshots the volume's geometry at creation; mutating
    /// the volume afterwards does not affect an in-flight iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1));
    /// let positions: Vec<_> = volume.iter().collect();
    /// assert_eq!(positions.len(), 8);
    /// assert_eq!(positions[0], BlockPos::new(0, 0, 0));
    /// assert_eq!(positions[1], BlockPos::new(1, 0, 0));
    /// assert_eq!(positions[2], BlockPos::new(0, 0, 1));
    /// ```
    #[must_use]
    pub fn iter(&self) -> CornerVolumeIter {
        let (sx, _, sz) = self.span();
        CornerVolumeIter {
            min: self.min(),
            span_x: u128::from(sx),
            span_z: u128::from(sz),
            cells: self.cell_count(),
            cursor: 0,
        }
    }
}

impl IntoIterator for CornerVolume {
    type Item = BlockPos;
    type IntoIter = CornerVolumeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &CornerVolume {
    type Item = BlockPos;
    type IntoIter = CornerVolumeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Maps a linear index to a block position in X-fastest/then-Z/then-Y order.
///
/// Offsets are remainders below the per-axis span, so `min + offset` stays
/// within the volume's original corner range and fits an `i32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn position_for(min: BlockPos, span_x: u128, span_z: u128, index: u128) -> BlockPos {
    let x = i64::from(min.x) + (index % span_x) as i64;
    let z = i64::from(min.z) + ((index / span_x) % span_z) as i64;
    let y = i64::from(min.y) + (index / (span_x * span_z)) as i64;
    BlockPos::new(x as i32, y as i32, z as i32)
}

/// Single-pass iterator over the block positions of a [`CornerVolume`].
///
/// Backed by a pure index-to-coordinate mapping rather than nested loop
/// state; the cursor only ever advances, and an exhausted iterator keeps
/// returning `None`.
#[derive(Debug, Clone)]
pub struct CornerVolumeIter {
    min: BlockPos,
    span_x: u128,
    span_z: u128,
    cells: u128,
    cursor: u128,
}

impl Iterator for CornerVolumeIter {
    type Item = BlockPos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.cells {
            return None;
        }
        let pos = position_for(self.min, self.span_x, self.span_z, self.cursor);
        self.cursor += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.cells - self.cursor).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CornerVolumeIter {}
