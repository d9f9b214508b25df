//! Intersection classification and face adjacency for box volumes.
//!
//! The classification is **asymmetric by design**: [`VolumeRelation::Contains`]
//! means *the argument lies completely inside the receiver*, matching the
//! call-site convention of the hosting API. `a.relation_to(&b)` and
//! `b.relation_to(&a)` can therefore differ for nested boxes.

use crate::bounds::CornerVolume;
use crate::position::BlockPos;

/// Classification of one box volume relative to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeRelation {
    /// The two volumes share no position.
    Disjoint,
    /// The volumes overlap, but the argument is not fully enclosed.
    Intersects,
    /// The argument resides completely inside the receiver.
    Contains,
}

impl CornerVolume {
    /// Classifies `other` relative to this volume.
    ///
    /// Per-axis overlap intervals are computed first: an empty interval on
    /// any axis means [`VolumeRelation::Disjoint`]. Full per-axis enclosure
    /// of `other` means [`VolumeRelation::Contains`]; anything else is
    /// [`VolumeRelation::Intersects`]. Self-classification always yields
    /// `Contains`.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume, VolumeRelation};
    ///
    /// let a = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(4, 4, 4));
    /// let b = CornerVolume::new(BlockPos::new(1, 1, 1), BlockPos::new(2, 2, 2));
    ///
    /// assert_eq!(a.relation_to(&b), VolumeRelation::Contains);
    /// // Asymmetric: the smaller box does not contain the larger one
    /// assert_eq!(b.relation_to(&a), VolumeRelation::Intersects);
    /// ```
    #[must_use]
    pub fn relation_to(&self, other: &Self) -> VolumeRelation {
        let self_min = self.min().as_array();
        let self_max = self.max().as_array();
        let other_min = other.min().as_array();
        let other_max = other.max().as_array();

        for axis in 0..3 {
            let overlap_low = self_min[axis].max(other_min[axis]);
            let overlap_high = self_max[axis].min(other_max[axis]);
            if overlap_low > overlap_high {
                return VolumeRelation::Disjoint;
            }
        }

        let contains = (0..3)
            .all(|axis| self_min[axis] <= other_min[axis] && other_max[axis] <= self_max[axis]);
        if contains {
            VolumeRelation::Contains
        } else {
            VolumeRelation::Intersects
        }
    }

    /// Checks whether a position is orthogonally adjacent to one of this
    /// volume's faces.
    ///
    /// True iff the position is outside the volume, exactly one unit beyond
    /// the range on exactly one axis, and within the inclusive range on the
    /// other two. Positions inside the volume, or merely diagonal to an
    /// edge or corner, are not face-adjacent.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume};
    ///
    /// let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(2, 2, 2));
    ///
    /// assert!(volume.touches_face(BlockPos::new(3, 1, 1)));
    /// assert!(volume.touches_face(BlockPos::new(1, -1, 2)));
    /// // Inside: not adjacent
    /// assert!(!volume.touches_face(BlockPos::new(1, 1, 1)));
    /// // Diagonal to an edge: not adjacent
    /// assert!(!volume.touches_face(BlockPos::new(3, 3, 1)));
    /// ```
    #[must_use]
    pub fn touches_face(&self, pos: BlockPos) -> bool {
        let min = self.min().as_array();
        let max = self.max().as_array();
        let pos = pos.as_array();

        // Distance outside the inclusive range per axis, 0 when within.
        // i64 keeps extreme i32 coordinates from overflowing.
        let mut outside = [0_i64; 3];
        for axis in 0..3 {
            let low = i64::from(min[axis]);
            let high = i64::from(max[axis]);
            let value = i64::from(pos[axis]);
            outside[axis] = if value < low {
                low - value
            } else if value > high {
                value - high
            } else {
                0
            };
        }

        let adjacent_axes = outside.iter().filter(|&&d| d == 1).count();
        let inside_axes = outside.iter().filter(|&&d| d == 0).count();
        adjacent_axes == 1 && inside_axes == 2
    }

    /// Checks whether another volume sits flush against one of this
    /// volume's faces.
    ///
    /// True iff, on exactly one axis, the two ranges are adjacent with no
    /// gap and no overlap, while on the remaining two axes the ranges
    /// overlap by at least one unit. Edge- or corner-only contact does not
    /// count.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::{BlockPos, CornerVolume, VolumeRelation};
    ///
    /// let a = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(2, 2, 2));
    /// let b = CornerVolume::new(BlockPos::new(3, 0, 0), BlockPos::new(5, 2, 2));
    ///
    /// assert!(a.touches_volume_face(&b));
    /// assert_eq!(a.relation_to(&b), VolumeRelation::Disjoint);
    /// ```
    #[must_use]
    pub fn touches_volume_face(&self, other: &Self) -> bool {
        let self_min = self.min().as_array();
        let self_max = self.max().as_array();
        let other_min = other.min().as_array();
        let other_max = other.max().as_array();

        let mut adjacent_axes = 0;
        let mut overlapping_axes = 0;
        for axis in 0..3 {
            let a_low = i64::from(self_min[axis]);
            let a_high = i64::from(self_max[axis]);
            let b_low = i64::from(other_min[axis]);
            let b_high = i64::from(other_max[axis]);

            if a_high + 1 == b_low || b_high + 1 == a_low {
                adjacent_axes += 1;
            } else if a_low.max(b_low) <= a_high.min(b_high) {
                overlapping_axes += 1;
            }
        }
        adjacent_axes == 1 && overlapping_axes == 2
    }
}
