//! Block position type.

use nalgebra::{Point3, Vector3};

/// A discrete 3D position on the block grid.
///
/// Uses `i32` coordinates to support both positive and negative indices;
/// a position has no identity beyond value equality.
///
/// # Example
///
/// ```
/// use block_volume::BlockPos;
///
/// let pos = BlockPos::new(1, 2, 3);
/// assert_eq!(pos.x, 1);
/// assert_eq!(pos.y, 2);
/// assert_eq!(pos.z, 3);
///
/// // Supports negative coordinates
/// let neg = BlockPos::new(-5, -10, -15);
/// assert_eq!(neg.x, -5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    /// X coordinate (east/west axis).
    pub x: i32,
    /// Y coordinate (vertical axis).
    pub y: i32,
    /// Z coordinate (north/south axis).
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let pos = BlockPos::new(10, 20, 30);
    /// assert_eq!(pos.x, 10);
    /// ```
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a position at the origin (0, 0, 0).
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let origin = BlockPos::origin();
    /// assert_eq!(origin, BlockPos::new(0, 0, 0));
    /// ```
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the position as a tuple.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let pos = BlockPos::new(1, 2, 3);
    /// assert_eq!(pos.as_tuple(), (1, 2, 3));
    /// ```
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Returns the position as an array.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let pos = BlockPos::new(1, 2, 3);
    /// assert_eq!(pos.as_array(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the componentwise minimum of two positions.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let a = BlockPos::new(1, 8, -3);
    /// let b = BlockPos::new(4, 2, -7);
    /// assert_eq!(a.component_min(b), BlockPos::new(1, 2, -7));
    /// ```
    #[must_use]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Returns the componentwise maximum of two positions.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let a = BlockPos::new(1, 8, -3);
    /// let b = BlockPos::new(4, 2, -7);
    /// assert_eq!(a.component_max(b), BlockPos::new(4, 8, -3));
    /// ```
    #[must_use]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Adds an offset to this position, returning `None` on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let pos = BlockPos::new(5, 5, 5);
    /// let moved = pos.checked_add(BlockPos::new(1, 2, 3));
    /// assert_eq!(moved, Some(BlockPos::new(6, 7, 8)));
    ///
    /// let edge = BlockPos::new(i32::MAX, 0, 0);
    /// assert_eq!(edge.checked_add(BlockPos::new(1, 0, 0)), None);
    /// ```
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
            self.z.checked_add(other.z)?,
        ))
    }

    /// Subtracts an offset from this position, returning `None` on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let pos = BlockPos::new(5, 5, 5);
    /// let moved = pos.checked_sub(BlockPos::new(1, 2, 3));
    /// assert_eq!(moved, Some(BlockPos::new(4, 3, 2)));
    /// ```
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
            self.z.checked_sub(other.z)?,
        ))
    }

    /// Returns the 6 face-adjacent neighbors (von Neumann neighborhood).
    ///
    /// These are the positions sharing a face with this block.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    ///
    /// let pos = BlockPos::new(0, 0, 0);
    /// let neighbors = pos.face_neighbors();
    /// assert_eq!(neighbors.len(), 6);
    /// assert!(neighbors.contains(&BlockPos::new(1, 0, 0)));
    /// assert!(neighbors.contains(&BlockPos::new(0, -1, 0)));
    /// ```
    #[must_use]
    pub const fn face_neighbors(self) -> [Self; 6] {
        [
            Self::new(self.x.wrapping_add(1), self.y, self.z),
            Self::new(self.x.wrapping_sub(1), self.y, self.z),
            Self::new(self.x, self.y.wrapping_add(1), self.z),
            Self::new(self.x, self.y.wrapping_sub(1), self.z),
            Self::new(self.x, self.y, self.z.wrapping_add(1)),
            Self::new(self.x, self.y, self.z.wrapping_sub(1)),
        ]
    }

    /// Converts to a floating-point point (block-corner world coordinates).
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    /// use nalgebra::Point3;
    ///
    /// let pos = BlockPos::new(1, 2, 3);
    /// assert_eq!(pos.to_point(), Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Converts to a floating-point vector.
    ///
    /// # Example
    ///
    /// ```
    /// use block_volume::BlockPos;
    /// use nalgebra::Vector3;
    ///
    /// let pos = BlockPos::new(1, 2, 3);
    /// assert_eq!(pos.to_vector(), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<BlockPos> for (i32, i32, i32) {
    fn from(pos: BlockPos) -> Self {
        pos.as_tuple()
    }
}

impl From<BlockPos> for [i32; 3] {
    fn from(pos: BlockPos) -> Self {
        pos.as_array()
    }
}

impl std::ops::Add for BlockPos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl std::ops::Sub for BlockPos {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

impl std::ops::Neg for BlockPos {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(
            self.x.wrapping_neg(),
            self.y.wrapping_neg(),
            self.z.wrapping_neg(),
        )
    }
}
