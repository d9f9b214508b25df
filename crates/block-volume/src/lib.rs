//! Block-volume spatial model.
//!
//! This crate provides the axis-aligned integer-region model backing a game
//! scripting surface: volumes of discrete block positions, the queries that
//! classify their geometric relationships, and the iteration machinery that
//! walks the positions they contain:
//!
//! - [`BlockPos`] - Integer block-grid position
//! - [`CornerVolume`] - Box volume defined by two identity-preserving corners
//! - [`PositionSet`] - Volume defined by an explicit set of unique positions
//! - [`BlockVolume`] - Closed tagged variant over the two concrete kinds
//! - [`VolumeRelation`] - Disjoint / Intersects / Contains classification
//! - [`VolumeError`] - Out-of-range, empty-volume, and cross-kind errors
//!
//! # Layer 0 Crate
//!
//! This is a pure value/algorithm library with no engine dependencies: no
//! I/O, no logging, no async, no world state. A higher-level world-query
//! collaborator consumes the iterators produced here and asks an external
//! block-content provider about each position; none of that lives in this
//! crate.
//!
//! # Corner Identity
//!
//! A [`CornerVolume`] stores its two corners exactly as the caller supplied
//! them and never normalizes, so interactive tools can rely on which corner
//! is "from" and which is "to" across mutation. Ordered `min`/`max` bounds
//! are always derived on demand.
//!
//! # Example
//!
//! ```
//! use block_volume::{BlockPos, CornerVolume, VolumeRelation};
//!
//! let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(4, 4, 4));
//! assert_eq!(volume.capacity().unwrap(), 125);
//! assert!(volume.contains(BlockPos::new(2, 2, 2)));
//!
//! let inner = CornerVolume::new(BlockPos::new(1, 1, 1), BlockPos::new(2, 2, 2));
//! assert_eq!(volume.relation_to(&inner), VolumeRelation::Contains);
//! ```
//!
//! # Iteration
//!
//! Box volumes iterate in a documented order: X varies fastest, then Z,
//! then Y, so a full X–Z plane completes before Y increments. The iterator
//! is a pure index-to-coordinate mapping, and [`CornerVolume::position_at`]
//! exposes the same mapping for random access.
//!
//! ```
//! use block_volume::{BlockPos, CornerVolume};
//!
//! let volume = CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1));
//! let first: Vec<_> = volume.iter().take(3).collect();
//! assert_eq!(
//!     first,
//!     [BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 0), BlockPos::new(0, 0, 1)]
//! );
//! ```
//!
//! # Sparse Sets and Explicit Projection
//!
//! A [`PositionSet`] has set semantics: its capacity is its member count
//! and its extremes fail on an empty set. Classifying a set against a box
//! requires projecting it to its bounding box on purpose; the crate never
//! does so implicitly.
//!
//! ```
//! use block_volume::{BlockPos, BlockVolume, CornerVolume, PositionSet, VolumeError};
//!
//! let sparse: BlockVolume = PositionSet::from(vec![BlockPos::new(1, 1, 1)]).into();
//! let boxed: BlockVolume =
//!     CornerVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(4, 4, 4)).into();
//!
//! assert!(matches!(
//!     boxed.try_relation(&sparse),
//!     Err(VolumeError::UnsupportedComparison { .. })
//! ));
//! let projected: BlockVolume = sparse.to_bounds().unwrap().into();
//! assert!(boxed.try_relation(&projected).is_ok());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod error;
mod position;
mod relation;
mod set;
mod volume;

// Re-export core types
pub use bounds::{CornerVolume, CornerVolumeIter};
pub use error::VolumeError;
pub use position::BlockPos;
pub use relation::VolumeRelation;
pub use set::{PositionSet, PositionSetIter};
pub use volume::{BlockVolume, BlockVolumeIter, VolumeKind};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
