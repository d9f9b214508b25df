//! Error types for volume operations.

use crate::volume::VolumeKind;

/// Errors that can occur during volume operations.
///
/// Every fallible method either completes fully or leaves its receiver
/// untouched; a returned error never implies partial mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum VolumeError {
    /// A coordinate or computed capacity exceeds the representable integer domain.
    #[error("coordinate or capacity out of the representable integer range")]
    OutOfRange,

    /// The operation requires at least one position, but the volume is empty.
    #[error("operation requires a non-empty volume")]
    EmptyVolume,

    /// Two volumes of different kinds were classified against each other
    /// without first projecting both to a bounding box.
    #[error("cannot classify {left:?} against {right:?} without projecting to a bounding box")]
    UnsupportedComparison {
        /// Kind of the receiver volume.
        left: VolumeKind,
        /// Kind of the argument volume.
        right: VolumeKind,
    },
}
