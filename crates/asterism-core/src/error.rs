//! Error types for shape construction and transformation.

use thiserror::Error;

/// Broad category of a [`GeometryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument violated a shape invariant.
    InvalidArgument,
}

/// Errors raised when constructing or scaling a shape.
///
/// Every variant is an invalid-argument condition: the operation is aborted
/// and no shape is created or modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("depth must not be negative, got {0}")]
    NegativeDepth(i32),

    #[error("scale factor must be positive, got {0}")]
    NonPositiveScale(f32),

    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("points have different depths ({first} and {second})")]
    DepthMismatch { first: i32, second: i32 },

    #[error("line segment must be horizontal or vertical")]
    NotAxisAligned,

    #[error("line segment endpoints coincide")]
    CoincidentEndpoints,

    #[error("rectangle corners share an x- or y-coordinate")]
    DegenerateRectangle,

    #[error("scale factor {0} would collapse the shape")]
    DegenerateScale(f32),
}

impl GeometryError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
