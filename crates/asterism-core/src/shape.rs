//! Shape capability traits and the concrete shape types.
//!
//! This module provides the [`Shape`] trait implemented by every primitive and
//! the narrower [`TwoDShape`] trait for shapes that enclose an area.
//!
//! # Overview
//!
//! - [`Point`] - A single coordinate, dimension 0
//! - [`LineSegment`] - A horizontal or vertical segment, dimension 1
//! - [`Rectangle`] - An axis-aligned rectangle, dimension 2
//! - [`Circle`] - A circle with positive radius, dimension 2
//!
//! # Error Policy
//!
//! Constructors and [`Shape::scale`] fail fast with a
//! [`GeometryError`](crate::GeometryError) and leave nothing half-built or
//! half-modified. [`Shape::set_depth`] instead declines softly by returning
//! `false`.

use std::fmt;

use log::debug;

use crate::GeometryError;

mod circle;
mod line_segment;
mod point;
mod rectangle;

pub use circle::Circle;
pub use line_segment::LineSegment;
pub use point::Point;
pub use rectangle::Rectangle;

/// The constant pi used for area calculations.
#[allow(clippy::approx_constant)]
pub const PI: f32 = 3.1415926;

/// Topological dimension of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    /// A single point.
    Point = 0,
    /// A line segment.
    Line = 1,
    /// A shape enclosing an area.
    Area = 2,
}

impl Dimension {
    /// Returns the dimension as a number (0, 1 or 2).
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<Dimension> for u8 {
    fn from(dimension: Dimension) -> Self {
        dimension.value()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The capability set shared by every shape.
///
/// The trait is object safe so heterogeneous shapes can be stored as
/// `Rc<dyn Shape>` and queried polymorphically.
pub trait Shape: fmt::Debug {
    /// Returns the drawing depth of the shape.
    fn depth(&self) -> i32;

    /// Sets the drawing depth.
    ///
    /// Returns `false` and leaves the depth untouched when `depth` is negative.
    fn set_depth(&mut self, depth: i32) -> bool;

    /// Returns the dimension of the shape.
    fn dimension(&self) -> Dimension;

    /// Moves the shape horizontally by `dx` and vertically by `dy`.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotates the shape a quarter turn around its own center.
    fn rotate(&mut self);

    /// Scales the shape by `factor` relative to its own center.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::NonPositiveScale`] if `factor` is not strictly positive
    /// - [`GeometryError::DegenerateScale`] if the scaled shape would lose an
    ///   extent to rounding or overflow
    ///
    /// The shape is left unchanged on error.
    fn scale(&mut self, factor: f32) -> Result<(), GeometryError>;

    /// Returns true if `point` lies on or inside the shape.
    ///
    /// Depths are ignored and comparisons are exact.
    fn contains(&self, point: Point) -> bool;
}

/// A shape enclosing a two-dimensional region.
pub trait TwoDShape: Shape {
    /// Returns the area of the shape.
    fn area(&self) -> f32;
}

/// A validated, non-negative drawing depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Depth(i32);

impl Depth {
    pub(crate) fn new(depth: i32) -> Result<Self, GeometryError> {
        if depth < 0 {
            debug!(depth; "Rejected negative depth");
            return Err(GeometryError::NegativeDepth(depth));
        }
        Ok(Self(depth))
    }

    pub(crate) fn get(self) -> i32 {
        self.0
    }

    pub(crate) fn set(&mut self, depth: i32) -> bool {
        if depth < 0 {
            debug!(depth, current = self.0; "Ignored negative depth update");
            return false;
        }
        self.0 = depth;
        true
    }
}

/// Checks that a scale factor is strictly positive.
///
/// NaN is rejected as well since it compares false against zero.
pub(crate) fn check_scale_factor(factor: f32) -> Result<(), GeometryError> {
    if factor > 0.0 {
        Ok(())
    } else {
        debug!(factor; "Rejected scale factor");
        Err(GeometryError::NonPositiveScale(factor))
    }
}

/// Smallest extent a scaled shape may keep, relative to its largest coordinate.
///
/// At sixteen units in the last place, the rounding of a few later rotations or
/// translations cannot shrink the extent to zero.
const MIN_RELATIVE_EXTENT: f32 = 16.0 * f32::EPSILON;

/// Returns true if `extent` is finite and distinguishable at `magnitude`.
pub(crate) fn is_resolvable_extent(extent: f32, magnitude: f32) -> bool {
    extent.is_finite()
        && magnitude.is_finite()
        && extent > 0.0
        && extent >= MIN_RELATIVE_EXTENT * magnitude
}
