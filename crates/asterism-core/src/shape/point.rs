//! Provides `Point`, the zero-dimensional shape.

use log::trace;

use crate::{
    GeometryError,
    shape::{Depth, Dimension, Shape, check_scale_factor},
};

/// A 2D point with a drawing depth.
///
/// Points are shapes in their own right and also the coordinate carrier used
/// to build the other shapes and to query containment.
///
/// # Examples
///
/// ```
/// # use asterism_core::shape::{Point, Shape};
/// let mut p = Point::new(10.0, 20.0);
/// p.translate(5.0, -5.0);
/// assert_eq!(p.x(), 15.0);
/// assert_eq!(p.y(), 15.0);
/// assert!(p.contains(Point::new(15.0, 15.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
    depth: Depth,
}

impl Point {
    /// Creates a new point at depth 0
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            depth: Depth::default(),
        }
    }

    /// Creates a new point at the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDepth`] if `depth` is negative.
    pub fn with_depth(x: f32, y: f32, depth: i32) -> Result<Self, GeometryError> {
        Ok(Self {
            x,
            y,
            depth: Depth::new(depth)?,
        })
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns true if both points have exactly the same coordinates.
    ///
    /// Unlike `==`, depth is not compared.
    pub fn same_position(self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Calculates the midpoint between this point and another point.
    ///
    /// The result keeps the depth of `self`.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            ..self
        }
    }

    /// Calculates the Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point rotated a quarter turn clockwise around `center`.
    pub(crate) fn rotated_about(self, center: Point) -> Self {
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Self {
            x: center.x + dy,
            y: center.y - dx,
            ..self
        }
    }

    /// Returns the larger absolute value of the two coordinates.
    pub(crate) fn magnitude(self) -> f32 {
        self.x.abs().max(self.y.abs())
    }

    /// Returns this point with its offset from `center` multiplied by `factor`.
    pub(crate) fn scaled_about(self, center: Point, factor: f32) -> Self {
        Self {
            x: center.x + (self.x - center.x) * factor,
            y: center.y + (self.y - center.y) * factor,
            ..self
        }
    }
}

impl Shape for Point {
    fn depth(&self) -> i32 {
        self.depth.get()
    }

    fn set_depth(&mut self, depth: i32) -> bool {
        self.depth.set(depth)
    }

    fn dimension(&self) -> Dimension {
        Dimension::Point
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
        trace!(x = self.x, y = self.y; "Translated point");
    }

    /// A point has no extent, so rotation has no effect.
    fn rotate(&mut self) {}

    /// Only validates `factor`; a point has no extent to scale.
    fn scale(&mut self, factor: f32) -> Result<(), GeometryError> {
        check_scale_factor(factor)
    }

    fn contains(&self, point: Point) -> bool {
        self.same_position(point)
    }
}
