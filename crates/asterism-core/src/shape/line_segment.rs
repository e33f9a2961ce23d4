//! Provides `LineSegment`, an axis-aligned one-dimensional shape.

use log::{debug, trace};

use crate::{
    GeometryError,
    shape::{Dimension, Point, Shape, check_scale_factor, is_resolvable_extent},
};

/// A horizontal or vertical line segment.
///
/// The two endpoints always share exactly one coordinate: the x-coordinate for
/// a vertical segment, the y-coordinate for a horizontal one. Every transform
/// preserves that invariant, and both endpoints carry the segment's depth.
///
/// # Examples
///
/// ```
/// # use asterism_core::shape::{LineSegment, Point, Shape};
/// let mut segment = LineSegment::new(Point::new(0.0, 0.0), Point::new(0.0, 4.0)).unwrap();
/// assert_eq!(segment.length(), 4.0);
///
/// segment.rotate();
/// assert_eq!(segment.x_min(), -2.0);
/// assert_eq!(segment.x_max(), 2.0);
/// assert_eq!(segment.y_min(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    a: Point,
    b: Point,
}

impl LineSegment {
    /// Creates a segment between `p` and `q`, taking the depth of `p`.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DepthMismatch`] if the points have different depths
    /// - [`GeometryError::NotAxisAligned`] if the segment is neither horizontal nor vertical
    /// - [`GeometryError::CoincidentEndpoints`] if both points are at the same position
    pub fn new(p: Point, q: Point) -> Result<Self, GeometryError> {
        if p.depth() != q.depth() {
            debug!(first = p.depth(), second = q.depth(); "Rejected line segment with mixed depths");
            return Err(GeometryError::DepthMismatch {
                first: p.depth(),
                second: q.depth(),
            });
        }
        if p.x() != q.x() && p.y() != q.y() {
            debug!("Rejected diagonal line segment");
            return Err(GeometryError::NotAxisAligned);
        }
        if p.same_position(q) {
            debug!("Rejected zero-length line segment");
            return Err(GeometryError::CoincidentEndpoints);
        }
        Ok(Self { a: p, b: q })
    }

    /// Returns the two endpoints in construction order.
    pub fn endpoints(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    /// Returns true if both endpoints share their x-coordinate.
    pub fn is_vertical(&self) -> bool {
        self.a.x() == self.b.x()
    }

    pub fn x_min(&self) -> f32 {
        self.a.x().min(self.b.x())
    }

    pub fn x_max(&self) -> f32 {
        self.a.x().max(self.b.x())
    }

    pub fn y_min(&self) -> f32 {
        self.a.y().min(self.b.y())
    }

    pub fn y_max(&self) -> f32 {
        self.a.y().max(self.b.y())
    }

    /// Returns the length of the segment along its varying axis.
    pub fn length(&self) -> f32 {
        if self.is_vertical() {
            self.y_max() - self.y_min()
        } else {
            self.x_max() - self.x_min()
        }
    }

    /// Returns the midpoint of the segment
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }

    /// Returns true if the length is finite and large enough to survive
    /// rounding at the segment's coordinates.
    fn is_resolvable(&self) -> bool {
        let magnitude = self.a.magnitude().max(self.b.magnitude());
        is_resolvable_extent(self.length(), magnitude)
    }
}

impl Shape for LineSegment {
    fn depth(&self) -> i32 {
        self.a.depth()
    }

    fn set_depth(&mut self, depth: i32) -> bool {
        // Both endpoints accept or reject the same value.
        self.a.set_depth(depth) && self.b.set_depth(depth)
    }

    fn dimension(&self) -> Dimension {
        Dimension::Line
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.a.translate(dx, dy);
        self.b.translate(dx, dy);
    }

    /// Rotates the segment a quarter turn clockwise around its midpoint.
    ///
    /// The offset of each endpoint from the midpoint lies entirely on the
    /// varying axis, so after rotation it lies entirely on the other axis and
    /// the shared coordinate becomes exactly the midpoint's.
    fn rotate(&mut self) {
        let mid = self.midpoint();
        self.a = self.a.rotated_about(mid);
        self.b = self.b.rotated_about(mid);
        trace!(vertical = self.is_vertical(), length = self.length(); "Rotated line segment");
    }

    fn scale(&mut self, factor: f32) -> Result<(), GeometryError> {
        check_scale_factor(factor)?;
        if factor == 1.0 {
            return Ok(());
        }

        let mid = self.midpoint();
        let scaled = Self {
            a: self.a.scaled_about(mid, factor),
            b: self.b.scaled_about(mid, factor),
        };
        if !scaled.is_resolvable() {
            debug!(factor, length = self.length(); "Rejected scale that collapses line segment");
            return Err(GeometryError::DegenerateScale(factor));
        }

        *self = scaled;
        trace!(factor, length = self.length(); "Scaled line segment");
        Ok(())
    }

    fn contains(&self, point: Point) -> bool {
        if self.is_vertical() {
            point.x() == self.a.x() && point.y() >= self.y_min() && point.y() <= self.y_max()
        } else {
            point.y() == self.a.y() && point.x() >= self.x_min() && point.x() <= self.x_max()
        }
    }
}
