//! Provides `Rectangle`, an axis-aligned two-dimensional shape.

use log::{debug, trace};

use crate::{
    GeometryError,
    shape::{Dimension, Point, Shape, TwoDShape, check_scale_factor, is_resolvable_extent},
};

/// An axis-aligned rectangle spanned by two opposite corners.
///
/// The corners are stored as given rather than normalized to min/max, and
/// they never share an x- or y-coordinate. Minimum and maximum extents are
/// derived on demand.
///
/// # Examples
///
/// ```
/// # use asterism_core::shape::{Point, Rectangle, Shape, TwoDShape};
/// let mut rect = Rectangle::new(Point::new(0.0, 0.0), Point::new(4.0, 2.0)).unwrap();
/// assert_eq!(rect.area(), 8.0);
///
/// rect.rotate();
/// assert_eq!(rect.width(), 2.0);
/// assert_eq!(rect.height(), 4.0);
/// assert_eq!(rect.center(), Point::new(2.0, 1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    a: Point,
    b: Point,
}

impl Rectangle {
    /// Creates a rectangle with opposite corners `p` and `q`, taking the depth of `p`.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DepthMismatch`] if the corners have different depths
    /// - [`GeometryError::DegenerateRectangle`] if the corners share an x- or y-coordinate
    pub fn new(p: Point, q: Point) -> Result<Self, GeometryError> {
        if p.depth() != q.depth() {
            debug!(first = p.depth(), second = q.depth(); "Rejected rectangle with mixed depths");
            return Err(GeometryError::DepthMismatch {
                first: p.depth(),
                second: q.depth(),
            });
        }
        if p.x() == q.x() || p.y() == q.y() {
            debug!("Rejected degenerate rectangle");
            return Err(GeometryError::DegenerateRectangle);
        }
        Ok(Self { a: p, b: q })
    }

    /// Returns the two corners in construction order.
    pub fn corners(&self) -> (Point, Point) {
        (self.a, self.b)
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

    /// Returns the horizontal extent
    pub fn width(&self) -> f32 {
        self.x_max() - self.x_min()
    }

    /// Returns the vertical extent
    pub fn height(&self) -> f32 {
        self.y_max() - self.y_min()
    }

    /// Returns the center of the rectangle
    pub fn center(&self) -> Point {
        self.a.midpoint(self.b)
    }

    /// Returns true if both extents are finite and large enough to survive
    /// rounding at the rectangle's coordinates.
    fn is_resolvable(&self) -> bool {
        let magnitude = self.a.magnitude().max(self.b.magnitude());
        is_resolvable_extent(self.width(), magnitude)
            && is_resolvable_extent(self.height(), magnitude)
    }
}

impl Shape for Rectangle {
    fn depth(&self) -> i32 {
        self.a.depth()
    }

    fn set_depth(&mut self, depth: i32) -> bool {
        self.a.set_depth(depth) && self.b.set_depth(depth)
    }

    fn dimension(&self) -> Dimension {
        Dimension::Area
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.a.translate(dx, dy);
        self.b.translate(dx, dy);
    }

    /// Rotates the rectangle a quarter turn clockwise around its center,
    /// swapping width and height.
    fn rotate(&mut self) {
        let center = self.center();
        self.a = self.a.rotated_about(center);
        self.b = self.b.rotated_about(center);
        trace!(width = self.width(), height = self.height(); "Rotated rectangle");
    }

    fn scale(&mut self, factor: f32) -> Result<(), GeometryError> {
        check_scale_factor(factor)?;
        if factor == 1.0 {
            return Ok(());
        }

        let center = self.center();
        let scaled = Self {
            a: self.a.scaled_about(center, factor),
            b: self.b.scaled_about(center, factor),
        };
        if !scaled.is_resolvable() {
            debug!(factor, area = self.area(); "Rejected scale that collapses rectangle");
            return Err(GeometryError::DegenerateScale(factor));
        }

        *self = scaled;
        trace!(factor, width = self.width(), height = self.height(); "Scaled rectangle");
        Ok(())
    }

    fn contains(&self, point: Point) -> bool {
        point.x() >= self.x_min()
            && point.x() <= self.x_max()
            && point.y() >= self.y_min()
            && point.y() <= self.y_max()
    }
}

impl TwoDShape for Rectangle {
    fn area(&self) -> f32 {
        self.width() * self.height()
    }
}
