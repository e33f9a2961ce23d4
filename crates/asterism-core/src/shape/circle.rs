//! Provides `Circle`, a rotationally symmetric two-dimensional shape.

use log::{debug, trace};

use crate::{
    GeometryError,
    shape::{Dimension, PI, Point, Shape, TwoDShape, check_scale_factor},
};

/// A circle defined by its center and a strictly positive radius.
///
/// # Examples
///
/// ```
/// # use asterism_core::shape::{Circle, Point, Shape};
/// let circle = Circle::new(Point::new(0.0, 0.0), 5.0).unwrap();
/// assert!(circle.contains(Point::new(3.0, 4.0)));
/// assert!(!circle.contains(Point::new(3.0, 4.001)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
}

impl Circle {
    /// Creates a circle around `center`, taking its depth.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveRadius`] if `radius` is not strictly positive.
    pub fn new(center: Point, radius: f32) -> Result<Self, GeometryError> {
        if radius.is_nan() || radius <= 0.0 {
            debug!(radius; "Rejected circle radius");
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Returns the x-coordinate of the center
    pub fn x(&self) -> f32 {
        self.center.x()
    }

    /// Returns the y-coordinate of the center
    pub fn y(&self) -> f32 {
        self.center.y()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Circle {
    fn depth(&self) -> i32 {
        self.center.depth()
    }

    fn set_depth(&mut self, depth: i32) -> bool {
        self.center.set_depth(depth)
    }

    fn dimension(&self) -> Dimension {
        Dimension::Area
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.center.translate(dx, dy);
    }

    /// A circle looks the same after any rotation around its center.
    fn rotate(&mut self) {}

    fn scale(&mut self, factor: f32) -> Result<(), GeometryError> {
        check_scale_factor(factor)?;
        let radius = self.radius * factor;
        if !radius.is_finite() || radius <= 0.0 {
            debug!(factor, radius = self.radius; "Rejected scale that collapses circle");
            return Err(GeometryError::DegenerateScale(factor));
        }

        self.radius = radius;
        trace!(factor, radius = self.radius; "Scaled circle");
        Ok(())
    }

    fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

impl TwoDShape for Circle {
    fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }
}
