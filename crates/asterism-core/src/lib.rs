//! Asterism Core Shapes
//!
//! This crate provides the shape primitives rendered by Asterism scenes:
//!
//! - **Points**: zero-dimensional coordinate carriers ([`shape::Point`])
//! - **Line segments**: axis-aligned segments between two endpoints ([`shape::LineSegment`])
//! - **Rectangles**: axis-aligned rectangles spanned by two corners ([`shape::Rectangle`])
//! - **Circles**: a center and a strictly positive radius ([`shape::Circle`])
//!
//! Every shape implements the [`shape::Shape`] capability trait; shapes with an
//! area additionally implement [`shape::TwoDShape`].
//!
//! # Coordinate System
//!
//! Coordinates are `f32` with the y-axis pointing up. Rotations turn a shape
//! a quarter turn clockwise around its own center.

pub mod error;
pub mod shape;

pub use error::{ErrorKind, GeometryError};
