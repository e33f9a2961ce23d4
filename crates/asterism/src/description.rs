//! Declarative scene descriptions.
//!
//! A [`SceneDescription`] lists shapes together with the transforms to apply
//! to them, and can be deserialized from TOML:
//!
//! ```toml
//! draw_depth = 1
//!
//! [[shapes]]
//! kind = "rectangle"
//! depth = 1
//! from = [2.0, 2.0]
//! to = [12.0, 8.0]
//! transforms = [{ op = "rotate" }, { op = "scale", factor = 0.5 }]
//! ```
//!
//! Building the description validates every shape through the
//! `asterism_core` constructors, so invalid geometry is reported with the
//! index of the offending shape.

use std::rc::Rc;

use log::{debug, info};
use serde::Deserialize;

use asterism_core::{
    GeometryError,
    shape::{Circle, LineSegment, Point, Rectangle, Shape},
};

use crate::{AsterismError, Scene};

/// A scene as written in a description file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDescription {
    /// Draw depth cutoff for the scene.
    #[serde(default)]
    draw_depth: Option<i32>,

    /// Shapes in drawing order.
    #[serde(default)]
    shapes: Vec<ShapeDescription>,
}

/// A single shape entry in a [`SceneDescription`].
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeDescription {
    #[serde(default)]
    depth: i32,

    #[serde(flatten)]
    geometry: Geometry,

    /// Transforms applied in order after construction.
    #[serde(default)]
    transforms: Vec<Transform>,
}

/// The defining geometry of a shape, tagged by `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Point { at: [f32; 2] },
    Line { from: [f32; 2], to: [f32; 2] },
    Rectangle { from: [f32; 2], to: [f32; 2] },
    Circle { center: [f32; 2], radius: f32 },
}

/// A transform step, tagged by `op`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Transform {
    Translate { dx: f32, dy: f32 },
    Rotate,
    Scale { factor: f32 },
}

impl Transform {
    /// Applies this transform to `shape`.
    ///
    /// # Errors
    ///
    /// Returns the shape's error for an invalid scale factor.
    pub fn apply(self, shape: &mut dyn Shape) -> Result<(), GeometryError> {
        match self {
            Self::Translate { dx, dy } => shape.translate(dx, dy),
            Self::Rotate => shape.rotate(),
            Self::Scale { factor } => shape.scale(factor)?,
        }
        Ok(())
    }
}

impl SceneDescription {
    /// Parses a description from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Description`] if the source is not a valid
    /// description.
    pub fn from_toml(source: &str) -> Result<Self, AsterismError> {
        toml::from_str(source).map_err(|err| AsterismError::Description(err.to_string()))
    }

    /// Returns the draw depth cutoff, if the description sets one
    pub fn draw_depth(&self) -> Option<i32> {
        self.draw_depth
    }

    /// Returns the shape entries
    pub fn shapes(&self) -> &[ShapeDescription] {
        &self.shapes
    }

    /// Builds every shape, applies its transforms and collects them into a [`Scene`].
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Shape`] naming the first shape whose
    /// construction or transforms fail.
    pub fn into_scene(self) -> Result<Scene, AsterismError> {
        let mut scene = Scene::new();
        for (index, description) in self.shapes.into_iter().enumerate() {
            let shape = description
                .build()
                .map_err(|err| AsterismError::new_shape_error(index, err))?;
            scene.add_shape(shape);
        }

        if let Some(depth) = self.draw_depth {
            scene.set_draw_depth(depth);
        }

        info!(shapes = scene.len(); "Built scene from description");
        Ok(scene)
    }
}

impl ShapeDescription {
    /// Creates a shape entry without transforms.
    pub fn new(depth: i32, geometry: Geometry) -> Self {
        Self {
            depth,
            geometry,
            transforms: Vec::new(),
        }
    }

    /// Appends a transform step (builder style).
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Constructs the shape and applies its transforms in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`GeometryError`] raised by construction or by a transform.
    pub fn build(&self) -> Result<Rc<dyn Shape>, GeometryError> {
        let point = |[x, y]: [f32; 2]| Point::with_depth(x, y, self.depth);

        let mut shape: Box<dyn Shape> = match self.geometry {
            Geometry::Point { at } => Box::new(point(at)?),
            Geometry::Line { from, to } => Box::new(LineSegment::new(point(from)?, point(to)?)?),
            Geometry::Rectangle { from, to } => {
                Box::new(Rectangle::new(point(from)?, point(to)?)?)
            }
            Geometry::Circle { center, radius } => Box::new(Circle::new(point(center)?, radius)?),
        };

        for transform in &self.transforms {
            transform.apply(&mut *shape)?;
        }
        debug!(
            dimension = shape.dimension().value(),
            transforms = self.transforms.len();
            "Built shape"
        );

        Ok(Rc::from(shape))
    }
}
