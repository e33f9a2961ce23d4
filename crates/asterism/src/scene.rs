//! Character-grid rendering of shape collections.
//!
//! A [`Scene`] holds shared references to shapes and rasterizes their union
//! onto a fixed [`Scene::WIDTH`] × [`Scene::HEIGHT`] grid. Every integer cell
//! is tested against every shape with [`Shape::contains`]; a cell is filled
//! when at least one visible shape contains it.
//!
//! ```text
//!  y = HEIGHT-1  ┌────────────────────┐  first line of output
//!                │                    │
//!                │                    │
//!  y = 0         └────────────────────┘  last line of output
//!              x = 0             x = WIDTH-1
//! ```

use std::{fmt, rc::Rc};

use log::debug;

use asterism_core::shape::{Point, Shape};

/// A collection of shapes rendered onto a fixed character grid.
///
/// Shapes are never removed once added, and rendering never mutates the
/// scene. The scene holds [`Rc`] handles and is therefore confined to a
/// single thread.
///
/// # Examples
///
/// ```
/// # use std::rc::Rc;
/// # use asterism::Scene;
/// # use asterism::shape::{Circle, Point};
/// let mut scene = Scene::new();
/// scene.add_shape(Rc::new(Circle::new(Point::new(30.0, 10.0), 5.0).unwrap()));
///
/// let output = scene.render();
/// assert_eq!(output.lines().count(), Scene::HEIGHT);
/// assert!(scene.is_filled(30, 10));
/// assert!(!scene.is_filled(30, 16));
/// ```
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Rc<dyn Shape>>,
    draw_depth: Option<i32>,
    fill: char,
}

impl Scene {
    /// Number of columns in the rendered grid.
    pub const WIDTH: usize = 60;
    /// Number of rows in the rendered grid.
    pub const HEIGHT: usize = 20;
    /// Default character for filled cells.
    pub const FILL: char = '*';

    /// Creates an empty scene without a draw depth cutoff.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            draw_depth: None,
            fill: Self::FILL,
        }
    }

    /// Sets the character used for filled cells (builder style).
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Returns the character used for filled cells
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Appends a shape to the scene.
    pub fn add_shape(&mut self, shape: Rc<dyn Shape>) {
        debug!(
            index = self.shapes.len(),
            depth = shape.depth(),
            dimension = shape.dimension().value();
            "Added shape to scene"
        );
        self.shapes.push(shape);
    }

    /// Activates the draw depth cutoff.
    ///
    /// Only shapes with a depth less than or equal to `depth` are drawn.
    /// The value is not validated; a negative cutoff hides every shape.
    pub fn set_draw_depth(&mut self, depth: i32) {
        debug!(depth; "Set scene draw depth");
        self.draw_depth = Some(depth);
    }

    /// Returns the draw depth cutoff, if one has been set
    pub fn draw_depth(&self) -> Option<i32> {
        self.draw_depth
    }

    /// Returns the shapes in insertion order
    pub fn shapes(&self) -> &[Rc<dyn Shape>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns true if any visible shape contains the grid cell `(x, y)`.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        let point = Point::new(x as f32, y as f32);
        self.shapes
            .iter()
            .any(|shape| self.is_visible(&**shape) && shape.contains(point))
    }

    /// Renders the scene to a string of [`Scene::HEIGHT`] newline-terminated
    /// rows of [`Scene::WIDTH`] characters, top row first.
    pub fn render(&self) -> String {
        debug!(
            shapes = self.shapes.len(),
            draw_depth:? = self.draw_depth;
            "Rendering scene"
        );
        self.to_string()
    }

    fn is_visible(&self, shape: &dyn Shape) -> bool {
        self.draw_depth.is_none_or(|cutoff| shape.depth() <= cutoff)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..Self::HEIGHT).rev() {
            for x in 0..Self::WIDTH {
                let cell = if self.is_filled(x, y) { self.fill } else { ' ' };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use asterism_core::shape::{Circle, LineSegment, Rectangle};

    use super::*;

    /// Returns the character at grid cell `(x, y)` of a rendered scene.
    fn cell(output: &str, x: usize, y: usize) -> char {
        let row = output
            .lines()
            .nth(Scene::HEIGHT - 1 - y)
            .expect("row in range");
        row.chars().nth(x).expect("column in range")
    }

    #[test]
    fn test_empty_scene_renders_blank_grid() {
        let scene = Scene::new();
        assert!(scene.is_empty());

        let output = scene.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), Scene::HEIGHT);
        assert!(lines.iter().all(|line| *line == " ".repeat(Scene::WIDTH)));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_circle_render() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(
            Circle::new(Point::new(30.0, 10.0), 5.0).unwrap(),
        ));

        let output = scene.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|line| line.chars().count() == 60));

        assert_eq!(cell(&output, 30, 10), '*');
        assert_eq!(cell(&output, 35, 10), '*');
        assert_eq!(cell(&output, 30, 16), ' ');
        assert_eq!(cell(&output, 36, 10), ' ');
    }

    #[test]
    fn test_rows_are_emitted_top_down() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(Point::new(0.0, 0.0)));
        scene.add_shape(Rc::new(Point::new(59.0, 19.0)));

        let output = scene.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0].chars().last(), Some('*'));
        assert_eq!(lines[19].chars().next(), Some('*'));
        assert_eq!(output.matches('*').count(), 2);
    }

    #[test]
    fn test_shapes_outside_grid_are_clipped() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(
            Rectangle::new(Point::new(-10.0, -10.0), Point::new(-1.0, -1.0)).unwrap(),
        ));
        scene.add_shape(Rc::new(Point::new(60.0, 5.0)));

        assert!(!scene.render().contains('*'));
    }

    #[test]
    fn test_draw_depth_cutoff() {
        let shallow = Rectangle::new(
            Point::with_depth(0.0, 0.0, 1).unwrap(),
            Point::with_depth(10.0, 10.0, 1).unwrap(),
        )
        .unwrap();
        let deep = Rectangle::new(
            Point::with_depth(5.0, 5.0, 2).unwrap(),
            Point::with_depth(15.0, 15.0, 2).unwrap(),
        )
        .unwrap();

        let mut scene = Scene::new();
        scene.add_shape(Rc::new(shallow));
        scene.add_shape(Rc::new(deep));
        assert!(scene.is_filled(12, 12));

        scene.set_draw_depth(1);
        assert_eq!(scene.draw_depth(), Some(1));
        let output = scene.render();
        assert_eq!(cell(&output, 2, 2), '*');
        assert_eq!(cell(&output, 8, 8), '*');
        assert_eq!(cell(&output, 12, 12), ' ');
        assert_eq!(cell(&output, 15, 5), ' ');
    }

    #[test]
    fn test_negative_draw_depth_hides_everything() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(
            Circle::new(Point::new(10.0, 10.0), 3.0).unwrap(),
        ));
        scene.set_draw_depth(-1);
        assert!(!scene.render().contains('*'));
    }

    #[test]
    fn test_line_segment_render() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(
            LineSegment::new(Point::new(2.0, 3.0), Point::new(8.0, 3.0)).unwrap(),
        ));

        let output = scene.render();
        assert_eq!(output.matches('*').count(), 7);
        assert_eq!(cell(&output, 2, 3), '*');
        assert_eq!(cell(&output, 8, 3), '*');
    }

    #[test]
    fn test_custom_fill() {
        let mut scene = Scene::new().with_fill('#');
        scene.add_shape(Rc::new(Point::new(1.0, 1.0)));

        let output = scene.render();
        assert_eq!(scene.fill(), '#');
        assert_eq!(cell(&output, 1, 1), '#');
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut scene = Scene::default();
        scene.add_shape(Rc::new(Point::new(1.0, 1.0)));
        scene.add_shape(Rc::new(Circle::new(Point::new(1.0, 1.0), 1.0).unwrap()));

        assert_eq!(scene.len(), 2);
        let dimensions: Vec<u8> = scene
            .shapes()
            .iter()
            .map(|shape| shape.dimension().value())
            .collect();
        assert_eq!(dimensions, vec![0, 2]);
    }

    #[test]
    fn test_shared_shape_is_not_copied() {
        let circle: Rc<dyn Shape> = Rc::new(Circle::new(Point::new(5.0, 5.0), 2.0).unwrap());
        let mut scene = Scene::new();
        scene.add_shape(Rc::clone(&circle));

        assert_eq!(Rc::strong_count(&circle), 2);
        assert!(Rc::ptr_eq(&scene.shapes()[0], &circle));
    }
}
