//! Asterism - render unions of simple shapes onto a character grid.
//!
//! Shapes come from [`asterism_core`]; this crate adds the [`Scene`]
//! renderer, declarative [`description`]s of scenes and the rendering
//! [`config`].

pub mod config;
pub mod description;

mod error;
mod scene;

pub use asterism_core::{GeometryError, shape};

pub use error::AsterismError;
pub use scene::Scene;

use log::{debug, trace};

use config::AppConfig;
use description::SceneDescription;

/// Builder for parsing and rendering Asterism scene descriptions.
///
/// # Examples
///
/// ```
/// use asterism::{SceneBuilder, config::AppConfig};
///
/// let source = r#"
///     [[shapes]]
///     kind = "circle"
///     center = [30.0, 10.0]
///     radius = 5.0
/// "#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let scene = builder.parse(source).expect("Failed to parse");
/// let output = builder.render(&scene);
/// assert_eq!(output.lines().count(), 20);
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML scene description into a [`Scene`].
    ///
    /// The configured fill character is applied, and the configured draw
    /// depth is used when the description does not set one.
    ///
    /// # Errors
    ///
    /// Returns `AsterismError` for:
    /// - Malformed descriptions
    /// - Invalid shapes or transforms
    /// - An invalid configured fill character
    pub fn parse(&self, source: &str) -> Result<Scene, AsterismError> {
        let render_config = self.config.render();
        let fill = render_config.fill().map_err(AsterismError::Config)?;

        let description = SceneDescription::from_toml(source)?;
        debug!(shapes = description.shapes().len(); "Parsed scene description");

        let mut scene = description.into_scene()?.with_fill(fill);
        if let (None, Some(depth)) = (scene.draw_depth(), render_config.draw_depth()) {
            trace!(depth; "Applying configured draw depth");
            scene.set_draw_depth(depth);
        }

        Ok(scene)
    }

    /// Render a scene to its character grid.
    pub fn render(&self, scene: &Scene) -> String {
        scene.render()
    }
}
