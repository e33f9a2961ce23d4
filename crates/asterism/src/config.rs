//! Configuration types for Asterism rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RenderConfig`] - Controls the fill character and the default draw depth.
//!
//! # Example
//!
//! ```
//! # use asterism::config::AppConfig;
//! let config: AppConfig = toml::from_str("[render]\nfill = \"#\"\ndraw_depth = 2").unwrap();
//! assert_eq!(config.render().fill(), Ok('#'));
//! assert_eq!(config.render().draw_depth(), Some(2));
//! ```

use serde::Deserialize;

use crate::Scene;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Rendering options applied to every scene.
///
/// Fields that are not set fall back to [`Scene`] defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RenderConfig {
    /// Character drawn in filled cells, as a one-character string.
    #[serde(default)]
    fill: Option<String>,

    /// Draw depth cutoff used when a scene does not set its own.
    #[serde(default)]
    draw_depth: Option<i32>,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `fill` - Fill character, or `None` for [`Scene::FILL`].
    /// * `draw_depth` - Default draw depth cutoff.
    pub fn new(fill: Option<char>, draw_depth: Option<i32>) -> Self {
        Self {
            fill: fill.map(String::from),
            draw_depth,
        }
    }

    /// Returns the fill character, or [`Scene::FILL`] if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not exactly one character.
    pub fn fill(&self) -> Result<char, String> {
        let Some(fill) = &self.fill else {
            return Ok(Scene::FILL);
        };

        let mut chars = fill.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(format!(
                "fill must be a single character, got {fill:?}"
            )),
        }
    }

    /// Returns the default draw depth cutoff
    pub fn draw_depth(&self) -> Option<i32> {
        self.draw_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.render().fill(), Ok('*'));
        assert_eq!(config.render().draw_depth(), None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.render().fill(), Ok(Scene::FILL));
    }

    #[test]
    fn test_invalid_fill() {
        let config: AppConfig = toml::from_str("[render]\nfill = \"ab\"").unwrap();
        assert!(config.render().fill().is_err());

        let config: AppConfig = toml::from_str("[render]\nfill = \"\"").unwrap();
        assert!(config.render().fill().is_err());
    }

    #[test]
    fn test_new() {
        let config = AppConfig::new(RenderConfig::new(Some('o'), Some(3)));
        assert_eq!(config.render().fill(), Ok('o'));
        assert_eq!(config.render().draw_depth(), Some(3));
    }
}
