//! Error types for Asterism operations.
//!
//! This module provides the main error type [`AsterismError`] which wraps
//! the conditions that can occur while loading and building scenes.

use std::io;

use thiserror::Error;

use asterism_core::GeometryError;

/// The main error type for Asterism operations.
#[derive(Debug, Error)]
pub enum AsterismError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid shape: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Invalid shape #{index}: {source}")]
    Shape {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("Invalid scene description: {0}")]
    Description(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AsterismError {
    /// Create a new `Shape` error for the shape at `index` in a description.
    pub fn new_shape_error(index: usize, source: GeometryError) -> Self {
        Self::Shape { index, source }
    }
}
