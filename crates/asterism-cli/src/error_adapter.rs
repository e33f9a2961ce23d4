//! Error adapter for converting AsterismError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's report formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use asterism::AsterismError;

/// Adapter giving an [`AsterismError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a AsterismError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AsterismError::Io(_) => "asterism::io",
            AsterismError::Geometry(_) | AsterismError::Shape { .. } => "asterism::geometry",
            AsterismError::Description(_) => "asterism::description",
            AsterismError::Config(_) => "asterism::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            AsterismError::Io(_) => return None,
            AsterismError::Geometry(_) | AsterismError::Shape { .. } => {
                "lines must be horizontal or vertical, rectangles need distinct corners, \
                 and radii, scale factors and depths must be in range"
            }
            AsterismError::Description(_) => {
                "each [[shapes]] entry needs a `kind` of point, line, rectangle or circle"
            }
            AsterismError::Config(_) => "`render.fill` must be a single character",
        };
        Some(Box::new(help))
    }
}
