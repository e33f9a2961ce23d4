//! CLI logic for the Asterism renderer.
//!
//! This module contains the core CLI logic: load configuration, read a
//! scene description, render it and write the character grid.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use asterism::{AsterismError, SceneBuilder};

/// Run the Asterism CLI application
///
/// This function renders the scene described by the input file and writes
/// the grid to the output file, or to stdout when no output is given.
///
/// # Errors
///
/// Returns `AsterismError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed scene descriptions
/// - Invalid shapes
pub fn run(args: &Args) -> Result<(), AsterismError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Rendering scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = SceneBuilder::new(app_config);
    let scene = builder.parse(&source)?;
    let grid = builder.render(&scene);

    match &args.output {
        Some(output) => {
            fs::write(output, grid)?;
            info!(output_file = output; "Scene written successfully");
        }
        None => io::stdout().lock().write_all(grid.as_bytes())?,
    }

    Ok(())
}
