//! Error types for figure display and export.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that can surface while showing or exporting a figure.
///
/// The point data itself is a literal table, so nothing here concerns the
/// data layer.
#[derive(Error, Debug)]
pub enum FigureError {
    /// No window can be opened (headless session, no display server, ...).
    #[error("Display unavailable: {0}")]
    DisplayUnavailable(String),

    /// Any other failure from the rendering back-end.
    #[error("Render backend error: {0}")]
    RenderBackend(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl FigureError {
    /// `true` when falling back to file export makes sense.
    pub fn is_display_unavailable(&self) -> bool {
        matches!(self, FigureError::DisplayUnavailable(_))
    }
}

impl From<eframe::Error> for FigureError {
    fn from(err: eframe::Error) -> Self {
        match err {
            // The app factory only fails on our side, after a window exists.
            eframe::Error::AppCreation(e) => FigureError::RenderBackend(e.to_string()),
            // Everything else happens while creating the event loop, window or GPU surface.
            other => FigureError::DisplayUnavailable(other.to_string()),
        }
    }
}

/// Result alias used across the crate.
pub type FigureResult<T> = Result<T, FigureError>;
