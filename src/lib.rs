//! projscatter crate root: re-exports and module wiring.
//!
//! Renders a fixed set of 3D points as a 2×2 figure of scatter views:
//! a 3D perspective view plus the XY, YZ and XZ projections. The figure is
//! shown in an egui/eframe window, or exported to PNG/SVG when no display is
//! available.
//!
//! Modules:
//! - `points`: the literal point table and column split
//! - `projection`: pane projections and the 3D camera
//! - `figure`: back-end agnostic figure/pane model
//! - `config`: figure, view and export configuration
//! - `export`: SVG writer and PNG rasterisation
//! - `app`, `plot`, `tiles`, `run`: the interactive window

pub mod axis;
pub mod color_scheme;
pub mod config;
pub mod error;
pub mod export;
pub mod figure;
pub mod points;
pub mod projection;

mod app;
mod plot;
mod run;
pub mod tiles;

// Public re-exports for a compact external API
pub use app::FigureApp;
pub use color_scheme::{ColorScheme, Rgb};
pub use config::{ExportConfig, FigureConfig, PaneColors, ViewOptions};
pub use error::{FigureError, FigureResult};
pub use export::{export_figure, figure_to_svg, ExportFormat, ExportOptions};
pub use figure::{plotted_coordinates, render_figure, render_figure_with_view, Figure, Pane};
pub use points::{dedupe, load_points, split_coordinates, Coordinates, Point, PointStats, POINTS};
pub use projection::{Camera, Projection, Scene3d, Series};
pub use run::{display, display_available};
