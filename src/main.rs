//! Show the point set's 3D/XY/YZ/XZ scatter figure.
//!
//! Run with: cargo run
//!
//! Environment:
//! - `PROJSCATTER_CONFIG`: optional JSON/YAML config file
//! - `PROJSCATTER_EXPORT`: export to this PNG/SVG path instead of opening a window
//! - `RUST_LOG`: log filter (default `info,projscatter=debug`)

use std::process::ExitCode;

use projscatter::{
    display, export_figure, load_points, render_figure, split_coordinates, ExportOptions,
    FigureConfig, FigureError,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,projscatter=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "projscatter failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), FigureError> {
    let config = FigureConfig::from_env()?;

    let points = load_points();
    let coords = split_coordinates(&points);
    info!(points = coords.len(), "loaded point set");
    let figure = render_figure(&coords, &config);
    let export_opts = ExportOptions::from_config(&config);

    if let Some(path) = config.export.path.clone() {
        export_figure(&figure, &path, &export_opts)?;
        return Ok(());
    }

    let fallback = config.export.fallback_path.clone();
    match display(figure.clone(), config) {
        Err(e) if e.is_display_unavailable() => {
            warn!(error = %e, fallback = %fallback.display(), "no display, exporting instead");
            export_figure(&figure, &fallback, &export_opts)?;
            Ok(())
        }
        other => other,
    }
}
