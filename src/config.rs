//! Configuration for rendering, displaying and exporting the figure.
//!
//! Every field has a default, so the binary runs with no configuration at
//! all. A JSON or YAML file can override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::{ColorScheme, Rgb};
use crate::error::{FigureError, FigureResult};
use crate::projection::{Camera, Projection};

/// Path to an optional JSON/YAML config file.
pub const CONFIG_ENV: &str = "PROJSCATTER_CONFIG";
/// When set, skip the window and export straight to this path.
pub const EXPORT_ENV: &str = "PROJSCATTER_EXPORT";

// ─────────────────────────────────────────────────────────────────────────────
// Pane colors
// ─────────────────────────────────────────────────────────────────────────────

/// Marker color of each pane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneColors {
    pub three_d: Rgb,
    pub xy: Rgb,
    pub yz: Rgb,
    pub xz: Rgb,
}

impl Default for PaneColors {
    fn default() -> Self {
        Self {
            three_d: Rgb::PURPLE,
            xy: Rgb::BLUE,
            yz: Rgb::GREEN,
            xz: Rgb::RED,
        }
    }
}

impl PaneColors {
    pub fn for_projection(&self, projection: Projection) -> Rgb {
        match projection {
            Projection::ThreeD => self.three_d,
            Projection::XY => self.xy,
            Projection::YZ => self.yz,
            Projection::XZ => self.xz,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View toggles
// ─────────────────────────────────────────────────────────────────────────────

/// Display toggles, also switchable from the window's top bar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Plot each distinct point once. The source list itself is never changed.
    pub dedupe: bool,
    /// Write each point's index next to its marker.
    pub annotate_indices: bool,
    /// Connect consecutive points with a line in the 3D pane.
    pub connect_3d: bool,
    /// Keep the data's proportions in the 3D pane instead of a unit cube.
    pub data_aspect_3d: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Export
// ─────────────────────────────────────────────────────────────────────────────

/// Where and how large to write image files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Export here instead of opening a window.
    pub path: Option<PathBuf>,
    /// Used when no display is available.
    pub fallback_path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: None,
            fallback_path: PathBuf::from("projscatter.png"),
            width: 1000,
            height: 800,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FigureConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `title`        | Window title and exported figure title |
/// | `window_size`  | Initial native window size |
/// | `color_scheme` | Window theme and export background |
/// | `colors`       | Marker color per pane |
/// | `camera`       | Initial 3D view angles |
/// | `view`         | Dedupe / annotation / line toggles |
/// | `export`       | Image export target and size |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub color_scheme: ColorScheme,
    pub colors: PaneColors,
    /// Marker radius in screen pixels.
    pub marker_radius: f32,
    pub show_grid: bool,
    /// Equal data aspect on the three 2D panes.
    pub equal_aspect: bool,
    pub camera: Camera,
    pub view: ViewOptions,
    pub export: ExportConfig,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: "Point projections".to_string(),
            window_size: [1000.0, 800.0],
            color_scheme: ColorScheme::default(),
            colors: PaneColors::default(),
            marker_radius: 3.0,
            show_grid: true,
            equal_aspect: true,
            camera: Camera::default(),
            view: ViewOptions::default(),
            export: ExportConfig::default(),
        }
    }
}

impl FigureConfig {
    /// Parse a config file; `.yaml`/`.yml` as YAML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> FigureResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FigureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let parsed = if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| FigureError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Defaults, overridden by [`CONFIG_ENV`] and [`EXPORT_ENV`] when set.
    pub fn from_env() -> FigureResult<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(PathBuf::from(path))?,
            None => Self::default(),
        };
        if let Some(path) = std::env::var_os(EXPORT_ENV) {
            cfg.export.path = Some(PathBuf::from(path));
        }
        Ok(cfg)
    }
}
