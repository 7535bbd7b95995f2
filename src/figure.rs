//! Back-end agnostic figure model: a 2×2 grid of scatter panes.

use crate::color_scheme::Rgb;
use crate::config::{FigureConfig, ViewOptions};
use crate::points::{dedupe, split_coordinates, Coordinates};
use crate::projection::{Projection, Series};

/// One chart region of the figure.
#[derive(Clone, Debug, PartialEq)]
pub struct Pane {
    pub projection: Projection,
    pub title: String,
    /// Horizontal axis first; three labels for the 3D pane.
    pub axis_labels: Vec<String>,
    pub color: Rgb,
    pub show_grid: bool,
    /// Only meaningful for 2D panes.
    pub equal_aspect: bool,
    pub series: Series,
}

impl Pane {
    fn new(projection: Projection, coords: &Coordinates, config: &FigureConfig) -> Self {
        Self {
            projection,
            title: projection.title().to_string(),
            axis_labels: projection
                .axis_labels()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            color: config.colors.for_projection(projection),
            show_grid: config.show_grid,
            equal_aspect: config.equal_aspect && !projection.is_3d(),
            series: projection.select(coords),
        }
    }

    /// Label of axis `i`, or an empty string if the pane has fewer axes.
    pub fn axis_label(&self, i: usize) -> &str {
        self.axis_labels.get(i).map(String::as_str).unwrap_or("")
    }

    /// The three axis labels of a 3D pane (blank-padded).
    pub fn axis_labels_3d(&self) -> [&str; 3] {
        [self.axis_label(0), self.axis_label(1), self.axis_label(2)]
    }
}

/// The renderable container: panes in reading order on a `rows × cols` grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub panes: Vec<Pane>,
    /// Columns handed to [`render_figure`], before any dedupe.
    pub source: Coordinates,
}

impl Figure {
    /// Pane showing `projection`, if present.
    pub fn pane(&self, projection: Projection) -> Option<&Pane> {
        self.panes.iter().find(|p| p.projection == projection)
    }

    /// Pane titles in reading order.
    pub fn titles(&self) -> Vec<&str> {
        self.panes.iter().map(|p| p.title.as_str()).collect()
    }

    /// `(row, col)` of pane `index`, filling rows left to right.
    pub fn grid_position(&self, index: usize) -> (usize, usize) {
        let cols = self.cols.max(1);
        (index / cols, index % cols)
    }
}

/// The columns actually drawn for `view`: each distinct point once when
/// `view.dedupe` is set, otherwise `coords` unchanged.
pub fn plotted_coordinates(coords: &Coordinates, view: &ViewOptions) -> Coordinates {
    if view.dedupe {
        split_coordinates(&dedupe(&coords.to_points()))
    } else {
        coords.clone()
    }
}

/// Build the four panes: 3D, XY, YZ, XZ (top-left to bottom-right).
///
/// Never fails. Empty coordinates give four empty panes that still carry
/// their titles, axis labels and grid settings.
pub fn render_figure(coords: &Coordinates, config: &FigureConfig) -> Figure {
    render_figure_with_view(coords, config, &config.view)
}

/// [`render_figure`] with display toggles that may differ from `config.view`.
pub fn render_figure_with_view(
    coords: &Coordinates,
    config: &FigureConfig,
    view: &ViewOptions,
) -> Figure {
    let plotted = plotted_coordinates(coords, view);
    let panes = Projection::ALL
        .iter()
        .map(|&projection| Pane::new(projection, &plotted, config))
        .collect();
    tracing::debug!(
        points = coords.len(),
        plotted = plotted.len(),
        dedupe = view.dedupe,
        "built figure panes"
    );
    Figure {
        title: config.title.clone(),
        rows: 2,
        cols: 2,
        panes,
        source: coords.clone(),
    }
}
