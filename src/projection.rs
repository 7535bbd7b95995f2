//! Coordinate projections for the four panes and the software 3D camera.
//!
//! The 2D panes simply pick two coordinate columns. The 3D pane rotates the
//! data cube by the camera's azimuth/elevation and applies a perspective
//! divide, producing flat geometry ([`Scene3d`]) that both the window and the
//! image exporter can draw with ordinary 2D primitives.

use serde::{Deserialize, Serialize};

use crate::axis::{format_tick, nice_ticks, Range};
use crate::points::Coordinates;

// ─────────────────────────────────────────────────────────────────────────────
// Projection
// ─────────────────────────────────────────────────────────────────────────────

/// Which coordinates a pane shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    /// All three coordinates in perspective.
    ThreeD,
    XY,
    YZ,
    XZ,
}

impl Projection {
    /// All projections in figure reading order (top-left, top-right, bottom-left, bottom-right).
    pub const ALL: [Projection; 4] = [
        Projection::ThreeD,
        Projection::XY,
        Projection::YZ,
        Projection::XZ,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Projection::ThreeD => "3D",
            Projection::XY => "XY",
            Projection::YZ => "YZ",
            Projection::XZ => "XZ",
        }
    }

    /// Axis labels, horizontal first (`X`, `Y`, `Z` for the 3D view).
    pub fn axis_labels(&self) -> &'static [&'static str] {
        match self {
            Projection::ThreeD => &["X", "Y", "Z"],
            Projection::XY => &["X", "Y"],
            Projection::YZ => &["Y", "Z"],
            Projection::XZ => &["X", "Z"],
        }
    }

    pub fn is_3d(&self) -> bool {
        matches!(self, Projection::ThreeD)
    }

    /// Pick this projection's columns. Only the named columns are read.
    pub fn select(&self, coords: &Coordinates) -> Series {
        let pair = |a: &[f64], b: &[f64]| -> Vec<[f64; 2]> {
            a.iter().zip(b).map(|(&u, &v)| [u, v]).collect()
        };
        match self {
            Projection::ThreeD => Series::Spatial(
                coords
                    .xs
                    .iter()
                    .zip(&coords.ys)
                    .zip(&coords.zs)
                    .map(|((&x, &y), &z)| [x, y, z])
                    .collect(),
            ),
            Projection::XY => Series::Planar(pair(&coords.xs, &coords.ys)),
            Projection::YZ => Series::Planar(pair(&coords.ys, &coords.zs)),
            Projection::XZ => Series::Planar(pair(&coords.xs, &coords.zs)),
        }
    }
}

/// Coordinates handed to a single pane.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    Planar(Vec<[f64; 2]>),
    Spatial(Vec<[f64; 3]>),
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Series::Planar(p) => p.len(),
            Series::Spatial(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Camera
// ─────────────────────────────────────────────────────────────────────────────

/// Viewing angles for the 3D pane.
///
/// Angles follow the usual scientific-plotting convention: azimuth rotates
/// around Z starting from the +X axis, elevation tilts above the XY plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    /// Eye distance from the cube center, in half-cube units. Smaller = stronger perspective.
    pub distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
            distance: 10.0,
        }
    }
}

impl Camera {
    fn basis(&self) -> ([f64; 3], [f64; 3], [f64; 3]) {
        let az = self.azimuth_deg.to_radians();
        let el = self.elevation_deg.to_radians();
        let eye = [el.cos() * az.cos(), el.cos() * az.sin(), el.sin()];
        let right = [-az.sin(), az.cos(), 0.0];
        let up = [-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos()];
        (eye, right, up)
    }

    /// Signed distance of `p` towards the viewer (larger = closer).
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        let (eye, _, _) = self.basis();
        dot(p, eye)
    }

    /// Project a point given in normalized cube coordinates (`[-1, 1]³`) to the screen plane.
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        let (eye, right, up) = self.basis();
        let sx = dot(p, right);
        let sy = dot(p, up);
        let depth = dot(p, eye);
        let dist = self.distance.max(2.0);
        let f = dist / (dist - depth);
        [sx * f, sy * f]
    }

    /// Rotate the view by a drag delta (degrees); elevation is clamped to ±90°.
    pub fn orbit(&mut self, d_azimuth: f64, d_elevation: f64) {
        self.azimuth_deg = (self.azimuth_deg + d_azimuth + 180.0).rem_euclid(360.0) - 180.0;
        self.elevation_deg = (self.elevation_deg + d_elevation).clamp(-90.0, 90.0);
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

// ─────────────────────────────────────────────────────────────────────────────
// Data cube
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned data bounds of a 3D series (padded like a plot's auto-margins).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub axes: [Range; 3],
}

impl Bounds3 {
    pub fn from_points(points: &[[f64; 3]]) -> Self {
        let axis = |k: usize| Range::of(points.iter().map(|p| p[k])).padded(0.05);
        Self {
            axes: [axis(0), axis(1), axis(2)],
        }
    }

    /// Grow every axis to the largest span so one data unit has the same
    /// length along X, Y and Z.
    pub fn equalized(&self) -> Self {
        let span = self.axes.iter().map(Range::span).fold(0.0, f64::max);
        Self {
            axes: self.axes.map(|r| r.expanded_to(span)),
        }
    }

    pub fn normalize(&self, p: [f64; 3]) -> [f64; 3] {
        [
            self.axes[0].normalize(p[0]),
            self.axes[1].normalize(p[1]),
            self.axes[2].normalize(p[2]),
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Flattened 3D scene
// ─────────────────────────────────────────────────────────────────────────────

/// A piece of text anchored in screen-plane coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLabel {
    pub at: [f64; 2],
    pub text: String,
}

/// The 3D pane flattened to 2D primitives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene3d {
    /// Projected data points, same order as the input.
    pub markers: Vec<[f64; 2]>,
    /// Outline of the three back panes.
    pub edges: Vec<[[f64; 2]; 2]>,
    /// Grid lines on the back panes at the tick positions.
    pub grid: Vec<[[f64; 2]; 2]>,
    /// Tick values along the front edges.
    pub ticks: Vec<SceneLabel>,
    /// `X`, `Y`, `Z` axis titles.
    pub axis_labels: Vec<SceneLabel>,
}

impl Scene3d {
    /// Build the scene for `points` seen through `camera`.
    ///
    /// Grids are drawn on the pane of each axis pair that faces away from the
    /// viewer, so they never cover the data. With `data_aspect` the cube keeps
    /// the data's proportions instead of stretching each axis to fill it.
    pub fn build(
        points: &[[f64; 3]],
        camera: &Camera,
        labels: [&str; 3],
        data_aspect: bool,
    ) -> Self {
        let mut bounds = Bounds3::from_points(points);
        if data_aspect {
            bounds = bounds.equalized();
        }
        let markers = points
            .iter()
            .map(|&p| camera.project(bounds.normalize(p)))
            .collect();

        // For each axis, the cube face (−1 or +1) farther from the viewer.
        let back: [f64; 3] = std::array::from_fn(|k| {
            let mut probe = [0.0; 3];
            probe[k] = 1.0;
            if camera.depth(probe) > 0.0 {
                -1.0
            } else {
                1.0
            }
        });
        let front: [f64; 3] = back.map(|b| -b);

        let ticks_n: [Vec<(f64, f64)>; 3] = std::array::from_fn(|k| {
            let range = bounds.axes[k];
            nice_ticks(range, 5)
                .into_iter()
                .map(|v| (v, range.normalize(v)))
                .collect()
        });

        let seg = |a: [f64; 3], b: [f64; 3]| [camera.project(a), camera.project(b)];
        let mut edges = Vec::new();
        let mut grid = Vec::new();

        // Face k is the plane where axis k sits at back[k]; axes i and j span it.
        for k in 0..3 {
            let (i, j) = ((k + 1) % 3, (k + 2) % 3);
            let corner = |u: f64, v: f64| {
                let mut p = [0.0; 3];
                p[k] = back[k];
                p[i] = u;
                p[j] = v;
                p
            };
            edges.push(seg(corner(-1.0, -1.0), corner(1.0, -1.0)));
            edges.push(seg(corner(1.0, -1.0), corner(1.0, 1.0)));
            edges.push(seg(corner(1.0, 1.0), corner(-1.0, 1.0)));
            edges.push(seg(corner(-1.0, 1.0), corner(-1.0, -1.0)));

            for &(_, u) in &ticks_n[i] {
                grid.push(seg(corner(u, -1.0), corner(u, 1.0)));
            }
            for &(_, v) in &ticks_n[j] {
                grid.push(seg(corner(-1.0, v), corner(1.0, v)));
            }
        }

        // Tick labels run along the front edges of the floor (X, Y) and a
        // front vertical edge (Z), pushed slightly outwards.
        let out = 1.18;
        let title_out = 1.45;
        let floor = back[2];
        let mut ticks = Vec::new();
        let mut axis_labels = Vec::new();
        let anchors: [Box<dyn Fn(f64, f64) -> [f64; 3]>; 3] = [
            Box::new(move |t, o| [t, front[1] * o, floor]),
            Box::new(move |t, o| [front[0] * o, t, floor]),
            Box::new(move |t, o| [back[0], front[1] * o, t]),
        ];
        for k in 0..3 {
            for &(value, t) in &ticks_n[k] {
                ticks.push(SceneLabel {
                    at: camera.project(anchors[k](t, out)),
                    text: format_tick(value),
                });
            }
            axis_labels.push(SceneLabel {
                at: camera.project(anchors[k](0.0, title_out)),
                text: labels[k].to_string(),
            });
        }

        Self {
            markers,
            edges,
            grid,
            ticks,
            axis_labels,
        }
    }

    /// Screen-plane bounding box of everything in the scene, as `(x range, y range)`.
    pub fn extent(&self) -> (Range, Range) {
        let all = self
            .edges
            .iter()
            .flatten()
            .chain(self.markers.iter())
            .chain(self.ticks.iter().map(|l| &l.at))
            .chain(self.axis_labels.iter().map(|l| &l.at));
        let pts: Vec<[f64; 2]> = all.copied().collect();
        (
            Range::of(pts.iter().map(|p| p[0])),
            Range::of(pts.iter().map(|p| p[1])),
        )
    }
}
