//! The fixed point set and the column split feeding every pane.

use serde::{Deserialize, Serialize};

/// A single `(x, y, z)` coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y, p.z)
    }
}

const fn p(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// Number of points in [`POINTS`].
pub const POINT_COUNT: usize = 39;

/// The literal point table, in plotting order. Repeated entries are kept as-is.
#[rustfmt::skip]
pub const POINTS: [Point; POINT_COUNT] = [
    p(0., 0., 0.), p(0., 1., 0.), p(0., 2., 0.), p(0., 3., 0.), p(0., 4., 0.),
    p(1., 4., 0.), p(2., 4., 0.), p(3., 4., 0.), p(1., 2., 0.), p(2., 2., 0.),
    p(1., 0., 0.), p(2., 0., 0.), p(3., 0., 0.), p(0., 0., 1.), p(0., 0., 2.),
    p(0., 0., 3.), p(0., 0., 4.), p(1., 0., 4.), p(2., 0., 4.), p(3., 0., 4.),
    p(1., 0., 2.), p(2., 0., 2.), p(1., 0., 0.), p(2., 0., 0.), p(3., 0., 0.),
    p(0., 0., 0.), p(0., 1., 0.), p(0., 2., 0.), p(0., 3., 0.), p(0., 4., 0.),
    p(0., 0., 1.), p(0., 0., 2.), p(0., 4., 4.), p(0., 0., 1.), p(0., 0., 2.),
    p(0., 0., 3.), p(0., 1., 4.), p(0., 3., 4.), p(0., 2., 4.),
];

/// Return the hardcoded point set. Pure: every call yields the same sequence.
pub fn load_points() -> Vec<Point> {
    POINTS.to_vec()
}

/// Three parallel coordinate columns. Index `i` in each column refers to the same point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
}

impl Coordinates {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Zip the columns back into points.
    pub fn to_points(&self) -> Vec<Point> {
        self.xs
            .iter()
            .zip(&self.ys)
            .zip(&self.zs)
            .map(|((&x, &y), &z)| Point::new(x, y, z))
            .collect()
    }
}

/// Split points into X, Y and Z columns, preserving order and length.
///
/// An empty slice is not an error; it produces three empty columns.
pub fn split_coordinates(points: &[Point]) -> Coordinates {
    let mut coords = Coordinates {
        xs: Vec::with_capacity(points.len()),
        ys: Vec::with_capacity(points.len()),
        zs: Vec::with_capacity(points.len()),
    };
    for p in points {
        coords.xs.push(p.x);
        coords.ys.push(p.y);
        coords.zs.push(p.z);
    }
    coords
}

/// Drop exact repeats, keeping the first occurrence of each point in order.
pub fn dedupe(points: &[Point]) -> Vec<Point> {
    let mut seen: Vec<[u64; 3]> = Vec::with_capacity(points.len());
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        let key = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
        if !seen.contains(&key) {
            seen.push(key);
            out.push(*p);
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Summary statistics
// ─────────────────────────────────────────────────────────────────────────────

/// Per-axis summary shown in the window's top bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisStats {
    /// `(min, max)`; `None` when there are no points.
    pub range: Option<(f64, f64)>,
    /// Number of distinct values on this axis.
    pub unique: usize,
}

impl AxisStats {
    fn from_values(values: &[f64]) -> Self {
        let range = values.iter().fold(None, |acc: Option<(f64, f64)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });
        let mut bits: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
        bits.sort_unstable();
        bits.dedup();
        Self {
            range,
            unique: bits.len(),
        }
    }

    /// `"min → max"`, or `"–"` for an empty set.
    pub fn range_label(&self) -> String {
        match self.range {
            Some((lo, hi)) => format!("{} → {}", lo, hi),
            None => "–".to_string(),
        }
    }
}

/// Count, ranges and distinct-value counts of a point set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStats {
    pub count: usize,
    pub x: AxisStats,
    pub y: AxisStats,
    pub z: AxisStats,
}

impl PointStats {
    pub fn from_coordinates(coords: &Coordinates) -> Self {
        Self {
            count: coords.len(),
            x: AxisStats::from_values(&coords.xs),
            y: AxisStats::from_values(&coords.ys),
            z: AxisStats::from_values(&coords.zs),
        }
    }

    pub fn from_points(points: &[Point]) -> Self {
        Self::from_coordinates(&split_coordinates(points))
    }
}
