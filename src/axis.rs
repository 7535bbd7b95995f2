//! Axis ranges, tick placement and tick label formatting.
//!
//! Shared by the exported image and the 3D pane, which both draw their own
//! grids instead of relying on `egui_plot`'s.

/// Closed data interval on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range covering `values`; `[0, 1]` when empty.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if lo > hi {
            return Self::new(0.0, 1.0);
        }
        Self::new(lo, hi)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Widen by `fraction` of the span on each side. A zero-width range grows by ±0.5.
    pub fn padded(&self, fraction: f64) -> Self {
        let span = self.span();
        if span <= 0.0 {
            return Self::new(self.min - 0.5, self.max + 0.5);
        }
        let pad = span * fraction;
        Self::new(self.min - pad, self.max + pad)
    }

    /// Grow symmetrically around the center to `span` (never shrinks).
    pub fn expanded_to(&self, span: f64) -> Self {
        if span <= self.span() {
            return *self;
        }
        let c = self.center();
        Self::new(c - span * 0.5, c + span * 0.5)
    }

    /// Map `v` into `[-1, 1]`; a degenerate range maps everything to 0.
    pub fn normalize(&self, v: f64) -> f64 {
        let half = self.span() * 0.5;
        if half <= 0.0 {
            return 0.0;
        }
        (v - self.center()) / half
    }
}

/// Evenly spaced "nice" tick values (steps of 1, 2 or 5 × 10ⁿ) inside `range`.
pub fn nice_ticks(range: Range, target: usize) -> Vec<f64> {
    let span = range.span();
    if span <= 0.0 || !span.is_finite() {
        return vec![];
    }

    let rough_step = span / target.max(1) as f64;
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;
    let step = if residual <= 1.5 {
        magnitude
    } else if residual <= 3.0 {
        2.0 * magnitude
    } else if residual <= 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    // Decimal places of the step, used to strip noise like 0.6000000000000001.
    let scale = 10.0_f64.powi((-step.log10().floor()).max(0.0) as i32);
    let first = (range.min / step).ceil();
    let mut ticks = Vec::new();
    let mut i = 0.0;
    loop {
        let value = (first + i) * step;
        if value > range.max + step * 1e-3 {
            break;
        }
        let snapped = (value * scale).round() / scale;
        ticks.push(if snapped == 0.0 { 0.0 } else { snapped });
        i += 1.0;
    }
    ticks
}

/// Compact tick label: integers without decimals, others with trailing zeros trimmed.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value);
    }
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
