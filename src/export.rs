//! Figure export to SVG and PNG.
//!
//! The figure is first written as an SVG document (one `<g class="pane">`
//! per pane). PNG output rasterises that document with `usvg`/`resvg` onto a
//! `tiny_skia` pixmap and hands the pixels to the `image` crate for encoding.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::axis::{format_tick, nice_ticks, Range};
use crate::color_scheme::{ColorScheme, Rgb};
use crate::config::FigureConfig;
use crate::error::{FigureError, FigureResult};
use crate::figure::{Figure, Pane};
use crate::projection::{Camera, Scene3d, Series};

const MAX_DIMENSION: u32 = 16384;
const TITLE_BAND: f64 = 30.0;
const FONT: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";

/// Supported output formats, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> FigureResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(ExportFormat::Png),
            Some("svg") => Ok(ExportFormat::Svg),
            other => Err(FigureError::RenderBackend(format!(
                "unsupported export format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Rendering parameters for an exported image.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    pub color_scheme: ColorScheme,
    pub marker_radius: f64,
    pub camera: Camera,
    pub annotate_indices: bool,
    pub connect_3d: bool,
    pub data_aspect_3d: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_config(&FigureConfig::default())
    }
}

impl ExportOptions {
    pub fn from_config(cfg: &FigureConfig) -> Self {
        Self {
            width: cfg.export.width,
            height: cfg.export.height,
            color_scheme: cfg.color_scheme,
            marker_radius: cfg.marker_radius as f64,
            camera: cfg.camera,
            annotate_indices: cfg.view.annotate_indices,
            connect_3d: cfg.view.connect_3d,
            data_aspect_3d: cfg.view.data_aspect_3d,
        }
    }

    fn validate(&self) -> FigureResult<()> {
        let ok = |d: u32| (1..=MAX_DIMENSION).contains(&d);
        if !ok(self.width) || !ok(self.height) {
            return Err(FigureError::RenderBackend(format!(
                "invalid image size {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Write `figure` to `path` as PNG or SVG, depending on the extension.
pub fn export_figure(
    figure: &Figure,
    path: impl AsRef<Path>,
    opts: &ExportOptions,
) -> FigureResult<PathBuf> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    opts.validate()?;
    let svg = figure_to_svg(figure, opts);
    match format {
        ExportFormat::Svg => std::fs::write(path, svg).map_err(|source| FigureError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        ExportFormat::Png => {
            let img = rasterize_svg(&svg, opts.width, opts.height)?;
            img.save(path).map_err(|e| match e {
                image::ImageError::IoError(source) => FigureError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                other => FigureError::RenderBackend(format!("{}: {other}", path.display())),
            })?;
        }
    }
    tracing::info!(path = %path.display(), format = format.extension(), "exported figure");
    Ok(path.to_path_buf())
}

/// Rasterise an SVG document to an RGBA image of the given size.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> FigureResult<RgbaImage> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| FigureError::RenderBackend(format!("SVG parse failed: {e}")))?;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        FigureError::RenderBackend(format!("cannot allocate {width}x{height} pixmap"))
    })?;
    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut img = RgbaImage::new(width, height);
    for (src, dst) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(img)
}

// ─────────────────────────────────────────────────────────────────────────────
// SVG writer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect {
            x: self.x + left,
            y: self.y + top,
            w: (self.w - left - right).max(1.0),
            h: (self.h - top - bottom).max(1.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Linear data → pixel mapping with the y axis pointing up.
struct Mapping {
    rect: Rect,
    x: Range,
    y: Range,
}

impl Mapping {
    /// Fit ranges into `rect`; with `equal` both axes share one scale.
    fn fit(rect: Rect, mut x: Range, mut y: Range, equal: bool) -> Self {
        if equal {
            let per_px = (x.span() / rect.w).max(y.span() / rect.h);
            x = x.expanded_to(per_px * rect.w);
            y = y.expanded_to(per_px * rect.h);
        }
        Self { rect, x, y }
    }

    fn px(&self, p: [f64; 2]) -> (f64, f64) {
        let fx = (p[0] - self.x.min) / self.x.span();
        let fy = (p[1] - self.y.min) / self.y.span();
        (
            self.rect.x + fx * self.rect.w,
            self.rect.bottom() - fy * self.rect.h,
        )
    }
}

struct SvgWriter<'a> {
    out: String,
    opts: &'a ExportOptions,
    fg: String,
    grid: String,
}

impl<'a> SvgWriter<'a> {
    fn new(opts: &'a ExportOptions) -> Self {
        Self {
            out: String::new(),
            opts,
            fg: opts.color_scheme.foreground().to_hex(),
            grid: opts.color_scheme.grid().to_hex(),
        }
    }

    fn line(&mut self, a: (f64, f64), b: (f64, f64), stroke: &str, width: f64) {
        let _ = writeln!(
            self.out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            a.0, a.1, b.0, b.1, stroke, width
        );
    }

    fn text(&mut self, at: (f64, f64), size: f64, anchor: &str, body: &str) {
        let _ = writeln!(
            self.out,
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
            at.0,
            at.1,
            FONT,
            size,
            self.fg,
            anchor,
            escape(body)
        );
    }

    fn marker(&mut self, at: (f64, f64), color: Rgb) {
        let _ = writeln!(
            self.out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            at.0,
            at.1,
            self.opts.marker_radius,
            color.to_hex()
        );
    }

    fn index_labels(&mut self, at: impl Iterator<Item = (f64, f64)>) {
        let r = self.opts.marker_radius;
        for (i, (x, y)) in at.enumerate() {
            self.text((x + r + 1.0, y - r - 1.0), 8.0, "start", &i.to_string());
        }
    }

    fn pane_2d(&mut self, cell: Rect, pane: &Pane, points: &[[f64; 2]]) {
        let rect = cell.inset(58.0, 34.0, 18.0, 46.0);
        let x = Range::of(points.iter().map(|p| p[0])).padded(0.05);
        let y = Range::of(points.iter().map(|p| p[1])).padded(0.05);
        let map = Mapping::fit(rect, x, y, pane.equal_aspect);
        let fg = self.fg.clone();
        let grid = self.grid.clone();

        for t in nice_ticks(map.x, 5) {
            let (px, _) = map.px([t, map.y.min]);
            if pane.show_grid {
                self.line((px, rect.y), (px, rect.bottom()), &grid, 0.8);
            }
            self.line((px, rect.bottom()), (px, rect.bottom() + 4.0), &fg, 1.0);
            self.text((px, rect.bottom() + 16.0), 10.0, "middle", &format_tick(t));
        }
        for t in nice_ticks(map.y, 5) {
            let (_, py) = map.px([map.x.min, t]);
            if pane.show_grid {
                self.line((rect.x, py), (rect.x + rect.w, py), &grid, 0.8);
            }
            self.line((rect.x - 4.0, py), (rect.x, py), &fg, 1.0);
            self.text((rect.x - 7.0, py + 3.5), 10.0, "end", &format_tick(t));
        }
        let _ = writeln!(
            self.out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="1"/>"#,
            rect.x, rect.y, rect.w, rect.h, fg
        );

        for &p in points {
            self.marker(map.px(p), pane.color);
        }
        if self.opts.annotate_indices {
            self.index_labels(points.iter().map(|&p| map.px(p)));
        }

        self.text(
            (rect.x + rect.w / 2.0, rect.bottom() + 34.0),
            12.0,
            "middle",
            pane.axis_label(0),
        );
        let (lx, ly) = (rect.x - 40.0, rect.y + rect.h / 2.0);
        let _ = writeln!(
            self.out,
            r#"<text x="{lx:.2}" y="{ly:.2}" font-family="{FONT}" font-size="12" fill="{fg}" text-anchor="middle" transform="rotate(-90 {lx:.2} {ly:.2})">{}</text>"#,
            escape(pane.axis_label(1))
        );
    }

    fn pane_3d(&mut self, cell: Rect, pane: &Pane, points: &[[f64; 3]]) {
        let rect = cell.inset(12.0, 34.0, 12.0, 8.0);
        let scene = Scene3d::build(
            points,
            &self.opts.camera,
            pane.axis_labels_3d(),
            self.opts.data_aspect_3d,
        );
        let (sx, sy) = scene.extent();
        let map = Mapping::fit(rect, sx.padded(0.04), sy.padded(0.04), true);
        let fg = self.fg.clone();
        let grid = self.grid.clone();

        if pane.show_grid {
            for [a, b] in &scene.grid {
                self.line(map.px(*a), map.px(*b), &grid, 0.8);
            }
        }
        for [a, b] in &scene.edges {
            self.line(map.px(*a), map.px(*b), &fg, 0.8);
        }
        if self.opts.connect_3d && scene.markers.len() > 1 {
            let mut d = String::new();
            for (i, &p) in scene.markers.iter().enumerate() {
                let (x, y) = map.px(p);
                let _ = write!(d, "{}{:.2},{:.2} ", if i == 0 { "M" } else { "L" }, x, y);
            }
            let _ = writeln!(
                self.out,
                r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="0.5" stroke-width="1.5"/>"#,
                d.trim_end(),
                pane.color.to_hex()
            );
        }
        for &p in &scene.markers {
            self.marker(map.px(p), pane.color);
        }
        if self.opts.annotate_indices {
            self.index_labels(scene.markers.iter().map(|&p| map.px(p)));
        }
        for label in &scene.ticks {
            let (x, y) = map.px(label.at);
            self.text((x, y + 3.5), 9.0, "middle", &label.text);
        }
        for label in &scene.axis_labels {
            let (x, y) = map.px(label.at);
            self.text((x, y + 4.0), 12.0, "middle", &label.text);
        }
    }

    fn pane(&mut self, cell: Rect, pane: &Pane) {
        let _ = writeln!(
            self.out,
            r#"<g class="pane" data-title="{}">"#,
            escape(&pane.title)
        );
        self.text((cell.x + cell.w / 2.0, cell.y + 22.0), 14.0, "middle", &pane.title);
        match &pane.series {
            Series::Planar(points) => self.pane_2d(cell, pane, points),
            Series::Spatial(points) => self.pane_3d(cell, pane, points),
        }
        self.out.push_str("</g>\n");
    }
}

/// Render `figure` as a standalone SVG document of `opts.width × opts.height`.
pub fn figure_to_svg(figure: &Figure, opts: &ExportOptions) -> String {
    let (w, h) = (opts.width as f64, opts.height as f64);
    let mut svg = SvgWriter::new(opts);
    let _ = writeln!(
        svg.out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg.out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        opts.color_scheme.background().to_hex()
    );

    let band = if figure.title.is_empty() { 0.0 } else { TITLE_BAND };
    if band > 0.0 {
        svg.text((w / 2.0, 21.0), 16.0, "middle", &figure.title);
    }

    let rows = figure.rows.max(1) as f64;
    let cols = figure.cols.max(1) as f64;
    let cell_w = w / cols;
    let cell_h = (h - band) / rows;
    for (i, pane) in figure.panes.iter().enumerate() {
        let (row, col) = figure.grid_position(i);
        let cell = Rect {
            x: col as f64 * cell_w,
            y: band + row as f64 * cell_h,
            w: cell_w,
            h: cell_h,
        };
        svg.pane(cell, pane);
    }
    svg.out.push_str("</svg>\n");
    svg.out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn equal_mapping_uses_one_scale() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            w: 200.0,
            h: 100.0,
        };
        let map = Mapping::fit(rect, Range::new(0.0, 1.0), Range::new(0.0, 1.0), true);
        assert_eq!(map.y.span(), 1.0);
        assert_eq!(map.x.span(), 2.0);
        let (x0, _) = map.px([0.0, 0.0]);
        let (x1, _) = map.px([1.0, 0.0]);
        let (_, y0) = map.px([0.0, 0.0]);
        let (_, y1) = map.px([0.0, 1.0]);
        assert!(((x1 - x0) - (y0 - y1)).abs() < 1e-9);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("a/b.PNG")).unwrap(),
            ExportFormat::Png
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("b.svg")).unwrap(),
            ExportFormat::Svg
        );
        assert!(ExportFormat::from_path(Path::new("b.bmp")).is_err());
        assert!(ExportFormat::from_path(Path::new("noext")).is_err());
    }
}
