use std::path::PathBuf;

use projscatter::points::{load_points, split_coordinates};
use projscatter::{
    export_figure, figure_to_svg, render_figure, ExportFormat, ExportOptions, FigureConfig,
    FigureError,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("projscatter_test_{}_{name}", std::process::id()))
}

fn small_options() -> ExportOptions {
    ExportOptions {
        width: 240,
        height: 200,
        ..ExportOptions::default()
    }
}

#[test]
fn svg_has_one_group_per_pane_in_order() {
    let fig = render_figure(&split_coordinates(&load_points()), &FigureConfig::default());
    let svg = figure_to_svg(&fig, &ExportOptions::default());
    let positions: Vec<usize> = ["3D", "XY", "YZ", "XZ"]
        .iter()
        .map(|t| {
            svg.find(&format!(r#"<g class="pane" data-title="{t}">"#))
                .unwrap_or_else(|| panic!("missing pane {t}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(svg.matches(r#"<g class="pane""#).count(), 4);
}

#[test]
fn svg_draws_every_point_in_every_pane() {
    let fig = render_figure(&split_coordinates(&load_points()), &FigureConfig::default());
    let svg = figure_to_svg(&fig, &ExportOptions::default());
    assert_eq!(svg.matches("<circle").count(), 4 * 39);
    assert!(svg.contains("#800080"));
    assert!(svg.contains("#0000ff"));
    assert!(svg.contains("#008000"));
    assert!(svg.contains("#ff0000"));
}

#[test]
fn empty_figure_has_titles_and_grid_but_no_markers() {
    let fig = render_figure(&split_coordinates(&[]), &FigureConfig::default());
    let svg = figure_to_svg(&fig, &ExportOptions::default());
    assert_eq!(svg.matches("<circle").count(), 0);
    assert_eq!(svg.matches(r#"<g class="pane""#).count(), 4);
    assert!(svg.contains("<line"));
    assert!(svg.contains(">XZ</text>"));
}

#[test]
fn png_export_has_requested_size() {
    let fig = render_figure(&split_coordinates(&load_points()), &FigureConfig::default());
    let path = temp_path("figure.png");
    let saved = export_figure(&fig, &path, &small_options()).expect("png export");
    assert_eq!(saved, path);
    let img = image::open(&path).expect("open png");
    assert_eq!((img.width(), img.height()), (240, 200));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn svg_export_writes_document() {
    let fig = render_figure(&split_coordinates(&load_points()), &FigureConfig::default());
    let path = temp_path("figure.SVG");
    export_figure(&fig, &path, &small_options()).expect("svg export");
    let text = std::fs::read_to_string(&path).expect("read svg");
    assert!(text.starts_with("<svg"));
    assert!(text.trim_end().ends_with("</svg>"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn unsupported_extension_is_rejected() {
    let fig = render_figure(&split_coordinates(&load_points()), &FigureConfig::default());
    let path = temp_path("figure.bmp");
    let err = export_figure(&fig, &path, &small_options()).unwrap_err();
    assert!(matches!(err, FigureError::RenderBackend(_)), "{err}");
    assert!(!path.exists());
}

#[test]
fn zero_size_is_rejected() {
    let fig = render_figure(&split_coordinates(&[]), &FigureConfig::default());
    let opts = ExportOptions {
        width: 0,
        ..ExportOptions::default()
    };
    let err = export_figure(&fig, temp_path("zero.png"), &opts).unwrap_err();
    assert!(matches!(err, FigureError::RenderBackend(_)));
}

#[test]
fn format_from_extension() {
    assert_eq!(
        ExportFormat::from_path(std::path::Path::new("a.png")).unwrap(),
        ExportFormat::Png
    );
    assert_eq!(
        ExportFormat::from_path(std::path::Path::new("a.Svg")).unwrap(),
        ExportFormat::Svg
    );
    assert!(ExportFormat::from_path(std::path::Path::new("noext")).is_err());
}

#[test]
fn write_failures_are_io_errors_for_both_formats() {
    let fig = render_figure(&split_coordinates(&load_points()), &FigureConfig::default());
    let dir = temp_path("missing_dir");
    let _ = std::fs::remove_dir_all(&dir);
    for name in ["figure.png", "figure.svg"] {
        let err = export_figure(&fig, dir.join(name), &small_options()).unwrap_err();
        assert!(matches!(err, FigureError::Io { .. }), "{name}: {err}");
    }
}

#[test]
fn data_aspect_changes_only_the_3d_pane() {
    let fig = render_figure(&split_coordinates(&load_points()), &FigureConfig::default());
    let cube = figure_to_svg(&fig, &ExportOptions::default());
    let data = figure_to_svg(
        &fig,
        &ExportOptions {
            data_aspect_3d: true,
            ..ExportOptions::default()
        },
    );
    let pane = |svg: &str, title: &str| -> String {
        let start = svg
            .find(&format!(r#"data-title="{title}""#))
            .expect("pane");
        let end = start + svg[start..].find("</g>").expect("pane end");
        svg[start..end].to_string()
    };
    assert_ne!(pane(&cube, "3D"), pane(&data, "3D"));
    assert_eq!(pane(&cube, "XY"), pane(&data, "XY"));
    assert_eq!(data.matches("<circle").count(), 4 * 39);
}
