use projscatter::points::{load_points, split_coordinates, Coordinates};
use projscatter::projection::{Camera, Projection, Scene3d, Series};
use projscatter::{render_figure, FigureConfig, Rgb, ViewOptions};

fn figure_of(coords: &Coordinates) -> projscatter::Figure {
    render_figure(coords, &FigureConfig::default())
}

#[test]
fn panes_are_in_reading_order() {
    let fig = figure_of(&split_coordinates(&load_points()));
    assert_eq!((fig.rows, fig.cols), (2, 2));
    assert_eq!(fig.titles(), vec!["3D", "XY", "YZ", "XZ"]);
    let positions: Vec<_> = (0..fig.panes.len()).map(|i| fig.grid_position(i)).collect();
    assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn each_projection_reads_its_own_columns() {
    let coords = Coordinates {
        xs: vec![1.0, 2.0],
        ys: vec![10.0, 20.0],
        zs: vec![100.0, 200.0],
    };
    let fig = figure_of(&coords);
    let planar = |p: Projection| match &fig.pane(p).expect("pane").series {
        Series::Planar(v) => v.clone(),
        other => panic!("expected planar series, got {other:?}"),
    };
    assert_eq!(planar(Projection::XY), vec![[1.0, 10.0], [2.0, 20.0]]);
    assert_eq!(planar(Projection::YZ), vec![[10.0, 100.0], [20.0, 200.0]]);
    assert_eq!(planar(Projection::XZ), vec![[1.0, 100.0], [2.0, 200.0]]);
    match &fig.pane(Projection::ThreeD).expect("pane").series {
        Series::Spatial(v) => assert_eq!(v, &vec![[1.0, 10.0, 100.0], [2.0, 20.0, 200.0]]),
        other => panic!("expected spatial series, got {other:?}"),
    }
}

#[test]
fn every_pane_plots_all_points() {
    let fig = figure_of(&split_coordinates(&load_points()));
    for pane in &fig.panes {
        assert_eq!(pane.series.len(), 39, "{}", pane.title);
    }
}

#[test]
fn axis_labels_and_styling() {
    let fig = figure_of(&split_coordinates(&load_points()));
    let labels = |p: Projection| fig.pane(p).expect("pane").axis_labels.clone();
    assert_eq!(labels(Projection::ThreeD), vec!["X", "Y", "Z"], "{}", false);
    assert_eq!(labels(Projection::XY), vec!["X", "Y"]);
    assert_eq!(labels(Projection::YZ), vec!["Y", "Z"]);
    assert_eq!(labels(Projection::XZ), vec!["X", "Z"]);

    let color = |p: Projection| fig.pane(p).expect("pane").color;
    assert_eq!(color(Projection::ThreeD), Rgb::PURPLE);
    assert_eq!(color(Projection::XY), Rgb::BLUE);
    assert_eq!(color(Projection::YZ), Rgb::GREEN);
    assert_eq!(color(Projection::XZ), Rgb::RED);

    for pane in &fig.panes {
        assert!(pane.show_grid);
        assert_eq!(pane.equal_aspect, !pane.projection.is_3d());
    }
}

#[test]
fn empty_input_still_builds_four_panes() {
    let fig = figure_of(&split_coordinates(&[]));
    assert_eq!(fig.panes.len(), 4);
    for pane in &fig.panes {
        assert!(pane.series.is_empty());
        assert!(!pane.title.is_empty());
        assert!(!pane.axis_labels.is_empty());
        assert!(pane.show_grid);
    }
}

#[test]
fn scene_keeps_one_marker_per_point() {
    let pts: Vec<[f64; 3]> = load_points().iter().map(|p| p.to_array()).collect();
    let scene = Scene3d::build(&pts, &Camera::default(), ["X", "Y", "Z"], false);
    assert_eq!(scene.markers.len(), 39);
    assert_eq!(scene.edges.len(), 12);
    assert!(!scene.grid.is_empty());
    assert!(!scene.ticks.is_empty());
    let titles: Vec<_> = scene.axis_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(titles, vec!["X", "Y", "Z"], "{}", false);
}

#[test]
fn empty_scene_still_has_box_and_labels() {
    let scene = Scene3d::build(&[], &Camera::default(), ["X", "Y", "Z"], false);
    assert!(scene.markers.is_empty());
    assert_eq!(scene.edges.len(), 12);
    assert_eq!(scene.axis_labels.len(), 3);
    let (xr, yr) = scene.extent();
    assert!(xr.span() > 0.0 && yr.span() > 0.0);
}

#[test]
fn dedupe_setting_is_applied_when_rendering() {
    let coords = split_coordinates(&load_points());
    let cfg = FigureConfig {
        view: ViewOptions {
            dedupe: true,
            ..ViewOptions::default()
        },
        ..FigureConfig::default()
    };
    let fig = render_figure(&coords, &cfg);
    for pane in &fig.panes {
        assert_eq!(pane.series.len(), 26, "{}", pane.title);
    }
    // The figure still remembers every listed point.
    assert_eq!(fig.source, coords);
    assert_eq!(fig.source.len(), 39);
}
