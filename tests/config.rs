use std::path::PathBuf;

use projscatter::config::{CONFIG_ENV, EXPORT_ENV};
use projscatter::{ColorScheme, FigureConfig, FigureError, Rgb};

fn write_temp(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("projscatter_cfg_{}_{name}", std::process::id()));
    std::fs::write(&path, body).expect("write config");
    path
}

#[test]
fn defaults_match_the_figure_layout() {
    let cfg = FigureConfig::default();
    assert_eq!(cfg.colors.three_d, Rgb::PURPLE);
    assert_eq!(cfg.colors.xy, Rgb::BLUE);
    assert_eq!(cfg.colors.yz, Rgb::GREEN);
    assert_eq!(cfg.colors.xz, Rgb::RED);
    assert!(cfg.show_grid);
    assert!(cfg.equal_aspect);
    assert!(!cfg.view.dedupe);
    assert_eq!(cfg.camera.elevation_deg, 30.0);
    assert_eq!(cfg.camera.azimuth_deg, -60.0);
    assert_eq!(cfg.export.path, None);
    assert_eq!(cfg.export.fallback_path, PathBuf::from("projscatter.png"));
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let path = write_temp(
        "partial.json",
        r#"{ "title": "Mine", "colors": { "xy": [1, 2, 3] }, "export": { "width": 640 } }"#,
    );
    let cfg = FigureConfig::load(&path).expect("load json");
    assert_eq!(cfg.title, "Mine");
    assert_eq!(cfg.colors.xy, Rgb::new(1, 2, 3));
    assert_eq!(cfg.colors.xz, Rgb::RED);
    assert_eq!(cfg.export.width, 640);
    assert_eq!(cfg.export.height, 800);
    assert!(cfg.show_grid);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn yaml_is_selected_by_extension() {
    let path = write_temp(
        "view.yaml",
        "view:\n  dedupe: true\n  connect_3d: true\ncamera:\n  elevation_deg: 10.0\n",
    );
    let cfg = FigureConfig::load(&path).expect("load yaml");
    assert!(cfg.view.dedupe);
    assert!(cfg.view.connect_3d);
    assert!(!cfg.view.annotate_indices);
    assert_eq!(cfg.camera.elevation_deg, 10.0);
    assert_eq!(cfg.camera.azimuth_deg, -60.0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_file_is_a_config_error() {
    let path = write_temp("broken.json", "{ not json");
    let err = FigureConfig::load(&path).unwrap_err();
    assert!(matches!(err, FigureError::Config { .. }), "{err}");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("projscatter_cfg_does_not_exist.json");
    let err = FigureConfig::load(&path).unwrap_err();
    assert!(matches!(err, FigureError::Io { .. }), "{err}");
}

#[test]
fn from_env_reads_config_file_and_export_path() {
    // Only test in this binary that touches the environment.
    let cfg_path = write_temp("env.yml", "title: From env\n");
    let export = std::env::temp_dir().join("projscatter_env_export.svg");
    std::env::set_var(CONFIG_ENV, &cfg_path);
    std::env::set_var(EXPORT_ENV, &export);

    let cfg = FigureConfig::from_env();

    std::env::remove_var(CONFIG_ENV);
    std::env::remove_var(EXPORT_ENV);
    let _ = std::fs::remove_file(&cfg_path);

    let cfg = cfg.expect("from_env");
    assert_eq!(cfg.title, "From env");
    assert_eq!(cfg.export.path, Some(export));
    assert_eq!(cfg.export.width, 1000);
}
