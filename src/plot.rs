//! Drawing a single [`Pane`] into an `egui_plot::Plot`.
//!
//! 2D panes use the plot's own axes and grid. The 3D pane hides them and
//! draws the projected data cube from [`Scene3d`] instead; dragging inside it
//! orbits the camera.

use egui::RichText;
use egui_plot::{Line, Plot, PlotPoint, Points, Text};

use crate::color_scheme::ColorScheme;
use crate::figure::Pane;
use crate::projection::{Camera, Scene3d, Series};

/// Degrees of camera rotation per dragged pixel.
const ORBIT_SPEED: f64 = 0.4;

/// Per-frame drawing parameters shared by all panes.
#[derive(Clone, Copy, Debug)]
pub struct PaneStyle {
    pub color_scheme: ColorScheme,
    pub marker_radius: f32,
    pub annotate_indices: bool,
    pub connect_3d: bool,
    pub data_aspect_3d: bool,
    /// Drop stored zoom/pan and refit to the data this frame.
    pub reset_view: bool,
}

/// Show `pane` filling the available space of `ui`.
pub fn show_pane(
    ui: &mut egui::Ui,
    id: egui::Id,
    pane: &Pane,
    camera: &mut Camera,
    style: &PaneStyle,
) {
    match &pane.series {
        Series::Planar(points) => show_planar(ui, id, pane, points, style),
        Series::Spatial(points) => show_spatial(ui, id, pane, points, camera, style),
    }
}

fn show_planar(
    ui: &mut egui::Ui,
    id: egui::Id,
    pane: &Pane,
    points: &[[f64; 2]],
    style: &PaneStyle,
) {
    let mut plot = Plot::new(id)
        .show_grid(pane.show_grid)
        .x_axis_label(pane.axis_label(0))
        .y_axis_label(pane.axis_label(1))
        .allow_scroll(false)
        .allow_boxed_zoom(true);
    if pane.equal_aspect {
        plot = plot.data_aspect(1.0);
    }
    if points.is_empty() {
        // Keep a sensible frame so the empty pane still shows axes and grid.
        plot = plot.include_x(0.0).include_x(1.0).include_y(0.0).include_y(1.0);
    }
    if style.reset_view {
        plot = plot.reset();
    }

    let color = pane.color.to_color32();
    let radius = style.marker_radius;
    let annotate = style.annotate_indices;
    let text_color = style.color_scheme.foreground().to_color32();
    plot.show(ui, |plot_ui| {
        plot_ui.points(
            Points::new(pane.title.clone(), points.to_vec())
                .color(color)
                .radius(radius)
                .filled(true),
        );
        if annotate {
            for (i, p) in points.iter().enumerate() {
                plot_ui.text(
                    Text::new(
                        "",
                        PlotPoint::new(p[0], p[1]),
                        RichText::new(i.to_string()).size(9.0).color(text_color),
                    )
                    .anchor(egui::Align2::LEFT_BOTTOM),
                );
            }
        }
    });
}

fn show_spatial(
    ui: &mut egui::Ui,
    id: egui::Id,
    pane: &Pane,
    points: &[[f64; 3]],
    camera: &mut Camera,
    style: &PaneStyle,
) {
    let scene = Scene3d::build(points, camera, pane.axis_labels_3d(), style.data_aspect_3d);
    let (sx, sy) = scene.extent();
    let grid_color = style.color_scheme.grid().to_color32();
    let edge_color = style.color_scheme.foreground().to_color32().gamma_multiply(0.6);
    let text_color = style.color_scheme.foreground().to_color32();
    let color = pane.color.to_color32();

    // The view is rebuilt from the camera every frame, so bounds are always
    // pinned to the scene and plot-level pan/zoom is disabled.
    let plot = Plot::new(id)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .data_aspect(1.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .include_x(sx.padded(0.04).min)
        .include_x(sx.padded(0.04).max)
        .include_y(sy.padded(0.04).min)
        .include_y(sy.padded(0.04).max);

    let response = plot.show(ui, |plot_ui| {
        if pane.show_grid {
            for seg in &scene.grid {
                plot_ui.line(Line::new("", seg.to_vec()).color(grid_color).width(0.8));
            }
        }
        for seg in &scene.edges {
            plot_ui.line(Line::new("", seg.to_vec()).color(edge_color).width(1.0));
        }
        if style.connect_3d && scene.markers.len() > 1 {
            plot_ui.line(
                Line::new("path", scene.markers.clone())
                    .color(color.gamma_multiply(0.5))
                    .width(1.5),
            );
        }
        plot_ui.points(
            Points::new(pane.title.clone(), scene.markers.clone())
                .color(color)
                .radius(style.marker_radius)
                .filled(true),
        );
        for label in &scene.ticks {
            plot_ui.text(Text::new(
                "",
                PlotPoint::new(label.at[0], label.at[1]),
                RichText::new(&label.text).size(9.0).color(text_color),
            ));
        }
        for label in &scene.axis_labels {
            plot_ui.text(Text::new(
                "",
                PlotPoint::new(label.at[0], label.at[1]),
                RichText::new(&label.text).size(12.0).strong().color(text_color),
            ));
        }
        if style.annotate_indices {
            for (i, p) in scene.markers.iter().enumerate() {
                plot_ui.text(
                    Text::new(
                        "",
                        PlotPoint::new(p[0], p[1]),
                        RichText::new(i.to_string()).size(9.0).color(text_color),
                    )
                    .anchor(egui::Align2::LEFT_BOTTOM),
                );
            }
        }
    });

    let resp = &response.response;
    if resp.dragged_by(egui::PointerButton::Primary) {
        let delta = resp.drag_delta();
        camera.orbit(
            -(delta.x as f64) * ORBIT_SPEED,
            (delta.y as f64) * ORBIT_SPEED,
        );
    }
}
