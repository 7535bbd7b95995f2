//! The interactive figure window.
//!
//! [`FigureApp`] owns the rendered [`Figure`] and the view state around it:
//! the 3D camera, display toggles and the tile layout. Changing a toggle that
//! affects the data (dedupe) re-renders the figure from the untouched source columns.

use eframe::egui;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FLOPPY_DISK};
use egui_tiles::Tree;

use crate::config::{FigureConfig, ViewOptions};
use crate::export::{export_figure, ExportFormat, ExportOptions};
use crate::figure::{render_figure_with_view, Figure};
use crate::plot::PaneStyle;
use crate::points::{Coordinates, PointStats};
use crate::projection::Camera;
use crate::tiles::{build_grid_tree, render_tile_grid, PaneRef};

pub struct FigureApp {
    /// Columns as handed to [`crate::display`]; never modified.
    source: Coordinates,
    /// What is currently drawn (deduplicated when that toggle is on).
    figure: Figure,
    config: FigureConfig,
    /// Always over `source`, whatever the dedupe toggle says.
    stats: PointStats,
    camera: Camera,
    view: ViewOptions,
    tree: Tree<PaneRef>,
    reset_view: bool,
    /// Last save outcome, shown in the top bar.
    status: Option<String>,
}

impl FigureApp {
    pub fn new(figure: Figure, config: FigureConfig) -> Self {
        let source = figure.source.clone();
        let tree = build_grid_tree("figure_grid", figure.panes.len(), figure.cols);
        Self {
            stats: PointStats::from_coordinates(&source),
            camera: config.camera,
            view: config.view.clone(),
            source,
            figure,
            config,
            tree,
            reset_view: false,
            status: None,
        }
    }

    fn rebuild_figure(&mut self) {
        self.figure = render_figure_with_view(&self.source, &self.config, &self.view);
    }

    /// Export options reflecting the current window state (camera, toggles).
    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            camera: self.camera,
            annotate_indices: self.view.annotate_indices,
            connect_3d: self.view.connect_3d,
            data_aspect_3d: self.view.data_aspect_3d,
            ..ExportOptions::from_config(&self.config)
        }
    }

    fn save_image_dialog(&mut self) {
        let default_name = format!(
            "projscatter_{}.{}",
            chrono::Local::now().timestamp_millis(),
            ExportFormat::Png.extension()
        );
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .add_filter("PNG", &["png"])
            .add_filter("SVG", &["svg"])
            .save_file()
        else {
            return;
        };
        match export_figure(&self.figure, &path, &self.export_options()) {
            Ok(saved) => {
                self.status = Some(format!("Saved {}", saved.display()));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save figure");
                self.status = Some(format!("Save failed: {e}"));
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                let s = &self.stats;
                ui.label(format!("{} points", s.count));
                ui.separator();
                for (name, axis) in [("X", &s.x), ("Y", &s.y), ("Z", &s.z)] {
                    ui.label(format!("{name}: {} ({} unique)", axis.range_label(), axis.unique));
                }
                ui.separator();

                let dedupe_changed = ui
                    .checkbox(&mut self.view.dedupe, "Dedupe")
                    .on_hover_text("Plot each distinct point once")
                    .changed();
                ui.checkbox(&mut self.view.annotate_indices, "Indices");
                ui.checkbox(&mut self.view.connect_3d, "3D lines");
                ui.checkbox(&mut self.view.data_aspect_3d, "3D data aspect")
                    .on_hover_text("Scale the 3D axes by the data instead of a cube");
                if dedupe_changed {
                    self.rebuild_figure();
                }

                ui.separator();
                if ui
                    .button(format!("{ARROWS_CLOCKWISE} Reset view"))
                    .on_hover_text("Refit all panes and restore the 3D camera")
                    .clicked()
                {
                    self.reset_view = true;
                    self.camera = self.config.camera;
                }
                if ui
                    .button(format!("{FLOPPY_DISK} Save image"))
                    .on_hover_text("Export the figure as PNG or SVG")
                    .clicked()
                {
                    self.save_image_dialog();
                }
                if let Some(status) = &self.status {
                    ui.label(egui::RichText::new(status).weak());
                }
            });
        });
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_bar(ctx);

        let style = PaneStyle {
            color_scheme: self.config.color_scheme,
            marker_radius: self.config.marker_radius,
            annotate_indices: self.view.annotate_indices,
            connect_3d: self.view.connect_3d,
            data_aspect_3d: self.view.data_aspect_3d,
            reset_view: self.reset_view,
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            render_tile_grid(ui, &mut self.tree, &self.figure, &mut self.camera, &style);
        });
        self.reset_view = false;
    }
}
