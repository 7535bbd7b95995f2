use eframe::egui;
use egui_tiles::{Behavior, Container, ContainerKind, TileId, Tiles, Tree, UiResponse};

use crate::figure::Figure;
use crate::plot::{show_pane, PaneStyle};
use crate::projection::Camera;

/// Identifier stored inside an `egui_tiles::Tree`, referencing a figure pane by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaneRef {
    pub index: usize,
}

/// Lay out `pane_count` panes across `columns` columns (rows filled top-down).
pub fn build_grid_tree(tree_id: &'static str, pane_count: usize, columns: usize) -> Tree<PaneRef> {
    let columns = columns.max(1);
    if pane_count == 0 {
        return Tree::empty(tree_id);
    }

    let mut tiles: Tiles<PaneRef> = Tiles::default();
    let pane_ids: Vec<_> = (0..pane_count)
        .map(|index| tiles.insert_pane(PaneRef { index }))
        .collect();

    let mut rows = Vec::new();
    for chunk in pane_ids.chunks(columns) {
        rows.push(
            tiles.insert_container(Container::new(ContainerKind::Horizontal, chunk.to_vec())),
        );
    }

    let root = if rows.len() == 1 {
        rows[0]
    } else {
        tiles.insert_container(Container::new(ContainerKind::Vertical, rows))
    };

    Tree::new(tree_id, root, tiles)
}

/// Render the figure's panes through `tree`, sized to the available region.
pub fn render_tile_grid(
    ui: &mut egui::Ui,
    tree: &mut Tree<PaneRef>,
    figure: &Figure,
    camera: &mut Camera,
    style: &PaneStyle,
) {
    let desired = ui.available_size();
    if desired.min_elem() <= 0.0 {
        ui.label("Expand the window to see the plots.");
        return;
    }

    ui.allocate_ui(desired, |grid_ui| {
        grid_ui.set_min_size(desired);
        grid_ui.set_clip_rect(grid_ui.max_rect());
        let mut behavior = FigureTilesBehavior {
            figure,
            camera,
            style,
        };
        tree.ui(&mut behavior, grid_ui);
    });
}

struct FigureTilesBehavior<'a> {
    figure: &'a Figure,
    camera: &'a mut Camera,
    style: &'a PaneStyle,
}

impl<'a> Behavior<PaneRef> for FigureTilesBehavior<'a> {
    fn tab_title_for_pane(&mut self, pane: &PaneRef) -> egui::WidgetText {
        match self.figure.panes.get(pane.index) {
            Some(p) => p.title.clone().into(),
            None => format!("Pane {}", pane.index + 1).into(),
        }
    }

    fn pane_ui(&mut self, ui: &mut egui::Ui, tile_id: TileId, pane: &mut PaneRef) -> UiResponse {
        let Some(p) = self.figure.panes.get(pane.index) else {
            ui.colored_label(egui::Color32::LIGHT_RED, "Missing pane");
            return UiResponse::None;
        };
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |panel_ui| {
                panel_ui.set_min_size(panel_ui.available_size());
                panel_ui.vertical_centered(|ui| {
                    ui.strong(&p.title);
                });
                panel_ui.add_space(4.0);
                let plot_area = panel_ui.available_size();
                panel_ui.allocate_ui(plot_area, |plot_ui| {
                    let plot_id = plot_ui.id().with(("pane", tile_id));
                    show_pane(plot_ui, plot_id, p, self.camera, self.style);
                });
            });
        UiResponse::None
    }
}
