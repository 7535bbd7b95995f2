//! Top-level entry point for showing a figure in a native window.
//!
//! [`display`] checks that a display server is reachable, wires the figure
//! into a [`FigureApp`] and enters the eframe event loop. A missing display is
//! reported as [`FigureError::DisplayUnavailable`] so callers can fall back
//! to exporting an image.

use eframe::egui;

use crate::app::FigureApp;
use crate::config::FigureConfig;
use crate::error::{FigureError, FigureResult};
use crate::figure::Figure;

/// Small scatter glyph used as the window icon.
const APP_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">
<rect x="2" y="2" width="60" height="60" rx="10" fill="#ffffff" stroke="#404040" stroke-width="3"/>
<circle cx="18" cy="44" r="6" fill="#800080"/>
<circle cx="30" cy="22" r="6" fill="#0000ff"/>
<circle cx="44" cy="38" r="6" fill="#008000"/>
<circle cx="48" cy="16" r="6" fill="#ff0000"/>
</svg>"##;

/// Show `figure` in a native window. Blocks until the window is closed.
pub fn display(figure: Figure, config: FigureConfig) -> FigureResult<()> {
    if !display_available() {
        return Err(FigureError::DisplayUnavailable(
            "neither DISPLAY nor WAYLAND_DISPLAY is set".to_string(),
        ));
    }

    let title = config.title.clone();
    let [w, h] = config.window_size;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(&title)
        .with_inner_size(egui::vec2(w, h));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let scheme = config.color_scheme;
    let app = FigureApp::new(figure, config);
    tracing::info!(title = %title, "opening figure window");
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            scheme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    tracing::info!("figure window closed");
    Ok(())
}

/// Whether a window can plausibly be opened.
///
/// On X11/Wayland platforms this requires `DISPLAY` or `WAYLAND_DISPLAY`;
/// elsewhere the native windowing system is assumed to be present.
pub fn display_available() -> bool {
    if cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "openbsd"
    )) {
        let set = |name: &str| std::env::var_os(name).is_some_and(|v| !v.is_empty());
        set("DISPLAY") || set("WAYLAND_DISPLAY")
    } else {
        true
    }
}

/// Render [`APP_ICON_SVG`] to an [`egui::IconData`].
///
/// Returns `None` if the SVG cannot be parsed or rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(APP_ICON_SVG, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
