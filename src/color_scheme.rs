//! Color scheme definitions for the figure window and exported images.
//!
//! Contains the [`Rgb`] color type used by panes, and [`ColorScheme`] which
//! themes both the egui window and the background/ink of exported files.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Opaque 8-bit RGB color. Serializes as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const PURPLE: Rgb = Rgb([128, 0, 128]);
    pub const BLUE: Rgb = Rgb([0, 0, 255]);
    pub const GREEN: Rgb = Rgb([0, 128, 0]);
    pub const RED: Rgb = Rgb([255, 0, 0]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = self.0;
        Color32::from_rgb(r, g, b)
    }

    /// `#rrggbb`, as used in SVG attributes.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Visual theme for the window and for exported images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// White background, black ink (the classic plotting look).
    #[default]
    Light,
    /// Dark background, light ink.
    Dark,
    /// Solarized Light.
    SolarizedLight,
    /// Solarized Dark.
    SolarizedDark,
}

impl ColorScheme {
    /// All schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Light,
            ColorScheme::Dark,
            ColorScheme::SolarizedLight,
            ColorScheme::SolarizedDark,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
            ColorScheme::SolarizedLight => "Solarized Light",
            ColorScheme::SolarizedDark => "Solarized Dark",
        }
    }

    /// Figure background.
    pub fn background(&self) -> Rgb {
        match self {
            ColorScheme::Light => Rgb::new(255, 255, 255),
            ColorScheme::Dark => Rgb::new(27, 27, 27),
            ColorScheme::SolarizedLight => Rgb::new(253, 246, 227),
            ColorScheme::SolarizedDark => Rgb::new(0, 43, 54),
        }
    }

    /// Text, frames and axis lines.
    pub fn foreground(&self) -> Rgb {
        match self {
            ColorScheme::Light => Rgb::new(0, 0, 0),
            ColorScheme::Dark => Rgb::new(220, 220, 220),
            ColorScheme::SolarizedLight => Rgb::new(101, 123, 131),
            ColorScheme::SolarizedDark => Rgb::new(131, 148, 150),
        }
    }

    /// Grid lines.
    pub fn grid(&self) -> Rgb {
        match self {
            ColorScheme::Light => Rgb::new(176, 176, 176),
            ColorScheme::Dark => Rgb::new(70, 70, 70),
            ColorScheme::SolarizedLight => Rgb::new(238, 232, 213),
            ColorScheme::SolarizedDark => Rgb::new(7, 54, 66),
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark | ColorScheme::SolarizedDark)
    }

    /// Build egui visuals for this scheme.
    pub fn visuals(&self) -> Visuals {
        let mut v = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        match self {
            ColorScheme::Light | ColorScheme::Dark => {}
            ColorScheme::SolarizedLight | ColorScheme::SolarizedDark => {
                let bg = self.background().to_color32();
                let fg = self.foreground().to_color32();
                let faint = self.grid().to_color32();
                v.panel_fill = bg;
                v.window_fill = faint;
                v.extreme_bg_color = bg;
                v.faint_bg_color = faint;
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.bg_fill = faint;
                v.widgets.noninteractive.fg_stroke.color = fg;
                v.widgets.inactive.bg_fill = faint;
            }
        }
        v
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}
