//! # GUI Theme
//!
//! Dark night-sky theme for egui. Colors can be overridden through a JSON
//! config file next to the binary; absent or unreadable files fall back to
//! the defaults.

use egui::{Color32, Context, CornerRadius, Stroke, Visuals};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable theme configuration for the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Window background
    pub background: [u8; 3],
    /// Card/panel fill
    pub panel: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Secondary/dim text
    pub dim: [u8; 3],
    /// Primary accent (buttons, prices, highlights)
    pub accent: [u8; 3],
    /// Darker accent for hover/borders
    pub accent_dark: [u8; 3],
    /// Success green (confirmation screen)
    pub success: [u8; 3],
    /// Warning amber (validation notices)
    pub warning: [u8; 3],
    /// Error red (inline form errors)
    pub error: [u8; 3],
    /// Card borders
    pub border: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [13, 17, 28],
            panel: [22, 28, 44],
            text: [235, 238, 245],
            dim: [140, 148, 166],
            accent: [99, 132, 255],
            accent_dark: [62, 84, 172],
            success: [66, 199, 130],
            warning: [255, 184, 77],
            error: [240, 84, 84],
            border: [46, 54, 76],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file. A missing file is not an
    /// error; it yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Resolved theme colors used by the renderers.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub accent: Color32,
    pub accent_dark: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub border: Color32,
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Theme {
            background: rgb(config.background),
            panel: rgb(config.panel),
            text: rgb(config.text),
            dim: rgb(config.dim),
            accent: rgb(config.accent),
            accent_dark: rgb(config.accent_dark),
            success: rgb(config.success),
            warning: rgb(config.warning),
            error: rgb(config.error),
            border: rgb(config.border),
        }
    }

    /// Apply the theme to the egui context visuals.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel;
        visuals.override_text_color = Some(self.text);
        visuals.selection.bg_fill = self.accent_dark;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_fill = self.panel;
        visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
        visuals.widgets.hovered.bg_fill = self.accent_dark;
        visuals.widgets.active.bg_fill = self.accent;
        ctx.set_visuals(visuals);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_config(&ThemeConfig::default())
    }
}
