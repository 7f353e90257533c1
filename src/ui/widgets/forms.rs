//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;
use egui;

/// Render a labeled single-line text input field
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    size: [f32; 2],
) -> egui::Response {
    ui.label(label);
    ui.add_sized(size, egui::TextEdit::singleline(value).hint_text(hint))
}

/// Render a styled button with optional fill color and minimum size
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(egui::RichText::new(text).size(16.0));

    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(text)
            .size(24.0)
            .strong()
            .color(theme.accent),
    );
    ui.add_space(20.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, message: &str, theme: &Theme) {
    ui.colored_label(theme.error, message);
    ui.add_space(5.0);
}

/// Render a dim hint line
pub fn render_hint(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.colored_label(theme.dim, text);
}
