//! # Success Screen
//!
//! Confirmation message and the final boarding pass.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

/// Render the confirmation screen with the boarding pass
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(50.0);
        ui.label(
            egui::RichText::new("Booking Confirmed!")
                .size(28.0)
                .strong()
                .color(theme.success),
        );
        forms::render_hint(ui, "Your (entirely fictional) trip is booked.", &theme);
        ui.add_space(24.0);

        if let Some(ticket) = &state.ticket {
            egui::Frame::group(ui.style())
                .fill(theme.panel)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(420.0);

                    ui.label(
                        egui::RichText::new(format!("{} Boarding Pass", ticket.airline))
                            .size(18.0)
                            .strong(),
                    );
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.colored_label(theme.dim, "Passenger");
                            ui.label(egui::RichText::new(&ticket.passenger).strong());
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.colored_label(theme.dim, "Class");
                                ui.label(egui::RichText::new(ticket.class_name).strong());
                            });
                        });
                    });

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} ✈ {}",
                                ticket.origin_code, ticket.destination_code
                            ))
                            .size(24.0)
                            .strong(),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&ticket.departs).size(18.0).strong());
                                ui.colored_label(theme.dim, ticket.gate);
                            });
                        });
                    });
                });
        }

        ui.add_space(24.0);
        if forms::render_button(
            ui,
            "Back to Home",
            Some(theme.accent),
            Some(egui::vec2(160.0, 36.0)),
        )
        .clicked()
        {
            app.handle_go_home();
        }
    });
}
