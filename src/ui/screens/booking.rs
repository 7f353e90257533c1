//! # Booking Screen
//!
//! Booking summary derived from the pending selection, the optional
//! passenger name form, and the confirm button with its simulated
//! "Processing..." state.

use crate::app::{App, AppState};
use crate::flights::TAXES_AND_FEES;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

const FIELD_SIZE: [f32; 2] = [240.0, 30.0];

/// Render the booking summary and passenger form
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    if ui.button("← Back to Results").clicked() {
        app.handle_back_to_results();
    }
    ui.add_space(10.0);

    let Some(selection) = &state.selection else {
        // Only reachable if the confirmation event rewound state mid-frame.
        ui.colored_label(theme.dim, "No flight selected.");
        return;
    };

    ui.columns(2, |columns| {
        // Left: passenger details
        columns[0].vertical(|ui| {
            forms::render_form_heading(ui, "Passenger Details", &theme);

            let mut first_name_input = state.passenger_form.first_name.clone();
            forms::render_text_input(ui, "First Name:", &mut first_name_input, "John", FIELD_SIZE);
            {
                app.state.write().passenger_form.first_name = first_name_input;
            }
            ui.add_space(10.0);

            let mut last_name_input = state.passenger_form.last_name.clone();
            forms::render_text_input(ui, "Last Name:", &mut last_name_input, "Doe", FIELD_SIZE);
            {
                app.state.write().passenger_form.last_name = last_name_input;
            }

            ui.add_space(6.0);
            forms::render_hint(ui, "Names are optional - blank books as Guest", &theme);
            ui.add_space(16.0);

            // Simulated booking API: while in flight the button dims and
            // reads Processing...
            if state.booking_in_progress {
                ui.add_enabled(
                    false,
                    egui::Button::new(egui::RichText::new("Processing...").size(16.0))
                        .min_size(egui::vec2(180.0, 38.0)),
                );
            } else if forms::render_button(
                ui,
                "Confirm Booking",
                Some(theme.accent),
                Some(egui::vec2(180.0, 38.0)),
            )
            .clicked()
            {
                app.handle_booking_submit();
            }
        });

        // Right: booking summary
        columns[1].vertical(|ui| {
            egui::Frame::group(ui.style())
                .fill(theme.panel)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new("Booking Summary").size(18.0).strong());
                    ui.add_space(8.0);

                    let flight = &selection.flight;
                    ui.label(
                        egui::RichText::new(format!("{} to {}", flight.origin, flight.destination))
                            .strong(),
                    );
                    ui.colored_label(
                        theme.dim,
                        format!("{} • {}", flight.airline, selection.fare.class.label()),
                    );
                    ui.colored_label(theme.dim, format!("{} - {}", flight.departs, flight.arrives));

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);

                    summary_row(ui, "Ticket Price", selection.fare.price, &theme);
                    summary_row(ui, "Taxes & Fees", TAXES_AND_FEES, &theme);
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Total").size(16.0).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("${}", selection.total()))
                                    .size(16.0)
                                    .strong()
                                    .color(theme.accent),
                            );
                        });
                    });
                });
        });
    });
}

fn summary_row(ui: &mut egui::Ui, label: &str, amount: u32, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("${amount}"));
        });
    });
}
