//! # Results Screen
//!
//! Price-sorted flight cards. Each card shows a collapsed summary row;
//! clicking it reveals the three fare-class options. At most one card is
//! expanded at a time.

use crate::app::{App, AppState};
use crate::flights::{compute_price, Flight, FARE_CLASSES};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

/// Render the flight results list
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        if ui.button("← Modify Search").clicked() {
            app.handle_back_to_search();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(criteria) = &state.search {
                ui.colored_label(theme.dim, criteria.date.format("%a, %-d %b").to_string());
                ui.label(
                    egui::RichText::new(format!("{} → {}", criteria.origin, criteria.destination))
                        .size(18.0)
                        .strong(),
                );
            }
        });
    });
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    for (index, flight) in state.results.flights.iter().enumerate() {
        let expanded = state.results.expanded == Some(index);
        render_flight_card(ui, flight, index, expanded, app, &theme);
        ui.add_space(8.0);
    }
}

/// One flight card: clickable summary header plus, when expanded, the
/// fare-class options.
fn render_flight_card(
    ui: &mut egui::Ui,
    flight: &Flight,
    index: usize,
    expanded: bool,
    app: &mut App,
    theme: &Theme,
) {
    egui::Frame::group(ui.style())
        .fill(theme.panel)
        .stroke(egui::Stroke::new(1.0, if expanded { theme.accent_dark } else { theme.border }))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Clicking anywhere on the header toggles the card
            let header = ui
                .scope_builder(egui::UiBuilder::new().sense(egui::Sense::click()), |ui| {
                    render_card_header(ui, flight, theme);
                })
                .response;
            if header.clicked() {
                app.handle_flight_toggle(index);
            }

            if expanded {
                ui.add_space(6.0);
                ui.separator();
                ui.add_space(6.0);
                render_fare_options(ui, flight, index, app, theme);
            }
        });
}

fn render_card_header(ui: &mut egui::Ui, flight: &Flight, theme: &Theme) {
    ui.horizontal(|ui| {
        // Airline badge and name
        ui.label(
            egui::RichText::new(flight.airline_code)
                .size(18.0)
                .strong()
                .color(theme.accent),
        );
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(flight.airline).strong());
            ui.colored_label(theme.dim, "Non-stop");
        });

        ui.add_space(20.0);

        // Departure
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&flight.departs).size(16.0));
            ui.colored_label(theme.dim, &flight.origin);
        });

        // Duration
        ui.vertical(|ui| {
            ui.colored_label(theme.dim, &flight.duration);
            ui.label("✈ ─────");
        });

        // Arrival
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&flight.arrives).size(16.0));
            ui.colored_label(theme.dim, &flight.destination);
        });

        // Price, right-aligned
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(format!("${}", flight.base_price))
                        .size(18.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.colored_label(theme.dim, "per person");
            });
        });
    });
}

fn render_fare_options(ui: &mut egui::Ui, flight: &Flight, index: usize, app: &mut App, theme: &Theme) {
    ui.columns(FARE_CLASSES.len(), |columns| {
        for (column, fare_class) in columns.iter_mut().zip(FARE_CLASSES.iter()) {
            let price = compute_price(flight.base_price, fare_class.multiplier);
            column.vertical(|ui| {
                ui.label(egui::RichText::new(fare_class.name.label()).strong());
                ui.label(
                    egui::RichText::new(format!("${price}"))
                        .size(16.0)
                        .color(theme.accent),
                );
                for feature in fare_class.features {
                    ui.colored_label(theme.dim, format!("• {feature}"));
                }
                ui.add_space(6.0);
                if forms::render_button(ui, "Select", Some(theme.accent_dark), None).clicked() {
                    app.handle_fare_select(index, fare_class.name);
                }
            });
        }
    });
}
