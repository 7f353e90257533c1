//! # Search Screen
//!
//! Origin/destination/date/passengers form with a route-swap control.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

const FIELD_SIZE: [f32; 2] = [280.0, 30.0];

/// Render the flight search form
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        forms::render_form_heading(ui, Screen::Search.title(), &theme);
        forms::render_hint(ui, "Search hundreds of (imaginary) routes", &theme);
        ui.add_space(20.0);

        // Origin field
        let mut origin_input = state.search_form.origin.clone();
        forms::render_text_input(ui, "From:", &mut origin_input, "City or airport", FIELD_SIZE);
        {
            app.state.write().search_form.origin = origin_input;
        }

        ui.add_space(4.0);

        // Swap origin/destination
        if ui.button("⇅ Swap").clicked() {
            app.handle_swap_route();
        }

        ui.add_space(4.0);

        // Destination field
        let mut destination_input = state.search_form.destination.clone();
        let destination_response = forms::render_text_input(
            ui,
            "To:",
            &mut destination_input,
            "City or airport",
            FIELD_SIZE,
        );
        let mut submit =
            destination_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        {
            app.state.write().search_form.destination = destination_input;
        }

        ui.add_space(10.0);

        // Departure date, pre-populated with today at startup
        ui.label("Departure:");
        let mut date = state
            .search_form
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        ui.add(egui_extras::DatePickerButton::new(&mut date).id_salt("depart-date"));
        {
            app.state.write().search_form.date = Some(date);
        }

        ui.add_space(10.0);

        // Passenger count, clamped to >= 1
        ui.label("Passengers:");
        let mut passengers = state.search_form.passengers;
        ui.add(egui::DragValue::new(&mut passengers).range(1..=9));
        {
            app.state.write().search_form.passengers = passengers;
        }

        ui.add_space(15.0);

        if let Some(error) = &state.search_form.error {
            forms::render_error(ui, error, &theme);
        }

        if forms::render_button(
            ui,
            "Search Flights",
            Some(theme.accent),
            Some(egui::vec2(180.0, 38.0)),
        )
        .clicked()
        {
            submit = true;
        }

        if submit {
            app.handle_search_submit();
        }

        ui.add_space(10.0);
        forms::render_hint(ui, "Press <Enter> to search", &theme);
    });
}
