//! # GUI Rendering Framework
//!
//! Per-frame rendering pipeline: clone a state snapshot, dispatch to the
//! active screen, and surface any pending notices as toasts.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, NoticeLevel, Screen};
use egui;

/// Main render function - called every frame by the eframe app
pub fn render(
    ctx: &egui::Context,
    app: &mut App,
    notifications: &mut widgets::notifications::NotificationManager,
) {
    // Surface notices queued by the handlers and event processing
    for (level, message) in app.take_notices() {
        match level {
            NoticeLevel::Success => notifications.success(message),
            NoticeLevel::Warning => notifications.warning(message),
        }
    }

    // One-shot scroll request, set whenever a screen is entered
    let scroll_to_top = {
        let mut state = app.state.write();
        std::mem::take(&mut state.scroll_to_top)
    };

    // Snapshot state for rendering; the lock is released before any UI work
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held elsewhere, skip this frame
                return;
            }
        }
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        let mut scroll_area = egui::ScrollArea::vertical();
        if scroll_to_top {
            scroll_area = scroll_area.vertical_scroll_offset(0.0);
        }
        scroll_area.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match state.current_screen {
                Screen::Search => screens::search::render(ui, &state, app),
                Screen::Results => screens::results::render(ui, &state, app),
                Screen::Booking => screens::booking::render(ui, &state, app),
                Screen::Success => screens::success::render(ui, &state, app),
            }
        });
    });
}
