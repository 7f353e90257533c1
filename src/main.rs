//! SkyBook binary: window setup, logging, theme config, eframe loop.

use std::path::Path;

use skybook::ui::theme::{Theme, ThemeConfig};
use skybook::ui::widgets::notifications::NotificationManager;
use skybook::{ui, App};

const THEME_CONFIG_PATH: &str = "./skybook-theme.json";

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skybook=info")),
        )
        .init();

    let theme_config = match ThemeConfig::load_from_file(Path::new(THEME_CONFIG_PATH)) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "failed to load theme config, using defaults");
            ThemeConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SkyBook")
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SkyBook",
        options,
        Box::new(move |cc| {
            Theme::from_config(&theme_config).apply(&cc.egui_ctx);
            Ok(Box::new(SkybookApp::new()))
        }),
    )
}

/// eframe wrapper around the [`App`] orchestrator.
struct SkybookApp {
    app: App,
    notifications: NotificationManager,
}

impl SkybookApp {
    fn new() -> Self {
        Self {
            app: App::new(),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for SkybookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain async events (booking confirmation) before rendering
        self.app.on_tick();

        ui::render(ctx, &mut self.app, &mut self.notifications);
        self.notifications.show(ctx);

        // Keep repainting while the simulated booking call is pending so the
        // confirmation shows up without waiting for user input
        if self.app.state.read().booking_in_progress {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
