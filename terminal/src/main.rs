//! Desktop entry point: load `.env`, start logging, enter the Tokio runtime
//! and hand the window to eframe.

use std::time::Duration;

use mpos_terminal::app::App;
use mpos_terminal::debug;
use mpos_terminal::ui::{self, theme::Theme};

const WINDOW_TITLE: &str = "LAZIS MPOS";

/// eframe wrapper around the [`App`] orchestrator
struct PosWindow {
    app: App,
}

impl PosWindow {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self { app: App::new() }
    }
}

impl eframe::App for PosWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app);

        // Keep polling for finished API calls while idle
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    debug::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting {}", WINDOW_TITLE);

    // Handlers call tokio::spawn from the UI thread
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(PosWindow::new(cc)))),
    )?;

    tracing::info!("Window closed");
    Ok(())
}
