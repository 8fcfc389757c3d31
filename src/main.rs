#![windows_subsystem = "windows"]
//! Hello GUI - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::{debug, error, info, warn};
use ui::components::hello_window;
use ui::guide::guide_window;
use utils::{get_data_dir, rasterize_icon};

const LOG_FILE_PREFIX: &str = "hello-gui.log";
const DEFAULT_LOG_FILTER: &str = "info,hello_gui=debug";

/// Daily rolling file log in `<data dir>/logs`, mirrored to stderr in debug builds.
/// Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);

    // Release builds run without a console on Windows
    let console_layer = cfg!(debug_assertions)
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Hello GUI starting");

    let settings = settings::Settings::load(&data_dir);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(settings.window_size().unwrap_or(DEFAULT_WINDOW_SIZE))
        .with_min_inner_size(MIN_WINDOW_SIZE)
        .with_title(WINDOW_TITLE);

    match rasterize_icon(ICON_SIZE) {
        Some((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        None => warn!("Failed to rasterize window icon"),
    }

    if let Some(pos) = settings.window_pos() {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        vsync: true,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &settings, data_dir)))),
    );

    if let Err(e) = &result {
        error!(error = %e, "Failed to create window or graphics context");
    }
    result
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        self.track_window(ctx);

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        let output = hello_window(ctx, &mut self.counter);
        if output.clicked {
            debug!(counter = self.counter.value(), button = ?output.button_rect, "Button clicked");
        }

        if let Some(step) = guide_window(ctx, &mut self.guide).copied {
            debug!(step = step + 1, "Guide snippet copied");
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        theme::CLEAR_COLOR
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(clicks = self.counter.value(), "Application shutting down");
        self.save_settings();
    }
}
