//! App module - contains the main application state and logic

pub mod counter;

use crate::settings::Settings;
use crate::theme;
use crate::ui::guide::GuideState;
use counter::ClickCounter;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) counter: ClickCounter,
    pub(crate) guide: GuideState,
    // Window geometry, tracked every frame and saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            counter: ClickCounter::new(),
            guide: GuideState::default(),
            window_pos: settings.window_pos().map(egui::Pos2::from),
            window_size: settings.window_size().map(egui::Vec2::from),
            needs_center: settings.window_pos().is_none(),
            data_dir,
        }
    }

    /// Record the current viewport geometry so it can be restored next launch
    pub(crate) fn track_window(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });
    }

    pub fn settings(&self) -> Settings {
        Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        }
    }

    pub fn save_settings(&self) {
        self.settings().save(&self.data_dir);
    }
}
